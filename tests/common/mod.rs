#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use wwwd::files::DocumentRoot;
use wwwd::site::Site;

/// A throwaway document root:
///
/// ```text
/// index.html        <p>hi</p>
/// base.css          h1 { color: orange; }
/// sub/index.html    <p>sub</p>
/// ```
pub fn temp_site() -> (TempDir, Site) {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "index.html", "<p>hi</p>");
    write(dir.path(), "base.css", "h1 { color: orange; }");
    write(dir.path(), "sub/index.html", "<p>sub</p>");

    let root = DocumentRoot::new(dir.path().to_str().unwrap()).unwrap();
    (dir, Site::new(root))
}

pub fn write(base: &Path, rel: &str, contents: &str) {
    let path = base.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

pub struct Parsed {
    pub status_line: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl Parsed {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Splits raw response bytes into status line, headers and body.
pub fn parse_response(raw: &[u8]) -> Parsed {
    let end = raw
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("response has no header terminator");
    let head = std::str::from_utf8(&raw[..end]).unwrap();
    let mut lines = head.split("\r\n");
    let status_line = lines.next().unwrap().to_string();
    let headers = lines
        .map(|l| {
            let (k, v) = l.split_once(": ").unwrap();
            (k.to_string(), v.to_string())
        })
        .collect();

    Parsed {
        status_line,
        headers,
        body: raw[end + 4..].to_vec(),
    }
}

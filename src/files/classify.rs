use crate::files::DocumentRoot;

/// What a resolved path refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathClass {
    /// Ends in `.html` or `.css`; may still be missing on disk.
    File,
    /// Ends in `/`; served through its `index.html`.
    Directory,
    /// No servable suffix and no trailing slash. Answered with a redirect.
    BadPath,
    /// Refused outright.
    NotFound,
}

impl std::fmt::Display for PathClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PathClass::File => "file",
            PathClass::Directory => "directory",
            PathClass::BadPath => "bad-path",
            PathClass::NotFound => "not-found",
        };
        f.write_str(name)
    }
}

fn has_servable_suffix(path: &str) -> bool {
    path.ends_with('/') || path.ends_with(".html") || path.ends_with(".css")
}

/// Classifies a resolved path by its text. The filesystem is never touched.
///
/// The suffix check runs first, so `/../x` redirects rather than 404s. The
/// traversal guard only catches `../` directly after the root; anything
/// nested or percent-encoded gets through to the loader.
pub fn classify(resolved: &str, root: &DocumentRoot) -> PathClass {
    if !has_servable_suffix(resolved) {
        return PathClass::BadPath;
    }

    if resolved.starts_with(&root.escape_prefix()) {
        return PathClass::NotFound;
    }

    if resolved.ends_with(".css") || resolved.ends_with(".html") {
        PathClass::File
    } else if resolved.ends_with('/') {
        PathClass::Directory
    } else {
        tracing::error!(path = %resolved, "path passed suffix check but matched no class");
        PathClass::NotFound
    }
}

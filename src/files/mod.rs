//! Mapping request paths onto the document root.
//!
//! - **`classify`**: decides what a resolved path names, from its text alone
//! - **`loader`**: reads the file behind a `File` or `Directory` classification

pub mod classify;
pub mod loader;

pub use classify::{PathClass, classify};
pub use loader::load;

/// The directory everything is served from, kept without a trailing `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRoot(String);

impl DocumentRoot {
    /// Returns `None` when nothing is left after trimming trailing slashes.
    pub fn new(root: &str) -> Option<Self> {
        let trimmed = root.trim_end_matches('/');
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Root and raw request path glued together, no separator inserted.
    ///
    /// ```
    /// # use wwwd::files::DocumentRoot;
    /// let root = DocumentRoot::new("./www/").unwrap();
    /// assert_eq!(root.resolve("/index.html"), "./www/index.html");
    /// ```
    pub fn resolve(&self, raw_path: &str) -> String {
        format!("{}{}", self.0, raw_path)
    }

    /// Prefix of a resolved path that climbs out of the root straight away.
    pub fn escape_prefix(&self) -> String {
        format!("{}/../", self.0)
    }

    /// The site-relative part of a resolved path.
    pub fn strip<'a>(&self, resolved: &'a str) -> &'a str {
        resolved.strip_prefix(self.0.as_str()).unwrap_or(resolved)
    }
}

impl Default for DocumentRoot {
    fn default() -> Self {
        Self("./www".to_string())
    }
}

impl std::fmt::Display for DocumentRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

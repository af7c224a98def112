//! Content types the server can answer with.
//!
//! Only HTML and CSS are served; the type is picked from the requested path's
//! suffix, not from the file on disk.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Html,
    Css,
}

impl ContentType {
    /// `.css` is CSS, anything else that gets this far (`.html` or a
    /// directory) is HTML.
    ///
    /// ```
    /// # use wwwd::http::mime::ContentType;
    /// assert_eq!(ContentType::for_path("/deep/base.css"), ContentType::Css);
    /// assert_eq!(ContentType::for_path("/deep/"), ContentType::Html);
    /// ```
    pub fn for_path(path: &str) -> Self {
        if path.ends_with(".css") {
            ContentType::Css
        } else {
            ContentType::Html
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Html => "text/html",
            ContentType::Css => "text/css",
        }
    }
}

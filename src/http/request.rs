/// HTTP request methods.
///
/// Only GET is served. Every other token, HTTP method or not, is kept
/// verbatim so the dispatcher can answer 405 and log what was asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// Anything else
    Other(String),
}

impl Method {
    /// Parses a method token, ignoring ASCII case.
    ///
    /// # Example
    ///
    /// ```
    /// # use wwwd::http::request::Method;
    /// assert_eq!(Method::parse("GET"), Method::GET);
    /// assert_eq!(Method::parse("get"), Method::GET);
    /// assert_eq!(Method::parse("POST"), Method::Other("POST".to_string()));
    /// ```
    pub fn parse(token: &str) -> Self {
        if token.eq_ignore_ascii_case("GET") {
            Method::GET
        } else {
            Method::Other(token.to_string())
        }
    }

    pub fn is_get(&self) -> bool {
        matches!(self, Method::GET)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::Other(token) => token,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The request line of a client request.
///
/// Headers and body are never looked at, so they are not kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The HTTP method (GET, POST, etc.)
    pub method: Method,
    /// The raw request path, e.g. "/index.html". Not normalized.
    pub path: String,
    /// Protocol version token. Must be present, never validated.
    pub version: String,
}

impl Request {
    pub fn new(method: Method, path: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            version: version.into(),
        }
    }
}

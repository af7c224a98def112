use thiserror::Error;

use crate::http::response::Response;

/// Everything that can stop a request short of a 200.
///
/// Each kind maps to exactly one response; see [`ServeError::status`].
#[derive(Debug, Error)]
pub enum ServeError {
    #[error("malformed request line: expected 3 tokens, got {tokens}")]
    MalformedRequestLine { tokens: usize },

    #[error("method not allowed: {0}")]
    UnsupportedMethod(String),

    #[error("path rejected: {path}, redirecting to {location}")]
    PathRejected { path: String, location: String },

    #[error("resource missing: {path}")]
    ResourceMissing {
        path: String,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("internal invariant violated: {0}")]
    InternalInvariantViolation(String),
}

impl ServeError {
    pub fn missing(path: impl Into<String>) -> Self {
        ServeError::ResourceMissing {
            path: path.into(),
            source: None,
        }
    }

    pub fn missing_io(path: impl Into<String>, source: std::io::Error) -> Self {
        ServeError::ResourceMissing {
            path: path.into(),
            source: Some(source),
        }
    }

    /// Numeric status this error is answered with.
    pub fn status(&self) -> u16 {
        match self {
            ServeError::UnsupportedMethod(_) => 405,
            ServeError::PathRejected { .. } => 301,
            _ => 404,
        }
    }

    pub fn to_response(&self) -> Response {
        match self {
            ServeError::UnsupportedMethod(_) => Response::method_not_allowed(),
            ServeError::PathRejected { location, .. } => Response::moved_permanently(location),
            _ => Response::not_found(),
        }
    }
}

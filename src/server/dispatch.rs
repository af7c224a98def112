//! Turns the bytes of one request into exactly one response.

use crate::error::ServeError;
use crate::files::{self, PathClass};
use crate::http::mime::ContentType;
use crate::http::parser::parse_request_line;
use crate::http::response::Response;
use crate::site::Site;

/// Never fails: every error is mapped to its response here, with 404 as the
/// catch-all.
pub async fn dispatch(raw: &[u8], site: &Site) -> Response {
    match handle(raw, site).await {
        Ok(response) => response,
        Err(e) => {
            match &e {
                ServeError::InternalInvariantViolation(_) => tracing::error!(error = %e, "request failed"),
                ServeError::ResourceMissing { source: Some(io), .. } => {
                    tracing::warn!(error = %e, cause = %io, "request failed")
                }
                _ => tracing::info!(error = %e, status = e.status(), "request refused"),
            }
            e.to_response()
        }
    }
}

async fn handle(raw: &[u8], site: &Site) -> Result<Response, ServeError> {
    let request = parse_request_line(raw)?;

    // Method first: non-GET never reaches the filesystem.
    if !request.method.is_get() {
        return Err(ServeError::UnsupportedMethod(request.method.to_string()));
    }

    let resolved = site.root.resolve(&request.path);
    let class = files::classify(&resolved, &site.root);
    tracing::debug!(method = %request.method, path = %request.path, %class, "classified");

    match class {
        PathClass::File | PathClass::Directory => {
            let text = files::load(&resolved, class, site).await?;
            Ok(Response::ok(ContentType::for_path(&request.path), text))
        }
        PathClass::BadPath => Err(ServeError::PathRejected {
            location: site.redirect_location(&resolved),
            path: request.path,
        }),
        PathClass::NotFound => Err(ServeError::missing(resolved)),
    }
}

use crate::error::ServeError;
use crate::http::request::{Method, Request};

/// Size of the single read taken from a client socket. Anything past this is
/// never seen.
pub const READ_BUFFER_SIZE: usize = 1024;

/// Parses the request line out of whatever bytes the client sent.
///
/// The buffer is decoded lossily, trimmed, and cut at the first `\n` (a
/// trailing `\r` is whitespace and falls away). The line must hold exactly
/// three whitespace-separated tokens.
pub fn parse_request_line(buf: &[u8]) -> Result<Request, ServeError> {
    let text = String::from_utf8_lossy(buf);
    let line = text.trim().lines().next().unwrap_or("");

    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [method, path, version] => Ok(Request::new(Method::parse(method), *path, *version)),
        _ => Err(ServeError::MalformedRequestLine {
            tokens: tokens.len(),
        }),
    }
}

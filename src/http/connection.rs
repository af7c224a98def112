use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};

use crate::http::parser::READ_BUFFER_SIZE;
use crate::http::writer::ResponseWriter;
use crate::server::dispatch::dispatch;
use crate::site::Site;

/// One accepted client stream, good for exactly one request.
pub struct Connection<S> {
    stream: S,
    site: Arc<Site>,
    state: ConnectionState,
}

enum ConnectionState {
    Reading,
    Processing(Vec<u8>),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, site: Arc<Site>) -> Self {
        Self {
            stream,
            site,
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    let raw = self.read_request().await?;
                    self.state = ConnectionState::Processing(raw);
                }

                ConnectionState::Processing(raw) => {
                    let response = dispatch(raw, &self.site).await;
                    tracing::info!(status = response.status.as_u16(), "responding");
                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    // No keep-alive: one response and we are done.
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// A single read of at most `READ_BUFFER_SIZE` bytes. Longer requests are
    /// cut off. Empty when the client closed its side without sending
    /// anything; that still gets a reply.
    pub async fn read_request(&mut self) -> anyhow::Result<Vec<u8>> {
        let mut buf = [0u8; READ_BUFFER_SIZE];
        let n = self.stream.read(&mut buf).await?;

        if n == 0 {
            tracing::debug!("client sent nothing before closing its side");
        }

        Ok(buf[..n].to_vec())
    }
}

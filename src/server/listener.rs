use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;
use crate::site::Site;

/// Pause after a failed accept, so fd exhaustion does not turn into a
/// busy loop.
const ACCEPT_BACKOFF: Duration = Duration::from_millis(100);

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let site = Arc::new(Site::from_config(&cfg.site)?);
    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!("Listening on {}, serving {}", cfg.server.listen_addr, site.root);

    serve(listener, site).await
}

/// Accepts forever, one task per connection. A failing connection, or a
/// failed accept, is logged and forgotten. Only binding is fatal.
pub async fn serve(listener: TcpListener, site: Arc<Site>) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                tracing::warn!(error = %e, "Accept failed, retrying");
                tokio::time::sleep(ACCEPT_BACKOFF).await;
                continue;
            }
        };
        info!("Accepted connection from {}", peer);

        let site = Arc::clone(&site);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, site);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}

use std::time::Duration;

use anyhow::{anyhow, Context};
use tokio::net::{TcpListener, TcpSocket};
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;

/// Binds the listening socket with the configured backlog.
pub async fn bind(cfg: &Config) -> anyhow::Result<TcpListener> {
    let addr = tokio::net::lookup_host(cfg.listen_addr.as_str())
        .await
        .with_context(|| format!("failed to resolve {}", cfg.listen_addr))?
        .next()
        .ok_or_else(|| anyhow!("{} did not resolve to any address", cfg.listen_addr))?;

    let socket = if addr.is_ipv4() {
        TcpSocket::new_v4()?
    } else {
        TcpSocket::new_v6()?
    };
    socket.set_reuseaddr(true)?;
    socket
        .bind(addr)
        .with_context(|| format!("failed to bind {}", addr))?;

    let listener = socket
        .listen(cfg.backlog)
        .with_context(|| format!("failed to listen on {}", addr))?;

    info!("Listening on {} (backlog {})", listener.local_addr()?, cfg.backlog);
    Ok(listener)
}

/// Accepts connections forever, one task per connection.
///
/// Never waits on a handler. Returns only if `accept` itself fails.
pub async fn serve(listener: TcpListener, work_delay: Duration) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener
            .accept()
            .await
            .context("failed to accept connection")?;
        info!("Accepted connection from {}", peer);

        tokio::spawn(async move {
            let conn = Connection::new(socket, work_delay);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {:#}", peer, e);
            }
        });
    }
}

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = bind(cfg).await?;
    serve(listener, cfg.work_delay()).await
}

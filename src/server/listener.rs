use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::http::connection::Connection;

/// Binds the configured address and serves until the surrounding task is
/// cancelled.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let listener = TcpListener::bind(&cfg.listen_addr).await?;
    info!("Listening on {}", cfg.listen_addr);
    info!("open http://{}/ with your browser!", cfg.listen_addr);

    serve(listener).await
}

/// Accept loop over an already-bound listener. One task per connection;
/// a connection's failure is logged and never reaches the loop.
pub async fn serve(listener: TcpListener) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        tokio::spawn(async move {
            let mut conn = Connection::new(socket);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}

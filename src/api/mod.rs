pub mod env;
pub mod error;
pub mod handlers;
pub mod result;
pub mod router;
pub mod statics;

use std::net::SocketAddr;

use anyhow::Result;
pub use env::Env;
use tokio::{net::TcpListener, task::JoinHandle};
use tracing::{error, info};

/// Bind the HTTP server and serve until the env's cancel token fires.
/// Returns the bound address (the configured port may be 0 in tests) and
/// the serve task's handle.
pub async fn run(env: Env) -> Result<(SocketAddr, JoinHandle<()>)> {
    let listener = TcpListener::bind(SocketAddr::from(([0, 0, 0, 0], env.config.port))).await?;
    let addr = listener.local_addr()?;
    let cancel_token = env.cancel_token.clone();
    let router = router::new(env);

    info!("HTTP server running @ http://{}", addr);
    Ok((
        addr,
        tokio::spawn(async move {
            if axum::serve(listener, router)
                .with_graceful_shutdown(cancel_token.cancelled_owned())
                .await
                .is_err()
            {
                error!("HTTP server exited with error");
            }
            info!("HTTP server exited");
        }),
    ))
}

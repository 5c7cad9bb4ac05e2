use tokio::{select, signal, task::JoinHandle};
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Translate ctrl-c into cancellation. The handle exits once the token is
/// cancelled, whether by us or by anyone else.
pub fn run(cancel_token: CancellationToken) -> JoinHandle<()> {
    tokio::spawn(async move {
        select! {
            result = signal::ctrl_c() => {
                match result {
                    Ok(()) => info!("Received ctrl-c, shutting down"),
                    Err(e) => error!("Failed to listen for ctrl-c: {}", e),
                }
                cancel_token.cancel();
            }
            _ = cancel_token.cancelled() => {}
        }
        info!("Stopper exited");
    })
}

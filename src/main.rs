use std::sync::Arc;

use adressbuch::{
    api::{self, Env},
    config::Config,
    logging, stopper,
    store::Store,
};
use anyhow::Result;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    logging::setup();
    let config = Config::load()?;
    let store = Store::load(&config.data_file);
    info!(
        "Loaded {} address entries from {}",
        store.len(),
        config.data_file.display()
    );
    let store = Arc::new(RwLock::new(store));
    let cancel_token = CancellationToken::new();
    let stopper_handle = stopper::run(cancel_token.clone());
    let (_, api_handle) = api::run(Env {
        config: config.clone(),
        cancel_token: cancel_token.clone(),
        store: store.clone(),
    })
    .await?;

    for handle in [api_handle, stopper_handle] {
        handle.await?;
    }

    // Flush once more on the way out so a clean shutdown always leaves the
    // file matching the in-memory state.
    store.read().await.persist()?;
    info!("Goodbye.");
    Ok(())
}

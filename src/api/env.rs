use std::{path::Path, sync::Arc};

use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use crate::{config::Config, store::Store};

/// Shared request state. The store sits behind a single RwLock: reads take
/// the read half, every mutate-then-persist sequence runs entirely under
/// the write half, which serializes all writes to the data file.
#[derive(Clone)]
pub struct Env {
    pub config: Config,
    pub cancel_token: CancellationToken,
    pub store: Arc<RwLock<Store>>,
}

impl Env {
    pub fn new_test(data_file: &Path, web_root: &Path) -> Self {
        Self {
            config: Config::new_test(data_file.to_path_buf(), web_root.to_path_buf()),
            cancel_token: CancellationToken::new(),
            store: Arc::new(RwLock::new(Store::load(data_file))),
        }
    }
}

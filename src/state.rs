use std::sync::Arc;

use crate::{ActionSettings, BlockhashSource};

/// Shared by every request. The blockhash source is read-only.
#[derive(Clone)]
pub struct AppState {
    pub blockhash: Arc<dyn BlockhashSource>,
    pub settings: Arc<ActionSettings>,
}

impl AppState {
    pub fn new(blockhash: Arc<dyn BlockhashSource>, settings: ActionSettings) -> Self {
        Self {
            blockhash,
            settings: Arc::new(settings),
        }
    }
}

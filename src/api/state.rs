use std::sync::Arc;

use crate::services::SyncWorkflow;

#[derive(Clone)]
pub struct AppState {
    pub sync: Arc<SyncWorkflow>,
}

pub mod sync;
pub mod throttle;

pub use sync::{CollectionUpdate, RefreshSummary, SyncWorkflow};
pub use throttle::Throttle;

mod game;
pub mod storage;

pub use game::{CollectionEntry, GameRecord, UNKNOWN};
pub use storage::GameStore;

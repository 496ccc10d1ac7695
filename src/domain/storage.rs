use super::GameRecord;
use crate::error::Result;

/// Key-value store of game records, keyed by catalog identifier.
pub trait GameStore: Send + Sync {
    fn contains(&self, id: &str) -> Result<bool>;
    fn load_game(&self, id: &str) -> Result<Option<GameRecord>>;
    /// Inserts the record, replacing any existing one with the same id.
    fn save_game(&self, game: &GameRecord) -> Result<()>;
    fn list_ids(&self) -> Result<Vec<String>>;
    fn load_all(&self) -> Result<Vec<GameRecord>>;
    fn count(&self) -> Result<usize>;
}

pub struct StorageKeys;

impl StorageKeys {
    pub const GAMES_DIR: &'static str = "games";
}

use crate::domain::storage::{GameStore, StorageKeys};
use crate::domain::GameRecord;
use crate::error::{Result, SyncError};
use std::fs;
use std::path::{Path, PathBuf};

/// Keeps one JSON document per game under `<data_dir>/games/<id>.json`.
#[derive(Clone)]
pub struct FileSystemStore {
    data_dir: PathBuf,
}

impl FileSystemStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn games_dir(&self) -> PathBuf {
        self.data_dir.join(StorageKeys::GAMES_DIR)
    }

    /// Bytes outside `[A-Za-z0-9-]` are written as `%XX`, so distinct ids
    /// never share a file.
    fn get_path_for_key(&self, key: &str) -> PathBuf {
        let mut filename = String::with_capacity(key.len());
        for byte in key.bytes() {
            if byte.is_ascii_alphanumeric() || byte == b'-' {
                filename.push(byte as char);
            } else {
                filename.push_str(&format!("%{:02X}", byte));
            }
        }
        self.games_dir().join(format!("{}.json", filename))
    }

    fn ensure_dir(&self, dir: &Path) -> Result<()> {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }

    fn write_json_file<T: serde::Serialize + ?Sized>(&self, key: &str, data: &T) -> Result<()> {
        self.ensure_dir(&self.games_dir())?;

        let path = self.get_path_for_key(key);
        let content = serde_json::to_string_pretty(data)?;
        // Write-then-rename so a reader never sees half a document.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(tmp, path)?;
        Ok(())
    }

    fn read_json_file<T: serde::de::DeserializeOwned>(&self, path: &Path) -> Result<Option<T>> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            Ok(Some(serde_json::from_str(&content)?))
        } else {
            Ok(None)
        }
    }

    fn json_files(&self) -> Result<Vec<PathBuf>> {
        let dir = self.games_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut paths = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();
        Ok(paths)
    }
}

impl GameStore for FileSystemStore {
    fn contains(&self, id: &str) -> Result<bool> {
        Ok(self.get_path_for_key(id).exists())
    }

    fn load_game(&self, id: &str) -> Result<Option<GameRecord>> {
        self.read_json_file(&self.get_path_for_key(id))
    }

    fn save_game(&self, game: &GameRecord) -> Result<()> {
        if game.id.is_empty() {
            return Err(SyncError::Store("game id must not be empty".to_string()));
        }
        self.write_json_file(&game.id, game)
    }

    fn list_ids(&self) -> Result<Vec<String>> {
        Ok(self.load_all()?.into_iter().map(|game| game.id).collect())
    }

    fn load_all(&self) -> Result<Vec<GameRecord>> {
        let mut games = Vec::new();
        for path in self.json_files()? {
            if let Some(game) = self.read_json_file(&path)? {
                games.push(game);
            }
        }
        Ok(games)
    }

    fn count(&self) -> Result<usize> {
        Ok(self.json_files()?.len())
    }
}

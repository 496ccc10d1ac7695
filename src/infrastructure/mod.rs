mod clients;
mod storage;
pub mod xml;

pub use clients::bgg::BggClient;
pub use storage::fs_store::FileSystemStore;

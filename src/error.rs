use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Catalog returned status {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Store error: {0}")]
    Store(String),
}

impl From<quick_xml::de::DeError> for SyncError {
    fn from(err: quick_xml::de::DeError) -> Self {
        SyncError::Parse(err.to_string())
    }
}

impl SyncError {
    pub fn is_transport(&self) -> bool {
        matches!(self, SyncError::Network(_) | SyncError::Status { .. })
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, SyncError::Parse(_))
    }

    pub fn is_store(&self) -> bool {
        matches!(
            self,
            SyncError::Io(_) | SyncError::Serialization(_) | SyncError::Store(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SyncError>;

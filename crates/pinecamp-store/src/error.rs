use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable for key '{key}': {source}")]
    StorageUnavailable {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid storage key '{0}'")]
    InvalidKey(String),

    #[error("failed to serialize inquiries: {0}")]
    Serialize(#[from] serde_json::Error),
}

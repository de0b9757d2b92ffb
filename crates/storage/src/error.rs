use skillconnect_core::error::CoreError;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Input rejected before any remote call (e.g. a foreign URL).
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Storage configuration error: {0}")]
    Config(String),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

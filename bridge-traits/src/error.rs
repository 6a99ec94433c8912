use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    #[error("Bridge capability not available: {0}")]
    NotAvailable(String),

    /// A query was issued before `set_data_source` succeeded
    #[error("No data source set")]
    NoDataSource,

    /// The handle was used after `release`
    #[error("Retriever already released")]
    Released,

    #[error("Cannot read media source {path}: {reason}")]
    UnsupportedSource { path: String, reason: String },

    #[error("Bridge operation failed: {0}")]
    OperationFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BridgeError {
    pub fn unsupported_source(path: &std::path::Path, reason: impl ToString) -> Self {
        BridgeError::UnsupportedSource {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BridgeError>;

use thiserror::Error;

/// Errors raised while editing or persisting startup entries.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("entry name must not be blank")]
    BlankName,
    #[error("an entry named \"{0}\" already exists")]
    DuplicateName(String),
    #[error("no entry named \"{0}\"")]
    NotFound(String),
    #[error("\"{0}\" is not a valid file name")]
    InvalidFileName(String),
    /// A failure reported by the backing store (registry, shell link API).
    #[error("{0}")]
    Store(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type SyncResult<T> = Result<T, SyncError>;

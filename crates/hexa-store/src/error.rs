/// Errors from repository operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A writer panicked while holding the in-memory lock.
    #[error("storage lock poisoned")]
    LockPoisoned,

    /// Failure reported by the storage backend.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Result alias for repository operations.
pub type StoreResult<T> = Result<T, StoreError>;

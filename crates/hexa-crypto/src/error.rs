/// Errors from hashing operations.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum HashError {
    /// The content to hash was empty.
    #[error("content cannot be empty")]
    EmptyInput,
}

/// Result alias for hashing operations.
pub type HashResult<T> = Result<T, HashError>;

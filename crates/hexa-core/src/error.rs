use hexa_crypto::HashError;
use hexa_store::StoreError;
use thiserror::Error;

/// Errors surfaced by the resource service.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Caller input violated a precondition.
    #[error("{0}")]
    Validation(String),

    /// The hashing capability failed.
    #[error("hash content: {0}")]
    Hash(#[source] HashError),

    /// The repository failed during `operation`.
    #[error("{operation}: {source}")]
    Storage {
        operation: &'static str,
        #[source]
        source: StoreError,
    },
}

impl ServiceError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub(crate) fn storage(operation: &'static str, source: StoreError) -> Self {
        Self::Storage { operation, source }
    }

    /// Whether the failure was caused by the caller's input.
    ///
    /// `Hash(EmptyInput)` is included: validation normally catches empty
    /// content first, but an adapter rejecting input is still a client error.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Hash(HashError::EmptyInput))
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

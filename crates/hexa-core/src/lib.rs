//! Business logic for the Hexa resource service.
//!
//! [`ResourceService`] is what driving adapters (the HTTP server, tests)
//! call. [`ResourceManager`] implements it on top of two injected
//! capabilities: a [`ContentHasher`](hexa_crypto::ContentHasher) that mints
//! ids and a [`ResourceRepository`](hexa_store::ResourceRepository) that
//! stores resources. Neither the hash algorithm nor the storage backend is
//! known here.

pub mod error;
pub mod service;
pub mod traits;

pub use error::{ServiceError, ServiceResult};
pub use service::ResourceManager;
pub use traits::ResourceService;

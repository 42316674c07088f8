//! Content hashing for the Hexa resource service.
//!
//! The service never picks a hash algorithm itself. It depends on the
//! [`ContentHasher`] trait, and an adapter is chosen when the process is
//! wired together:
//!
//! - [`MockHasher`] -- deterministic `"mock-"` prefix, truncated to 24 chars
//! - [`Blake3Hasher`] -- domain-separated BLAKE3 digest, hex encoded
//!
//! [`HasherKind`] names the adapters for configuration files and flags.

pub mod digest;
pub mod error;
pub mod hasher;
pub mod mock;

pub use digest::Blake3Hasher;
pub use error::{HashError, HashResult};
pub use hasher::{ContentHasher, HasherKind};
pub use mock::MockHasher;

//! Resource persistence for the Hexa resource service.
//!
//! The service stores and loads resources only through the
//! [`ResourceRepository`] trait; the backend is chosen at process start.
//!
//! # Storage Backends
//!
//! - [`InMemoryResourceRepository`] -- `HashMap` behind a single `RwLock`
//!
//! # Design Rules
//!
//! 1. Values are cloned on the way in and on the way out. No caller ever
//!    holds a reference into backend state.
//! 2. A missing id is `Ok(None)`, never an error.
//! 3. Saving an id that already exists overwrites it (last write wins).
//! 4. Backend failures are propagated as [`StoreError`], never swallowed.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryResourceRepository;
pub use traits::ResourceRepository;

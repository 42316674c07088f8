//! Domain types for the Hexa resource service.
//!
//! Every other Hexa crate depends on `hexa-types`. The types here carry no
//! knowledge of hashing, storage or transport.
//!
//! # Key Types
//!
//! - [`Resource`] -- the persisted entity (id, content, creation time)
//! - [`ResourceId`] -- content-derived identifier assigned at creation

pub mod id;
pub mod resource;

pub use id::ResourceId;
pub use resource::Resource;

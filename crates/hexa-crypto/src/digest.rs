use hexa_types::ResourceId;

use crate::error::{HashError, HashResult};
use crate::hasher::ContentHasher;

/// Domain-separated BLAKE3 content hasher.
///
/// The domain tag is prepended to every hash computation, so ids minted by
/// one deployment's tag never collide with another's for the same content.
/// Ids are the 64-character lowercase hex digest.
#[derive(Clone, Copy, Debug)]
pub struct Blake3Hasher {
    domain: &'static str,
}

impl Blake3Hasher {
    /// Default domain tag for resource ids.
    pub const RESOURCE_DOMAIN: &'static str = "hexa-resource-v1";

    /// Create a hasher with a custom domain tag.
    pub const fn new(domain: &'static str) -> Self {
        Self { domain }
    }

    /// The domain tag used by this hasher.
    pub fn domain(&self) -> &str {
        self.domain
    }

    fn digest(&self, data: &[u8]) -> [u8; 32] {
        let mut hasher = blake3::Hasher::new();
        hasher.update(self.domain.as_bytes());
        hasher.update(b":");
        hasher.update(data);
        *hasher.finalize().as_bytes()
    }
}

impl Default for Blake3Hasher {
    fn default() -> Self {
        Self::new(Self::RESOURCE_DOMAIN)
    }
}

impl ContentHasher for Blake3Hasher {
    fn hash(&self, content: &str) -> HashResult<ResourceId> {
        if content.is_empty() {
            return Err(HashError::EmptyInput);
        }
        Ok(ResourceId::new(hex::encode(self.digest(content.as_bytes()))))
    }
}

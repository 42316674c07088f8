use hexa_types::ResourceId;

use crate::error::{HashError, HashResult};
use crate::hasher::ContentHasher;

/// Deterministic stand-in hasher for tests and demos.
///
/// Returns `"mock-" + content`, truncated to [`MockHasher::MAX_LEN`]
/// characters. Truncation counts `char`s, so multi-byte content is never cut
/// mid-character.
#[derive(Clone, Copy, Debug, Default)]
pub struct MockHasher;

impl MockHasher {
    pub const PREFIX: &'static str = "mock-";
    pub const MAX_LEN: usize = 24;

    pub fn new() -> Self {
        Self
    }
}

impl ContentHasher for MockHasher {
    fn hash(&self, content: &str) -> HashResult<ResourceId> {
        if content.is_empty() {
            return Err(HashError::EmptyInput);
        }
        let id: String = Self::PREFIX
            .chars()
            .chain(content.chars())
            .take(Self::MAX_LEN)
            .collect();
        Ok(ResourceId::new(id))
    }
}

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use hexa_types::ResourceId;
use serde::{Deserialize, Serialize};

use crate::digest::Blake3Hasher;
use crate::error::HashResult;
use crate::mock::MockHasher;

/// Produces a content-derived identifier.
///
/// All implementations must satisfy these invariants:
/// - Empty content is rejected with [`HashError::EmptyInput`](crate::HashError::EmptyInput).
/// - Non-empty content always yields a non-empty id.
///
/// Callers must not assume any particular width or character set for the
/// returned id.
pub trait ContentHasher: Send + Sync {
    /// Derive an identifier for `content`.
    fn hash(&self, content: &str) -> HashResult<ResourceId>;
}

/// Names the available hashing adapters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HasherKind {
    #[default]
    Mock,
    Blake3,
}

impl HasherKind {
    /// Construct the adapter this kind names.
    pub fn build(self) -> Arc<dyn ContentHasher> {
        match self {
            Self::Mock => Arc::new(MockHasher::new()),
            Self::Blake3 => Arc::new(Blake3Hasher::default()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mock => "mock",
            Self::Blake3 => "blake3",
        }
    }
}

impl fmt::Display for HasherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HasherKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mock" => Ok(Self::Mock),
            "blake3" => Ok(Self::Blake3),
            other => Err(format!("unknown hasher `{other}` (expected `mock` or `blake3`)")),
        }
    }
}

use chrono::{DateTime, SecondsFormat, Utc};

use crate::id::ResourceId;

/// A stored piece of caller-supplied content.
///
/// All fields are fixed at construction; there are no setters. Values are passed between layers by clone, so a caller holding a
/// `Resource` never shares state with the repository that persisted it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resource {
    id: ResourceId,
    content: String,
    created_at: DateTime<Utc>,
}

impl Resource {
    /// Create a resource with explicit values.
    pub fn new(id: ResourceId, content: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            content: content.into(),
            created_at,
        }
    }

    pub fn id(&self) -> &ResourceId {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Creation time as RFC3339 with second precision, `Z` for UTC.
    pub fn created_at_rfc3339(&self) -> String {
        self.created_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    }
}

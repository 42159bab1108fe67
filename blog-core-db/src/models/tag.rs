use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use blog_core_api::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// A label attached to blog posts
///
/// The name is trimmed and never blank. Tags compare, hash and sort by name, so a
/// set of tags holds each name once regardless of the generated id.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "TagFields")]
pub struct Tag {
    id: Uuid,
    name: String,
}

impl Tag {
    /// Create a tag with a fresh id
    ///
    /// # Arguments
    /// * `name` - Tag name, trimmed before use
    ///
    /// # Returns
    /// * `InvalidArgument` when the trimmed name is empty
    pub fn from_name(name: &str) -> DomainResult<Self> {
        Ok(Self {
            id: Uuid::new_v4(),
            name: trimmed_name(name)?,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

fn trimmed_name(name: &str) -> DomainResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidArgument {
            name: "name",
            reason: "cannot be empty or whitespace".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

#[derive(Deserialize)]
struct TagFields {
    id: Uuid,
    name: String,
}

impl TryFrom<TagFields> for Tag {
    type Error = DomainError;

    fn try_from(fields: TagFields) -> DomainResult<Self> {
        Ok(Self {
            id: fields.id,
            name: trimmed_name(&fields.name)?,
        })
    }
}

impl TryFrom<&str> for Tag {
    type Error = DomainError;

    fn try_from(name: &str) -> DomainResult<Self> {
        Tag::from_name(name)
    }
}

impl TryFrom<Option<&str>> for Tag {
    type Error = DomainError;

    fn try_from(name: Option<&str>) -> DomainResult<Self> {
        name.ok_or(DomainError::NullArgument("name"))
            .and_then(Tag::from_name)
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl PartialEq for Tag {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Tag {}

impl Hash for Tag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for Tag {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tag {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl Identifiable for Tag {
    type Key = Uuid;

    fn get_id(&self) -> Uuid {
        self.id
    }
}

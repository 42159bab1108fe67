use std::collections::BTreeSet;

use blog_core_api::{Clock, DomainError, DomainResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use super::blog_post_builder::BlogPostBuilder;
use super::blog_post_status::BlogPostStatus;
use crate::models::identifiable::Identifiable;
use crate::models::tag::Tag;

/// A blog post
///
/// Posts start as drafts and can be published exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    id: Uuid,
    content: String,
    created: DateTime<Utc>,
    status: BlogPostStatus,
    tags: BTreeSet<Tag>,
}

impl BlogPost {
    /// Create a new untagged draft, stamped with the clock's current instant
    pub fn draft(content: impl Into<String>, clock: &dyn Clock) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            created: clock.now(),
            status: BlogPostStatus::Draft,
            tags: BTreeSet::new(),
        }
    }

    pub fn create(builder: &BlogPostBuilder) -> DomainResult<Self> {
        Ok(Self {
            id: builder.id().unwrap_or_else(Uuid::new_v4),
            content: builder.content().to_string(),
            created: builder.created(),
            status: builder.status(),
            tags: builder.tags().clone(),
        })
    }

    pub fn create_from(builder: Option<&BlogPostBuilder>) -> DomainResult<Self> {
        builder
            .ok_or(DomainError::NullArgument("builder"))
            .and_then(Self::create)
    }

    pub fn builder() -> BlogPostBuilder {
        BlogPostBuilder::new()
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn status(&self) -> BlogPostStatus {
        self.status
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn is_published(&self) -> bool {
        self.status == BlogPostStatus::Published
    }

    /// Transition the post from draft to published
    pub fn publish(&mut self) -> DomainResult<()> {
        if self.is_published() {
            warn!(blog_post_id = %self.id, "rejected publish of an already published blog post");
            return Err(DomainError::AlreadyPublished(self.id));
        }

        self.status = BlogPostStatus::Published;
        debug!(blog_post_id = %self.id, "blog post published");
        Ok(())
    }

    /// Adds a tag, returning `false` when a tag with the same name is already present
    pub fn add_tag(&mut self, tag: Tag) -> bool {
        self.tags.insert(tag)
    }

    /// Removes the tag with the given name, returning whether it was present
    pub fn remove_tag(&mut self, name: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|tag| tag.name() != name.trim());
        self.tags.len() != before
    }

    pub fn has_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|tag| tag.name() == name.trim())
    }
}

impl Identifiable for BlogPost {
    type Key = Uuid;

    fn get_id(&self) -> Uuid {
        self.id
    }
}

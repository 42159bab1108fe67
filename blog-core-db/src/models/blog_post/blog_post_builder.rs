use std::collections::BTreeSet;

use blog_core_api::{Builder, DomainError, DomainResult};
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::blog_post::BlogPost;
use super::blog_post_status::BlogPostStatus;
use crate::models::tag::Tag;

/// Builder for [`BlogPost`]
///
/// Starts as an untagged draft with empty content created at the Unix epoch. When
/// no id is supplied a fresh one is generated at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPostBuilder {
    id: Option<Uuid>,
    content: String,
    created: DateTime<Utc>,
    status: BlogPostStatus,
    tags: BTreeSet<Tag>,
}

impl BlogPostBuilder {
    pub fn new() -> Self {
        Self {
            id: None,
            content: String::new(),
            created: DateTime::<Utc>::UNIX_EPOCH,
            status: BlogPostStatus::Draft,
            tags: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> Option<Uuid> {
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

    pub fn with_id(&self, id: Uuid) -> Self {
        Self {
            id: Some(id),
            ..self.clone()
        }
    }

    pub fn with_content(&self, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..self.clone()
        }
    }

    pub fn with_content_opt(&self, content: Option<&str>) -> DomainResult<Self> {
        content
            .map(|content| self.with_content(content))
            .ok_or(DomainError::NullArgument("content"))
    }

    pub fn with_created(&self, created: DateTime<Utc>) -> Self {
        Self {
            created,
            ..self.clone()
        }
    }

    pub fn with_status(&self, status: BlogPostStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }

    pub fn with_status_opt(&self, status: Option<BlogPostStatus>) -> DomainResult<Self> {
        status
            .map(|status| self.with_status(status))
            .ok_or(DomainError::NullArgument("status"))
    }

    /// Replaces the tags; calling this twice keeps only the second set
    pub fn with_tags<I>(&self, tags: I) -> Self
    where
        I: IntoIterator<Item = Tag>,
    {
        Self {
            tags: tags.into_iter().collect(),
            ..self.clone()
        }
    }

    pub fn with_tags_opt<I>(&self, tags: Option<I>) -> DomainResult<Self>
    where
        I: IntoIterator<Item = Tag>,
    {
        tags.map(|tags| self.with_tags(tags))
            .ok_or(DomainError::NullArgument("tags"))
    }
}

impl Default for BlogPostBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder for BlogPostBuilder {
    type Output = BlogPost;

    fn build(&self) -> DomainResult<BlogPost> {
        BlogPost::create(self)
    }
}

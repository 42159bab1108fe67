use blog_core_api::{Builder, DomainError, DomainResult};
use serde::{Deserialize, Serialize};

use super::count::PagedEnumerableCount;
use super::metadata_builder::PagedEnumerableMetadataBuilder;
use super::navigation::PagedEnumerableNavigation;

/// Describes the size and position of a page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PagedEnumerableMetadata {
    count: PagedEnumerableCount,
    navigation: PagedEnumerableNavigation,
}

impl PagedEnumerableMetadata {
    /// Create metadata from the count and navigation held by the builder
    pub fn create(builder: &PagedEnumerableMetadataBuilder) -> DomainResult<Self> {
        Ok(Self {
            count: builder.count(),
            navigation: builder.navigation(),
        })
    }

    /// Same as [`create`](Self::create), rejecting an absent builder with `NullArgument`
    pub fn create_from(builder: Option<&PagedEnumerableMetadataBuilder>) -> DomainResult<Self> {
        builder
            .ok_or(DomainError::NullArgument("builder"))
            .and_then(Self::create)
    }

    /// Start a metadata builder holding the default count and navigation
    pub fn builder() -> PagedEnumerableMetadataBuilder {
        PagedEnumerableMetadataBuilder::new()
    }

    pub fn count(&self) -> &PagedEnumerableCount {
        &self.count
    }

    pub fn navigation(&self) -> &PagedEnumerableNavigation {
        &self.navigation
    }
}

impl TryFrom<PagedEnumerableMetadataBuilder> for PagedEnumerableMetadata {
    type Error = DomainError;

    fn try_from(builder: PagedEnumerableMetadataBuilder) -> DomainResult<Self> {
        builder.build()
    }
}

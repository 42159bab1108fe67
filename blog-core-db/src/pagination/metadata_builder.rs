use blog_core_api::{Builder, DomainError, DomainResult};

use super::count::PagedEnumerableCount;
use super::metadata::PagedEnumerableMetadata;
use super::navigation::PagedEnumerableNavigation;

/// Builder for [`PagedEnumerableMetadata`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PagedEnumerableMetadataBuilder {
    count: PagedEnumerableCount,
    navigation: PagedEnumerableNavigation,
}

impl PagedEnumerableMetadataBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> PagedEnumerableCount {
        self.count
    }

    pub fn navigation(&self) -> PagedEnumerableNavigation {
        self.navigation
    }

    pub fn with_count(&self, count: PagedEnumerableCount) -> Self {
        Self { count, ..*self }
    }

    pub fn with_navigation(&self, navigation: PagedEnumerableNavigation) -> Self {
        Self { navigation, ..*self }
    }

    pub fn with_count_opt(&self, count: Option<PagedEnumerableCount>) -> DomainResult<Self> {
        count
            .map(|count| self.with_count(count))
            .ok_or(DomainError::NullArgument("count"))
    }

    pub fn with_navigation_opt(
        &self,
        navigation: Option<PagedEnumerableNavigation>,
    ) -> DomainResult<Self> {
        navigation
            .map(|navigation| self.with_navigation(navigation))
            .ok_or(DomainError::NullArgument("navigation"))
    }
}

impl Builder for PagedEnumerableMetadataBuilder {
    type Output = PagedEnumerableMetadata;

    fn build(&self) -> DomainResult<PagedEnumerableMetadata> {
        PagedEnumerableMetadata::create(self)
    }
}

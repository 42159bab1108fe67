use blog_core_api::{Builder, DomainError, DomainResult};
use serde::{Deserialize, Serialize};

use super::count_builder::PagedEnumerableCountBuilder;

/// Count metadata for a [`PagedEnumerable`](super::PagedEnumerable)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PagedEnumerableCount {
    current: u64,
    total: u64,
    skipped: u64,
}

impl PagedEnumerableCount {
    /// Create a count from the given builder
    ///
    /// The builder has already rejected negative values, so this never fails for a
    /// builder obtained through its setters.
    pub fn create(builder: &PagedEnumerableCountBuilder) -> DomainResult<Self> {
        Ok(Self {
            current: builder.current(),
            total: builder.total(),
            skipped: builder.skipped(),
        })
    }

    /// Same as [`create`](Self::create), rejecting an absent builder with `NullArgument`
    pub fn create_from(builder: Option<&PagedEnumerableCountBuilder>) -> DomainResult<Self> {
        builder
            .ok_or(DomainError::NullArgument("builder"))
            .and_then(Self::create)
    }

    /// Start a count builder at `(0, 0, 0)`
    pub fn builder() -> PagedEnumerableCountBuilder {
        PagedEnumerableCountBuilder::new()
    }

    /// Number of records in the current page
    pub fn current(&self) -> u64 {
        self.current
    }

    /// Number of records across all pages
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of records skipped before the current page
    pub fn skipped(&self) -> u64 {
        self.skipped
    }
}

impl TryFrom<PagedEnumerableCountBuilder> for PagedEnumerableCount {
    type Error = DomainError;

    fn try_from(builder: PagedEnumerableCountBuilder) -> DomainResult<Self> {
        builder.build()
    }
}

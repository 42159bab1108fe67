use blog_core_api::{Builder, DomainError, DomainResult};

use super::count::PagedEnumerableCount;

/// Builder for [`PagedEnumerableCount`]
///
/// Each setter rejects negative values as soon as it is called and returns a new
/// builder, leaving the receiver untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PagedEnumerableCountBuilder {
    current: u64,
    total: u64,
    skipped: u64,
}

impl PagedEnumerableCountBuilder {
    /// Create a builder with every count set to zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records contained in the page
    pub fn current(&self) -> u64 {
        self.current
    }

    /// Total number of records across all pages
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Number of records skipped before the page
    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    pub fn with_current(&self, current: i64) -> DomainResult<Self> {
        Ok(Self {
            current: non_negative("current", current)?,
            ..*self
        })
    }

    pub fn with_total(&self, total: i64) -> DomainResult<Self> {
        Ok(Self {
            total: non_negative("total", total)?,
            ..*self
        })
    }

    pub fn with_skipped(&self, skipped: i64) -> DomainResult<Self> {
        Ok(Self {
            skipped: non_negative("skipped", skipped)?,
            ..*self
        })
    }
}

impl Builder for PagedEnumerableCountBuilder {
    type Output = PagedEnumerableCount;

    fn build(&self) -> DomainResult<PagedEnumerableCount> {
        PagedEnumerableCount::create(self)
    }
}

/// Converts a signed argument into a count, rejecting negative values
pub(crate) fn non_negative(name: &'static str, value: i64) -> DomainResult<u64> {
    u64::try_from(value).map_err(|_| DomainError::negative(name, value))
}

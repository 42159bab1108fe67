use std::sync::Arc;

use blog_core_api::{Builder, DomainError, DomainResult};

use super::metadata::PagedEnumerableMetadata;
use super::paged_enumerable::PagedEnumerable;

/// Builder for [`PagedEnumerable`]
///
/// Records are snapshotted into a shared immutable slice when they are supplied,
/// so neither the builder nor anything it builds can observe later changes to the
/// caller's collection.
#[derive(Debug)]
pub struct PagedEnumerableBuilder<T> {
    records: Arc<[T]>,
    metadata: PagedEnumerableMetadata,
}

impl<T> PagedEnumerableBuilder<T> {
    pub fn new() -> Self {
        Self {
            records: Arc::from(Vec::new()),
            metadata: PagedEnumerableMetadata::default(),
        }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn metadata(&self) -> &PagedEnumerableMetadata {
        &self.metadata
    }

    pub fn with_records<I>(&self, records: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            records: records.into_iter().collect(),
            metadata: self.metadata,
        }
    }

    pub fn with_records_opt<I>(&self, records: Option<I>) -> DomainResult<Self>
    where
        I: IntoIterator<Item = T>,
    {
        records
            .map(|records| self.with_records(records))
            .ok_or(DomainError::NullArgument("records"))
    }

    pub fn with_metadata(&self, metadata: PagedEnumerableMetadata) -> Self {
        Self {
            records: Arc::clone(&self.records),
            metadata,
        }
    }

    pub(crate) fn shared_records(&self) -> Arc<[T]> {
        Arc::clone(&self.records)
    }
}

impl<T> Default for PagedEnumerableBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for PagedEnumerableBuilder<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
            metadata: self.metadata,
        }
    }
}

impl<T> Builder for PagedEnumerableBuilder<T> {
    type Output = PagedEnumerable<T>;

    fn build(&self) -> DomainResult<PagedEnumerable<T>> {
        PagedEnumerable::create(self)
    }
}

use std::sync::Arc;

use blog_core_api::{Builder, DomainError, DomainResult};
use serde::Serialize;

use super::metadata::PagedEnumerableMetadata;
use super::paged_enumerable_builder::PagedEnumerableBuilder;

/// A page of records together with metadata describing the page
///
/// This is the value returned by [`GetPaged`](crate::repository::GetPaged). The
/// records are held in insertion order and are never mutated after construction.
/// The number of records is not checked against the count metadata; producers are
/// expected to keep the two consistent.
#[derive(Debug, Serialize)]
pub struct PagedEnumerable<T> {
    metadata: PagedEnumerableMetadata,
    records: Arc<[T]>,
}

impl<T> PagedEnumerable<T> {
    /// Create a page sharing the builder's record snapshot
    pub fn create(builder: &PagedEnumerableBuilder<T>) -> DomainResult<Self> {
        Ok(Self {
            metadata: *builder.metadata(),
            records: builder.shared_records(),
        })
    }

    /// Same as [`create`](Self::create), rejecting an absent builder with `NullArgument`
    pub fn create_from(builder: Option<&PagedEnumerableBuilder<T>>) -> DomainResult<Self> {
        builder
            .ok_or(DomainError::NullArgument("builder"))
            .and_then(Self::create)
    }

    /// Start a builder with no records and default metadata
    pub fn builder() -> PagedEnumerableBuilder<T> {
        PagedEnumerableBuilder::new()
    }

    pub fn metadata(&self) -> &PagedEnumerableMetadata {
        &self.metadata
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    /// Converts the records of this page, keeping the metadata
    pub fn map<U, F>(&self, f: F) -> PagedEnumerable<U>
    where
        F: FnMut(&T) -> U,
    {
        PagedEnumerable {
            metadata: self.metadata,
            records: self.records.iter().map(f).collect(),
        }
    }
}

impl<T> Default for PagedEnumerable<T> {
    fn default() -> Self {
        Self {
            metadata: PagedEnumerableMetadata::default(),
            records: Arc::from(Vec::new()),
        }
    }
}

impl<T> Clone for PagedEnumerable<T> {
    fn clone(&self) -> Self {
        Self {
            metadata: self.metadata,
            records: Arc::clone(&self.records),
        }
    }
}

impl<T: PartialEq> PartialEq for PagedEnumerable<T> {
    fn eq(&self, other: &Self) -> bool {
        self.metadata == other.metadata && self.records == other.records
    }
}

impl<T: Eq> Eq for PagedEnumerable<T> {}

impl<'a, T> IntoIterator for &'a PagedEnumerable<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl<T> TryFrom<PagedEnumerableBuilder<T>> for PagedEnumerable<T> {
    type Error = DomainError;

    fn try_from(builder: PagedEnumerableBuilder<T>) -> DomainResult<Self> {
        builder.build()
    }
}

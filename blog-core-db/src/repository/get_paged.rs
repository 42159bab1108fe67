use async_trait::async_trait;

use crate::models::identifiable::Identifiable;
use crate::pagination::PagedEnumerable;

use super::pagination::PageRequest;

/// Generic repository trait for loading one page of entities
///
/// Implementations are the sole producers of [`PagedEnumerable`] and must fill its
/// count and navigation metadata from the store's actual record counts;
/// [`paginate`](super::pagination::paginate) does this given the total count.
///
/// # Type Parameters
/// * `K` - The key type of the entity
/// * `T` - The entity type that must implement Identifiable trait
pub trait GetPaged<K, T: Identifiable<Key = K>>: Send + Sync {
    /// Load the page of entities described by `request`
    ///
    /// # Returns
    /// * `Ok(PagedEnumerable<T>)` - The page, possibly empty
    /// * `Err` - An error if the query could not be executed
    fn get_paged(
        &self,
        request: PageRequest,
    ) -> Result<PagedEnumerable<T>, Box<dyn std::error::Error + Send + Sync>>;
}

/// Asynchronous counterpart of [`GetPaged`]
#[async_trait]
pub trait GetPagedAsync<K, T>: Send + Sync
where
    K: Send + Sync,
    T: Identifiable<Key = K> + Send + 'static,
{
    async fn get_paged_async(
        &self,
        request: PageRequest,
    ) -> Result<PagedEnumerable<T>, Box<dyn std::error::Error + Send + Sync>>;
}

use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for finding an entity by its key
///
/// Returns an Option to handle cases where the entity might not exist.
///
/// # Type Parameters
/// * `K` - The key type of the entity
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl GetById<Uuid, Tag> for TagRepositoryImpl {
///     fn get_by_id(&self, id: &Uuid) -> Result<Option<Tag>, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
pub trait GetById<K, T: Identifiable<Key = K>>: Send + Sync {
    /// Find an entity by its unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(T))` - The found entity
    /// * `Ok(None)` - If the entity does not exist
    /// * `Err` - An error if the query could not be executed
    fn get_by_id(&self, id: &K) -> Result<Option<T>, Box<dyn std::error::Error + Send + Sync>>;
}

/// Asynchronous counterpart of [`GetById`]
#[async_trait]
pub trait GetByIdAsync<K, T>: Send + Sync
where
    K: Send + Sync,
    T: Identifiable<Key = K> + Send + 'static,
{
    async fn get_by_id_async(
        &self,
        id: &K,
    ) -> Result<Option<T>, Box<dyn std::error::Error + Send + Sync>>;
}

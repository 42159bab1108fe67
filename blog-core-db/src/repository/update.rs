use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for updating an existing entity
///
/// # Type Parameters
/// * `K` - The key type of the entity
/// * `T` - The entity type that must implement Identifiable trait
pub trait Update<K, T: Identifiable<Key = K>>: Send + Sync {
    /// Replace the stored entity that has the same key
    ///
    /// # Returns
    /// * `Ok(T)` - The updated entity
    /// * `Err` - An error if the entity does not exist or could not be updated
    fn update(&self, entity: T) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}

/// Asynchronous counterpart of [`Update`]
#[async_trait]
pub trait UpdateAsync<K, T>: Send + Sync
where
    K: Send + Sync,
    T: Identifiable<Key = K> + Send + 'static,
{
    async fn update_async(&self, entity: T) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}

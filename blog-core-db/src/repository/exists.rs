use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for checking whether an entity exists
///
/// # Type Parameters
/// * `K` - The key type of the entity
/// * `T` - The entity type that must implement Identifiable trait
pub trait Exists<K, T: Identifiable<Key = K>>: Send + Sync {
    /// Check existence of an entity by its key
    ///
    /// # Returns
    /// * `Ok(true)` - The entity exists
    /// * `Ok(false)` - The entity does not exist
    /// * `Err` - An error if the check could not be executed
    fn exists(&self, id: &K) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;
}

/// Asynchronous counterpart of [`Exists`]
#[async_trait]
pub trait ExistsAsync<K, T>: Send + Sync
where
    K: Send + Sync,
    T: Identifiable<Key = K> + Send + 'static,
{
    async fn exists_async(&self, id: &K) -> Result<bool, Box<dyn std::error::Error + Send + Sync>>;
}

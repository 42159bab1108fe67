use async_trait::async_trait;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for adding an entity
///
/// # Type Parameters
/// * `K` - The key type of the entity
/// * `T` - The entity type that must implement Identifiable trait
///
/// # Example
/// ```ignore
/// impl Add<Uuid, BlogPost> for BlogPostRepositoryImpl {
///     fn add(&self, entity: BlogPost) -> Result<BlogPost, Box<dyn Error + Send + Sync>> {
///         // Implementation
///     }
/// }
/// ```
pub trait Add<K, T: Identifiable<Key = K>>: Send + Sync {
    /// Add a new entity to the store
    ///
    /// # Arguments
    /// * `entity` - The entity to add
    ///
    /// # Returns
    /// * `Ok(T)` - The stored entity with any generated fields populated
    /// * `Err` - An error if the entity could not be added
    fn add(&self, entity: T) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}

/// Asynchronous counterpart of [`Add`]
#[async_trait]
pub trait AddAsync<K, T>: Send + Sync
where
    K: Send + Sync,
    T: Identifiable<Key = K> + Send + 'static,
{
    async fn add_async(&self, entity: T) -> Result<T, Box<dyn std::error::Error + Send + Sync>>;
}

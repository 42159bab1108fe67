/// Trait for entities that can be uniquely identified by a key
pub trait Identifiable {
    /// The key type repositories use to look the entity up
    type Key;

    /// Returns the unique identifier of the entity
    fn get_id(&self) -> Self::Key;
}

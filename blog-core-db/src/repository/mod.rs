pub mod add;
pub mod exists;
pub mod get_by_id;
pub mod get_paged;
pub mod pagination;
pub mod repository;
pub mod update;

// Re-exports
pub use add::*;
pub use exists::*;
pub use get_by_id::*;
pub use get_paged::*;
pub use pagination::*;
pub use repository::*;
pub use update::*;

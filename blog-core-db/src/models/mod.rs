pub mod blog_post;
pub mod identifiable;
pub mod tag;

// Re-exports
pub use blog_post::*;
pub use identifiable::*;
pub use tag::*;

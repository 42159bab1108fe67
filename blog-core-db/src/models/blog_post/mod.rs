pub mod blog_post;
pub mod blog_post_builder;
pub mod blog_post_status;

pub use blog_post::*;
pub use blog_post_builder::*;
pub use blog_post_status::*;

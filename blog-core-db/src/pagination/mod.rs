//! Pagination metadata and the paged result container
//!
//! Every type here is an immutable value built through a "with"-style builder:
//! [`PagedEnumerableCount`], [`PagedEnumerableNavigation`],
//! [`PagedEnumerableMetadata`] and [`PagedEnumerable`].

pub mod count;
pub mod count_builder;
pub mod metadata;
pub mod metadata_builder;
pub mod navigation;
pub mod navigation_builder;
pub mod paged_enumerable;
pub mod paged_enumerable_builder;


pub use count::*;
pub use count_builder::*;
pub use metadata::*;
pub use metadata_builder::*;
pub use navigation::*;
pub use navigation_builder::*;
pub use paged_enumerable::*;
pub use paged_enumerable_builder::*;

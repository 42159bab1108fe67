//! Domain models for the blog: entities, pagination and repository contracts

pub mod models;
pub mod pagination;
pub mod repository;

pub use models::*;
pub use pagination::*;

#[cfg(test)]
pub mod test_utils;

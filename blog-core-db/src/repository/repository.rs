use uuid::Uuid;

use crate::models::blog_post::BlogPost;
use crate::models::identifiable::Identifiable;
use crate::models::tag::Tag;

use super::add::{Add, AddAsync};
use super::exists::{Exists, ExistsAsync};
use super::get_by_id::{GetById, GetByIdAsync};
use super::get_paged::{GetPaged, GetPagedAsync};
use super::update::{Update, UpdateAsync};

/// Synchronous CRUD contract, implemented for anything providing every operation
pub trait Repository<K, T: Identifiable<Key = K>>:
    Add<K, T> + Exists<K, T> + GetById<K, T> + GetPaged<K, T> + Update<K, T>
{
}

impl<K, T, R> Repository<K, T> for R
where
    T: Identifiable<Key = K>,
    R: Add<K, T> + Exists<K, T> + GetById<K, T> + GetPaged<K, T> + Update<K, T>,
{
}

/// Asynchronous CRUD contract, implemented for anything providing every operation
pub trait AsyncRepository<K, T>:
    AddAsync<K, T> + ExistsAsync<K, T> + GetByIdAsync<K, T> + GetPagedAsync<K, T> + UpdateAsync<K, T>
where
    K: Send + Sync,
    T: Identifiable<Key = K> + Send + 'static,
{
}

impl<K, T, R> AsyncRepository<K, T> for R
where
    K: Send + Sync,
    T: Identifiable<Key = K> + Send + 'static,
    R: AddAsync<K, T>
        + ExistsAsync<K, T>
        + GetByIdAsync<K, T>
        + GetPagedAsync<K, T>
        + UpdateAsync<K, T>,
{
}

/// Storage contract for blog posts, both synchronous and asynchronous
pub trait BlogPostRepository: Repository<Uuid, BlogPost> + AsyncRepository<Uuid, BlogPost> {}

impl<R> BlogPostRepository for R where R: Repository<Uuid, BlogPost> + AsyncRepository<Uuid, BlogPost> {}

/// Storage contract for tags
pub trait TagRepository: Repository<Uuid, Tag> {}

impl<R> TagRepository for R where R: Repository<Uuid, Tag> {}

use std::collections::BTreeMap;

use async_trait::async_trait;
use blog_core_api::{Builder, Clock, DomainResult};
use chrono::{DateTime, TimeZone, Utc};
use parking_lot::RwLock;
use uuid::Uuid;

use crate::models::blog_post::{BlogPost, BlogPostStatus};
use crate::models::identifiable::Identifiable;
use crate::models::tag::Tag;
use crate::pagination::PagedEnumerable;
use crate::repository::{
    paginate, Add, AddAsync, Exists, ExistsAsync, GetById, GetByIdAsync, GetPaged, GetPagedAsync,
    PageRequest, Update, UpdateAsync,
};

type RepoResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Install a fmt subscriber once so `tracing` output shows up in failing tests
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Clock stuck at a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn at_millis(millis: i64) -> Self {
        FixedClock(Utc.timestamp_millis_opt(millis).unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn draft_blog_post(content: &str) -> DomainResult<BlogPost> {
    BlogPost::builder()
        .with_content(content)
        .with_created(FixedClock::at_millis(0).now())
        .with_tags(vec![Tag::from_name("draft")?])
        .build()
}

pub fn published_blog_post() -> DomainResult<BlogPost> {
    BlogPost::builder()
        .with_content("Published content")
        .with_status(BlogPostStatus::Published)
        .with_tags(vec![Tag::from_name("news")?, Tag::from_name("rust")?])
        .build()
}

/// Repository keeping entities in memory, ordered by id
pub struct InMemoryRepository<T> {
    entities: RwLock<BTreeMap<Uuid, T>>,
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            entities: RwLock::new(BTreeMap::new()),
        }
    }
}

impl<T> Add<Uuid, T> for InMemoryRepository<T>
where
    T: Identifiable<Key = Uuid> + Clone + Send + Sync,
{
    fn add(&self, entity: T) -> RepoResult<T> {
        let mut entities = self.entities.write();
        let id = entity.get_id();
        if entities.contains_key(&id) {
            return Err(format!("Entity {id} already exists").into());
        }
        entities.insert(id, entity.clone());
        Ok(entity)
    }
}

impl<T> Exists<Uuid, T> for InMemoryRepository<T>
where
    T: Identifiable<Key = Uuid> + Send + Sync,
{
    fn exists(&self, id: &Uuid) -> RepoResult<bool> {
        Ok(self.entities.read().contains_key(id))
    }
}

impl<T> GetById<Uuid, T> for InMemoryRepository<T>
where
    T: Identifiable<Key = Uuid> + Clone + Send + Sync,
{
    fn get_by_id(&self, id: &Uuid) -> RepoResult<Option<T>> {
        Ok(self.entities.read().get(id).cloned())
    }
}

impl<T> GetPaged<Uuid, T> for InMemoryRepository<T>
where
    T: Identifiable<Key = Uuid> + Clone + Send + Sync,
{
    fn get_paged(&self, request: PageRequest) -> RepoResult<PagedEnumerable<T>> {
        let entities = self.entities.read();
        let skip = usize::try_from(request.skip)?;
        let take = usize::try_from(request.take)?;
        let records = entities.values().skip(skip).take(take).cloned();
        Ok(paginate(records, entities.len() as u64, request)?)
    }
}

impl<T> Update<Uuid, T> for InMemoryRepository<T>
where
    T: Identifiable<Key = Uuid> + Clone + Send + Sync,
{
    fn update(&self, entity: T) -> RepoResult<T> {
        let mut entities = self.entities.write();
        let id = entity.get_id();
        match entities.get_mut(&id) {
            Some(stored) => {
                *stored = entity.clone();
                Ok(entity)
            }
            None => Err(format!("Entity {id} does not exist").into()),
        }
    }
}

#[async_trait]
impl<T> AddAsync<Uuid, T> for InMemoryRepository<T>
where
    T: Identifiable<Key = Uuid> + Clone + Send + Sync + 'static,
{
    async fn add_async(&self, entity: T) -> RepoResult<T> {
        self.add(entity)
    }
}

#[async_trait]
impl<T> ExistsAsync<Uuid, T> for InMemoryRepository<T>
where
    T: Identifiable<Key = Uuid> + Send + Sync + 'static,
{
    async fn exists_async(&self, id: &Uuid) -> RepoResult<bool> {
        self.exists(id)
    }
}

#[async_trait]
impl<T> GetByIdAsync<Uuid, T> for InMemoryRepository<T>
where
    T: Identifiable<Key = Uuid> + Clone + Send + Sync + 'static,
{
    async fn get_by_id_async(&self, id: &Uuid) -> RepoResult<Option<T>> {
        self.get_by_id(id)
    }
}

#[async_trait]
impl<T> GetPagedAsync<Uuid, T> for InMemoryRepository<T>
where
    T: Identifiable<Key = Uuid> + Clone + Send + Sync + 'static,
{
    async fn get_paged_async(&self, request: PageRequest) -> RepoResult<PagedEnumerable<T>> {
        self.get_paged(request)
    }
}

#[async_trait]
impl<T> UpdateAsync<Uuid, T> for InMemoryRepository<T>
where
    T: Identifiable<Key = Uuid> + Clone + Send + Sync + 'static,
{
    async fn update_async(&self, entity: T) -> RepoResult<T> {
        self.update(entity)
    }
}

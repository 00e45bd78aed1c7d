use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Category;
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
///
/// Every mutating call commits before it returns.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Insert a new entity and return it as stored.
    async fn create(&self, entity: T) -> Result<T, RepoError>;

    /// Return every entity, in the store's natural order.
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;

    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Overwrite all mutable fields of the entity sharing `entity`'s ID.
    ///
    /// Returns `None` when no such entity exists.
    async fn update(&self, entity: T) -> Result<Option<T>, RepoError>;

    /// Delete an entity by its ID, returning the removed snapshot.
    async fn delete(&self, id: ID) -> Result<Option<T>, RepoError>;
}

/// Category repository.
pub trait CategoryRepository: BaseRepository<Category, Uuid> {}

impl<R> CategoryRepository for R where R: BaseRepository<Category, Uuid> {}

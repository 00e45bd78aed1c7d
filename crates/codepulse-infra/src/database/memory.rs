//! In-memory category repository - used when no database is configured.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use codepulse_core::domain::Category;
use codepulse_core::error::RepoError;
use codepulse_core::ports::BaseRepository;

/// In-memory category store using a HashMap behind an async RwLock.
///
/// Note: Data is lost on process restart. Listing order is not stable.
pub struct InMemoryCategoryRepository {
    store: RwLock<HashMap<Uuid, Category>>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryCategoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Category, Uuid> for InMemoryCategoryRepository {
    async fn create(&self, category: Category) -> Result<Category, RepoError> {
        let mut store = self.store.write().await;

        if store.contains_key(&category.id) {
            return Err(RepoError::Constraint(format!(
                "Category {} already exists",
                category.id
            )));
        }

        store.insert(category.id, category.clone());
        tracing::debug!(category_id = %category.id, "Category stored in memory");
        Ok(category)
    }

    async fn find_all(&self) -> Result<Vec<Category>, RepoError> {
        let store = self.store.read().await;
        tracing::debug!(rows = store.len(), "Listing in-memory categories");
        Ok(store.values().cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Category>, RepoError> {
        tracing::debug!(category_id = %id, "Finding in-memory category");
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn update(&self, category: Category) -> Result<Option<Category>, RepoError> {
        let mut store = self.store.write().await;

        match store.get_mut(&category.id) {
            Some(existing) => {
                existing.name = category.name;
                existing.url_handle = category.url_handle;
                tracing::debug!(category_id = %existing.id, "In-memory category updated");
                Ok(Some(existing.clone()))
            }
            None => {
                tracing::debug!(category_id = %category.id, "No in-memory category to update");
                Ok(None)
            }
        }
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Category>, RepoError> {
        let mut store = self.store.write().await;
        let removed = store.remove(&id);
        tracing::debug!(category_id = %id, found = removed.is_some(), "In-memory delete");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tech() -> Category {
        Category::new("Tech".to_string(), "tech".to_string())
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let repo = InMemoryCategoryRepository::new();
        let created = repo.create(tech()).await.unwrap();

        let found = repo.find_by_id(created.id).await.unwrap();
        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_create_duplicate_id_is_constraint_error() {
        let repo = InMemoryCategoryRepository::new();
        let category = tech();
        repo.create(category.clone()).await.unwrap();

        let result = repo.create(category).await;
        assert!(matches!(result, Err(RepoError::Constraint(_))));
    }

    #[tokio::test]
    async fn test_find_all_empty() {
        let repo = InMemoryCategoryRepository::new();
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let repo = InMemoryCategoryRepository::new();
        let created = repo.create(tech()).await.unwrap();

        let updated = repo
            .update(Category::with_id(
                created.id,
                "A".to_string(),
                "a".to_string(),
            ))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.name, "A");
        assert_eq!(updated.url_handle, "a");
        assert_eq!(repo.find_by_id(created.id).await.unwrap(), Some(updated));
    }

    #[tokio::test]
    async fn test_update_unknown_returns_none() {
        let repo = InMemoryCategoryRepository::new();
        let result = repo.update(tech()).await.unwrap();

        assert!(result.is_none());
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_returns_snapshot() {
        let repo = InMemoryCategoryRepository::new();
        let created = repo.create(tech()).await.unwrap();

        let deleted = repo.delete(created.id).await.unwrap();
        assert_eq!(deleted, Some(created.clone()));
        assert!(repo.find_by_id(created.id).await.unwrap().is_none());
        assert!(repo.delete(created.id).await.unwrap().is_none());
    }
}

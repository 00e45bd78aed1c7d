//! Application state - shared across all handlers.

use std::sync::Arc;

use codepulse_core::ports::CategoryRepository;
use codepulse_infra::{DatabaseConfig, InMemoryCategoryRepository};

#[cfg(feature = "postgres")]
use codepulse_infra::{DatabaseConnections, SeaOrmCategoryRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub categories: Arc<dyn CategoryRepository>,
    /// Name of the storage backend, reported by the health check.
    pub storage: &'static str,
}

impl AppState {
    /// Build the application state with the appropriate repository.
    ///
    /// Falls back to the in-memory repository when no database is configured
    /// or the connection fails.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let state = match db_config {
            Some(config) => match DatabaseConnections::init(config).await {
                Ok(connections) => Self {
                    categories: Arc::new(SeaOrmCategoryRepository::new(connections.main)),
                    storage: "database",
                },
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Self::in_memory()
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let state = {
            let _ = db_config;
            tracing::info!("Running without postgres feature - using in-memory repository");
            Self::in_memory()
        };

        tracing::info!(storage = state.storage, "Application state initialized");
        state
    }

    /// State backed by a fresh in-memory repository.
    pub fn in_memory() -> Self {
        Self {
            categories: Arc::new(InMemoryCategoryRepository::new()),
            storage: "memory",
        }
    }

    /// State backed by the given repository.
    #[cfg(test)]
    pub fn with_repository(categories: Arc<dyn CategoryRepository>) -> Self {
        Self {
            categories,
            storage: "test",
        }
    }
}

//! Data access layer - category storage backends.

mod connections;
mod memory;

#[cfg(feature = "postgres")]
mod schema;
#[cfg(feature = "postgres")]
mod sea_orm_base;
#[cfg(feature = "postgres")]
pub mod sea_orm_repo;

#[cfg(feature = "postgres")]
pub mod entity;

pub use connections::DatabaseConfig;
pub use memory::InMemoryCategoryRepository;

#[cfg(feature = "postgres")]
pub use connections::DatabaseConnections;
#[cfg(feature = "postgres")]
pub use schema::ensure_schema;
#[cfg(feature = "postgres")]
pub use sea_orm_base::SeaOrmRepository;
#[cfg(feature = "postgres")]
pub use sea_orm_repo::SeaOrmCategoryRepository;

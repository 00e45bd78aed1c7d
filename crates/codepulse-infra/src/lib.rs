//! # CodePulse Infrastructure
//!
//! Concrete implementations of the ports defined in `codepulse-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - SeaORM-backed repository and connection pool
//! - `minimal` - No external dependencies, in-memory only

pub mod database;

pub use database::{DatabaseConfig, InMemoryCategoryRepository};

#[cfg(feature = "postgres")]
pub use database::{DatabaseConnections, SeaOrmCategoryRepository};

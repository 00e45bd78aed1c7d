//! SeaORM category repository.

use super::entity::category::Entity as CategoryEntity;
use super::sea_orm_base::SeaOrmRepository;

/// SeaORM-backed category repository (PostgreSQL in production).
///
/// `CategoryRepository` comes from the blanket impl over
/// `BaseRepository<Category, Uuid>`.
pub type SeaOrmCategoryRepository = SeaOrmRepository<CategoryEntity>;

//! Category entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub url_handle: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for codepulse_core::domain::Category {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            url_handle: model.url_handle,
        }
    }
}

/// Every column is `Set`, so an update through this model replaces the whole row.
impl From<codepulse_core::domain::Category> for ActiveModel {
    fn from(category: codepulse_core::domain::Category) -> Self {
        Self {
            id: Set(category.id),
            name: Set(category.name),
            url_handle: Set(category.url_handle),
        }
    }
}

use std::marker::PhantomData;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DbConn, DbErr, EntityTrait, IntoActiveModel,
    PrimaryKeyTrait, SqlErr,
};

use codepulse_core::error::RepoError;
use codepulse_core::ports::BaseRepository;

/// Generic SeaORM repository implementation.
///
/// Each operation is a single statement (plus a primary-key lookup where the
/// caller needs the row back), executed on the pool without an explicit
/// transaction.
pub struct SeaOrmRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    table: String,
    _entity: PhantomData<E>,
}

impl<E> SeaOrmRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            table: E::default().table_name().to_owned(),
            _entity: PhantomData,
        }
    }

    fn table(&self) -> &str {
        &self.table
    }
}

pub(crate) fn map_db_err(err: DbErr) -> RepoError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        return RepoError::Constraint(detail);
    }

    match err {
        DbErr::Conn(e) => RepoError::Connection(e.to_string()),
        DbErr::ConnectionAcquire(e) => RepoError::Connection(e.to_string()),
        other => RepoError::Query(other.to_string()),
    }
}

#[async_trait]
impl<E, T, ID> BaseRepository<T, ID> for SeaOrmRepository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel> + Sync + Send,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + Sync,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = ID>,
    ID: Send + Sync + Into<sea_orm::Value> + Clone + Copy + std::fmt::Debug + 'static,
    T: From<E::Model> + Into<E::ActiveModel> + Send + Sync + 'static,
{
    async fn create(&self, entity: T) -> Result<T, RepoError> {
        tracing::debug!(table = self.table(), "Inserting row");
        let active_model: E::ActiveModel = entity.into();
        let model = active_model.insert(&self.db).await.map_err(map_db_err)?;

        Ok(model.into())
    }

    async fn find_all(&self) -> Result<Vec<T>, RepoError> {
        let models = E::find().all(&self.db).await.map_err(map_db_err)?;
        tracing::debug!(table = self.table(), rows = models.len(), "Listed rows");

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError> {
        tracing::debug!(table = self.table(), ?id, "Finding row by id");
        let result = E::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn update(&self, entity: T) -> Result<Option<T>, RepoError> {
        // All columns are set, so this is an UPDATE ... WHERE <pk> that
        // replaces every mutable field in one statement.
        let active_model: E::ActiveModel = entity.into();
        match active_model.update(&self.db).await {
            Ok(model) => {
                tracing::debug!(table = self.table(), "Row updated");
                Ok(Some(model.into()))
            }
            Err(DbErr::RecordNotUpdated) | Err(DbErr::RecordNotFound(_)) => {
                tracing::debug!(table = self.table(), "No row to update");
                Ok(None)
            }
            Err(e) => Err(map_db_err(e)),
        }
    }

    async fn delete(&self, id: ID) -> Result<Option<T>, RepoError> {
        let Some(existing) = E::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let result = E::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            // Removed by a concurrent request between the lookup and the delete.
            tracing::debug!(table = self.table(), ?id, "Row vanished before delete");
            return Ok(None);
        }

        tracing::debug!(table = self.table(), ?id, "Row deleted");
        Ok(Some(existing.into()))
    }
}

//! Table bootstrap for a fresh database.

use sea_orm::{ConnectionTrait, DbConn, DbErr, Schema};

use super::entity::category;

/// Create the `categories` table if it does not exist yet.
///
/// The statement is derived from the entity definition, so it follows
/// whichever backend `db` talks to.
pub async fn ensure_schema(db: &DbConn) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut stmt = schema.create_table_from_entity(category::Entity);
    stmt.if_not_exists();

    db.execute(backend.build(&stmt)).await?;
    tracing::debug!("Ensured table `categories` exists");

    Ok(())
}

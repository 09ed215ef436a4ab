//! SQLite repository implementation.
//!
//! Implements [`ItemRepository`] from `inventory_core::storage` using SQLite.

use async_trait::async_trait;
use rusqlite::OptionalExtension;
use tokio_rusqlite::Connection;

use inventory_core::inventory::{Item, ItemId};
use inventory_core::storage::{
    AppliedChange, ItemChange, ItemRepository, RepositoryError, Result, UnitOfWork,
};

use super::conversions::{format_price, row_to_item};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based item repository.
///
/// All statements run on `tokio-rusqlite`'s dedicated connection thread, so
/// writes are serialized by the connection itself.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    ///
    /// Useful for testing - data is lost when the connection is dropped.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Initialize the database schema.
    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

/// Applies one staged change inside an open transaction.
///
/// `Ok(Err(_))` means the change's target row is gone; the caller rolls back.
fn apply_change(
    tx: &rusqlite::Transaction<'_>,
    change: ItemChange,
) -> rusqlite::Result<std::result::Result<AppliedChange, ItemId>> {
    match change {
        ItemChange::Insert(fields) => {
            tx.execute(
                schema::INSERT_ITEM,
                rusqlite::params![
                    fields.title,
                    fields.description,
                    format_price(&fields.price),
                    fields.quantity
                ],
            )?;
            let id = tx.last_insert_rowid();
            Ok(Ok(AppliedChange::Inserted(Item::from_fields(id, fields))))
        }
        ItemChange::Update(item) => {
            let rows = tx.execute(
                schema::UPDATE_ITEM,
                rusqlite::params![
                    item.id,
                    item.title,
                    item.description,
                    format_price(&item.price),
                    item.quantity
                ],
            )?;
            if rows == 0 {
                Ok(Err(item.id))
            } else {
                Ok(Ok(AppliedChange::Updated(item)))
            }
        }
        ItemChange::Delete(id) => {
            let rows = tx.execute(schema::DELETE_ITEM, [id])?;
            if rows == 0 {
                Ok(Err(id))
            } else {
                Ok(Ok(AppliedChange::Deleted(id)))
            }
        }
    }
}

#[async_trait]
impl ItemRepository for SqliteRepository {
    async fn find_item(&self, id: ItemId) -> Result<Option<Item>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_ITEM_BY_ID).map_err(wrap_err)?;
                stmt.query_row([id], row_to_item)
                    .optional()
                    .map_err(wrap_err)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn list_items(&self) -> Result<Vec<Item>> {
        self.conn
            .call(|conn| {
                let mut stmt = conn.prepare(schema::SELECT_ALL_ITEMS).map_err(wrap_err)?;
                let rows = stmt.query_map([], row_to_item).map_err(wrap_err)?;

                let mut items = Vec::new();
                for row_result in rows {
                    items.push(row_result.map_err(wrap_err)?);
                }
                Ok(items)
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn commit(&self, work: UnitOfWork) -> Result<Vec<AppliedChange>> {
        if work.is_empty() {
            return Ok(Vec::new());
        }

        let changes = work.into_changes();
        let outcome = self
            .conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;

                let mut applied = Vec::with_capacity(changes.len());
                for change in changes {
                    match apply_change(&tx, change).map_err(wrap_err)? {
                        Ok(change) => applied.push(change),
                        // Dropping the transaction rolls it back.
                        Err(missing) => return Ok(Err(RepositoryError::NotFound(missing))),
                    }
                }

                tx.commit().map_err(wrap_err)?;
                Ok(Ok(applied))
            })
            .await
            .map_err(map_tokio_rusqlite_error)?;

        if let Err(RepositoryError::NotFound(id)) = &outcome {
            tracing::debug!(item_id = id, "Unit of work rolled back, target item is gone");
        }

        outcome
    }

    async fn seed(&self, items: &[Item]) -> Result<usize> {
        let items = items.to_vec();

        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;

                let sequence: Option<i64> = tx
                    .query_row(schema::SELECT_ITEMS_SEQUENCE, [], |row| row.get(0))
                    .optional()
                    .map_err(wrap_err)?;
                if sequence.is_some() {
                    return Ok(0);
                }

                for item in &items {
                    tx.execute(
                        schema::INSERT_ITEM_WITH_ID,
                        rusqlite::params![
                            item.id,
                            item.title,
                            item.description,
                            format_price(&item.price),
                            item.quantity
                        ],
                    )
                    .map_err(wrap_err)?;
                }

                tx.commit().map_err(wrap_err)?;
                Ok(items.len())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }

    async fn health_check(&self) -> Result<()> {
        self.conn
            .call(|conn| {
                conn.query_row(schema::PING, [], |row| row.get::<_, i64>(0))
                    .map_err(wrap_err)?;
                Ok(())
            })
            .await
            .map_err(map_tokio_rusqlite_error)
    }
}

use async_trait::async_trait;

use crate::inventory::{Item, ItemFields, ItemId};

use super::{AppliedChange, RepositoryError, Result, UnitOfWork};

/// Repository for inventory items.
///
/// Reads go straight to storage. Writes are staged in a [`UnitOfWork`] and
/// applied by [`commit`](ItemRepository::commit); the `insert_item`,
/// `update_item` and `delete_item` helpers commit a single change.
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Gets an item by its ID. A miss is `Ok(None)`, not an error.
    async fn find_item(&self, id: ItemId) -> Result<Option<Item>>;

    /// Gets every stored item in ascending id order.
    async fn list_items(&self) -> Result<Vec<Item>>;

    /// Applies all staged changes in one transaction.
    ///
    /// Returns one [`AppliedChange`] per staged change, in staging order.
    async fn commit(&self, work: UnitOfWork) -> Result<Vec<AppliedChange>>;

    /// Writes `items` with their given ids if the store has never held a
    /// record. Returns the number of items written.
    async fn seed(&self, items: &[Item]) -> Result<usize>;

    /// Performs a cheap round trip to the underlying store.
    async fn health_check(&self) -> Result<()>;

    /// Inserts a new item and returns it with its assigned id.
    async fn insert_item(&self, fields: ItemFields) -> Result<Item> {
        let mut work = UnitOfWork::new();
        work.insert(fields);

        match self.commit(work).await?.pop() {
            Some(AppliedChange::Inserted(item)) => Ok(item),
            other => Err(unexpected_outcome("insert", other)),
        }
    }

    /// Overwrites every mutable field of an existing item.
    async fn update_item(&self, item: Item) -> Result<Item> {
        let mut work = UnitOfWork::new();
        work.update(item);

        match self.commit(work).await?.pop() {
            Some(AppliedChange::Updated(item)) => Ok(item),
            other => Err(unexpected_outcome("update", other)),
        }
    }

    /// Deletes an existing item.
    async fn delete_item(&self, id: ItemId) -> Result<()> {
        let mut work = UnitOfWork::new();
        work.delete(id);

        match self.commit(work).await?.pop() {
            Some(AppliedChange::Deleted(_)) => Ok(()),
            other => Err(unexpected_outcome("delete", other)),
        }
    }
}

fn unexpected_outcome(operation: &str, outcome: Option<AppliedChange>) -> RepositoryError {
    RepositoryError::QueryFailed(format!(
        "{operation} commit returned unexpected outcome: {outcome:?}"
    ))
}

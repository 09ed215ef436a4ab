//! In-memory repository implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use inventory_core::inventory::{Item, ItemId};
use inventory_core::storage::{
    AppliedChange, ItemChange, ItemRepository, RepositoryError, Result, UnitOfWork,
};

#[derive(Debug, Clone)]
struct Store {
    items: BTreeMap<ItemId, Item>,
    /// Highest id ever assigned; 0 means the store has never held a record.
    last_id: ItemId,
}

impl Store {
    fn apply(&mut self, change: ItemChange) -> Result<AppliedChange> {
        match change {
            ItemChange::Insert(fields) => {
                self.last_id += 1;
                let item = Item::from_fields(self.last_id, fields);
                self.items.insert(item.id, item.clone());
                Ok(AppliedChange::Inserted(item))
            }
            ItemChange::Update(item) => match self.items.get_mut(&item.id) {
                Some(stored) => {
                    *stored = item.clone();
                    Ok(AppliedChange::Updated(item))
                }
                None => Err(RepositoryError::NotFound(item.id)),
            },
            ItemChange::Delete(id) => match self.items.remove(&id) {
                Some(_) => Ok(AppliedChange::Deleted(id)),
                None => Err(RepositoryError::NotFound(id)),
            },
        }
    }
}

/// In-memory item storage.
///
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    store: Arc<RwLock<Store>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(Store {
                items: BTreeMap::new(),
                last_id: 0,
            })),
        }
    }

    /// Creates a repository pre-populated with `items`, keeping their ids.
    #[cfg(test)]
    pub fn with_items(items: Vec<Item>) -> Self {
        let last_id = items.iter().map(|item| item.id).max().unwrap_or(0);
        let items = items.into_iter().map(|item| (item.id, item)).collect();

        Self {
            store: Arc::new(RwLock::new(Store { items, last_id })),
        }
    }
}

#[async_trait]
impl ItemRepository for InMemoryRepository {
    async fn find_item(&self, id: ItemId) -> Result<Option<Item>> {
        let store = self.store.read().await;
        Ok(store.items.get(&id).cloned())
    }

    async fn list_items(&self) -> Result<Vec<Item>> {
        let store = self.store.read().await;
        Ok(store.items.values().cloned().collect())
    }

    async fn commit(&self, work: UnitOfWork) -> Result<Vec<AppliedChange>> {
        if work.is_empty() {
            return Ok(Vec::new());
        }

        let mut store = self.store.write().await;

        // Changes land on a copy; the live store is only replaced on success.
        let mut staged = store.clone();
        let applied = work
            .into_changes()
            .into_iter()
            .map(|change| staged.apply(change))
            .collect::<Result<Vec<_>>>()?;

        *store = staged;
        Ok(applied)
    }

    async fn seed(&self, items: &[Item]) -> Result<usize> {
        let mut store = self.store.write().await;
        if store.last_id != 0 {
            return Ok(0);
        }

        for item in items {
            store.items.insert(item.id, item.clone());
            store.last_id = store.last_id.max(item.id);
        }
        Ok(items.len())
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}

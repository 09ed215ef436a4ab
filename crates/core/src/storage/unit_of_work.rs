//! Staged item mutations applied together by [`ItemRepository::commit`].
//!
//! [`ItemRepository::commit`]: super::ItemRepository::commit

use crate::inventory::{Item, ItemFields, ItemId};

/// A single staged mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemChange {
    /// Persist a new item; storage assigns the id.
    Insert(ItemFields),
    /// Overwrite every mutable field of an existing item.
    Update(Item),
    /// Hard-delete an existing item.
    Delete(ItemId),
}

/// The outcome of one applied [`ItemChange`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppliedChange {
    /// The inserted item, carrying its freshly assigned id.
    Inserted(Item),
    Updated(Item),
    Deleted(ItemId),
}

/// An ordered set of mutations that commit atomically.
///
/// Either every change is applied or none is. An `Update` or `Delete` whose
/// target has disappeared by commit time fails the whole unit of work with
/// `RepositoryError::NotFound`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnitOfWork {
    changes: Vec<ItemChange>,
}

impl UnitOfWork {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages an insert.
    pub fn insert(&mut self, fields: ItemFields) -> &mut Self {
        self.changes.push(ItemChange::Insert(fields));
        self
    }

    /// Stages a full overwrite of `item.id`.
    pub fn update(&mut self, item: Item) -> &mut Self {
        self.changes.push(ItemChange::Update(item));
        self
    }

    /// Stages a delete.
    pub fn delete(&mut self, id: ItemId) -> &mut Self {
        self.changes.push(ItemChange::Delete(id));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn changes(&self) -> &[ItemChange] {
        &self.changes
    }

    pub fn into_changes(self) -> Vec<ItemChange> {
        self.changes
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_changes_keep_staging_order() {
        let fields = ItemFields::new("Pen", "Blue pen", Decimal::new(150, 2), 100);
        let updated = Item::from_fields(2, fields.clone());

        let mut work = UnitOfWork::new();
        work.insert(fields.clone())
            .update(updated.clone())
            .delete(3);

        assert_eq!(work.len(), 3);
        assert_eq!(
            work.into_changes(),
            vec![
                ItemChange::Insert(fields),
                ItemChange::Update(updated),
                ItemChange::Delete(3),
            ]
        );
    }

    #[test]
    fn test_new_unit_of_work_is_empty() {
        let work = UnitOfWork::new();
        assert!(work.is_empty());
        assert!(work.changes().is_empty());
    }
}

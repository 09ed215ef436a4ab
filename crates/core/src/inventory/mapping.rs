//! Field mapping between the persisted record and the wire contract.
//!
//! The two shapes carry the same fields today but stay separate types:
//! [`Item`] may grow internal-only fields that never reach the wire.

use super::{Item, ItemContract, ItemFields};

/// Maps a persisted record to its wire contract.
pub fn item_to_contract(item: Item) -> ItemContract {
    ItemContract {
        id: item.id,
        title: item.title,
        description: item.description,
        price: item.price,
        quantity: item.quantity,
    }
}

/// Maps a wire contract to the mutable record fields.
///
/// The contract's `id` is dropped: ids are only ever assigned by storage.
pub fn contract_to_fields(contract: ItemContract) -> ItemFields {
    ItemFields {
        title: contract.title,
        description: contract.description,
        price: contract.price,
        quantity: contract.quantity,
    }
}

impl From<Item> for ItemContract {
    fn from(item: Item) -> Self {
        item_to_contract(item)
    }
}

impl From<ItemContract> for ItemFields {
    fn from(contract: ItemContract) -> Self {
        contract_to_fields(contract)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_item_to_contract_copies_all_fields() {
        let item = Item {
            id: 42,
            title: "Chair".to_string(),
            description: "Oak chair".to_string(),
            price: Decimal::new(4999, 2),
            quantity: 4,
        };

        let contract = item_to_contract(item);

        assert_eq!(contract.id, 42);
        assert_eq!(contract.title, "Chair");
        assert_eq!(contract.description, "Oak chair");
        assert_eq!(contract.price, Decimal::new(4999, 2));
        assert_eq!(contract.quantity, 4);
    }

    #[test]
    fn test_contract_to_fields_drops_client_id() {
        let contract = ItemContract {
            id: 999,
            title: "Table".to_string(),
            description: "Pine table".to_string(),
            price: Decimal::new(12000, 2),
            quantity: 1,
        };

        let fields: ItemFields = contract.into();
        let item = Item::from_fields(3, fields);

        assert_eq!(item.id, 3);
        assert_eq!(item.title, "Table");
        assert_eq!(item.price, Decimal::new(12000, 2));
    }
}

use rust_decimal::Decimal;

use super::{Item, ItemFields};

/// The records written into a fresh store on first startup.
pub fn seed_items() -> Vec<Item> {
    vec![
        Item::from_fields(
            1,
            ItemFields::new("Item 1", "Description for Item 1", Decimal::new(1099, 2), 5),
        ),
        Item::from_fields(
            2,
            ItemFields::new("Item 2", "Description for Item 2", Decimal::new(1599, 2), 10),
        ),
        Item::from_fields(
            3,
            ItemFields::new("Item 3", "Description for Item 3", Decimal::new(2099, 2), 15),
        ),
    ]
}

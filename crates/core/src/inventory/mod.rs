mod contract;
mod mapping;
mod seed;
mod types;

pub use contract::ItemContract;
pub use mapping::{contract_to_fields, item_to_contract};
pub use seed::seed_items;
pub use types::{Item, ItemFields, ItemId};

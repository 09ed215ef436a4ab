use rust_decimal::Decimal;

/// Identifier assigned by storage when an item is first persisted.
pub type ItemId = i64;

/// The mutable part of an item record.
///
/// Updates always overwrite all four fields together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFields {
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub quantity: i32,
}

impl ItemFields {
    /// Creates a new set of item fields.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        quantity: i32,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            price,
            quantity,
        }
    }
}

/// A persisted inventory item.
///
/// This is the storage-side record. It is deliberately not serializable:
/// the wire shape is [`ItemContract`](super::ItemContract).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub quantity: i32,
}

impl Item {
    /// Builds a record from an id and its mutable fields.
    pub fn from_fields(id: ItemId, fields: ItemFields) -> Self {
        Self {
            id,
            title: fields.title,
            description: fields.description,
            price: fields.price,
            quantity: fields.quantity,
        }
    }

    /// Returns a copy of the mutable fields.
    pub fn fields(&self) -> ItemFields {
        ItemFields {
            title: self.title.clone(),
            description: self.description.clone(),
            price: self.price,
            quantity: self.quantity,
        }
    }
}

//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.
//! Prices are stored as their canonical decimal string so no precision is
//! lost to SQLite's floating point type.

use std::str::FromStr;

use inventory_core::inventory::Item;
use rusqlite::Row;
use rust_decimal::Decimal;

/// Convert a SQLite row to an Item.
///
/// Expected columns: id, title, description, price, quantity
pub fn row_to_item(row: &Row) -> rusqlite::Result<Item> {
    let id: i64 = row.get(0)?;
    let title: String = row.get(1)?;
    let description: String = row.get(2)?;
    let price: String = row.get(3)?;
    let quantity: i32 = row.get(4)?;

    Ok(Item {
        id,
        title,
        description,
        price: parse_price(3, &price)?,
        quantity,
    })
}

/// Format a price for storage.
pub fn format_price(price: &Decimal) -> String {
    price.to_string()
}

fn parse_price(column: usize, s: &str) -> rusqlite::Result<Decimal> {
    Decimal::from_str(s).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(column, rusqlite::types::Type::Text, Box::new(e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_is_canonical() {
        assert_eq!(format_price(&Decimal::new(1099, 2)), "10.99");
        assert_eq!(format_price(&Decimal::new(10990, 3)), "10.990");
        assert_eq!(format_price(&Decimal::new(5, 0)), "5");
    }

    #[test]
    fn test_parse_price_round_trips_format() {
        let price = Decimal::new(2099, 2);
        assert_eq!(parse_price(3, &format_price(&price)).unwrap(), price);
    }

    #[test]
    fn test_parse_price_rejects_garbage() {
        let result = parse_price(3, "ten dollars");
        assert!(matches!(
            result,
            Err(rusqlite::Error::FromSqlConversionFailure(3, _, _))
        ));
    }
}

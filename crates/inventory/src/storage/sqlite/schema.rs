//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O.

/// SQL statement to create all tables.
///
/// `AUTOINCREMENT` keeps deleted ids from ever being handed out again and
/// records the highest id in `sqlite_sequence`.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    price TEXT NOT NULL,
    quantity INTEGER NOT NULL
);
"#;

pub const INSERT_ITEM: &str = r#"
INSERT INTO items (title, description, price, quantity)
VALUES (?1, ?2, ?3, ?4)
"#;

pub const INSERT_ITEM_WITH_ID: &str = r#"
INSERT INTO items (id, title, description, price, quantity)
VALUES (?1, ?2, ?3, ?4, ?5)
"#;

pub const SELECT_ITEM_BY_ID: &str = r#"
SELECT id, title, description, price, quantity
FROM items
WHERE id = ?1
"#;

pub const SELECT_ALL_ITEMS: &str = r#"
SELECT id, title, description, price, quantity
FROM items
ORDER BY id ASC
"#;

pub const UPDATE_ITEM: &str = r#"
UPDATE items
SET title = ?2, description = ?3, price = ?4, quantity = ?5
WHERE id = ?1
"#;

pub const DELETE_ITEM: &str = r#"
DELETE FROM items
WHERE id = ?1
"#;

/// Present only once the `items` table has held at least one row.
pub const SELECT_ITEMS_SEQUENCE: &str = r#"
SELECT seq
FROM sqlite_sequence
WHERE name = 'items'
"#;

pub const PING: &str = "SELECT 1";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_tables_is_valid_sql() {
        assert!(CREATE_TABLES.contains("CREATE TABLE IF NOT EXISTS items"));
        assert!(CREATE_TABLES.contains("AUTOINCREMENT"));
    }

    #[test]
    fn test_queries_contain_expected_keywords() {
        assert!(INSERT_ITEM.contains("INSERT"));
        assert!(!INSERT_ITEM.contains("(id,"));
        assert!(INSERT_ITEM_WITH_ID.contains("(id,"));
        assert!(SELECT_ITEM_BY_ID.contains("WHERE id = ?1"));
        assert!(SELECT_ALL_ITEMS.contains("ORDER BY id"));
        assert!(UPDATE_ITEM.contains("UPDATE"));
        assert!(DELETE_ITEM.contains("DELETE"));
        assert!(SELECT_ITEMS_SEQUENCE.contains("sqlite_sequence"));
    }
}

//! Storage backend implementations.
//!
//! This module provides concrete implementations of [`ItemRepository`]
//! defined in `inventory_core::storage`. The backend used by the server is
//! selected at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `sqlite` (default): SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//! - without `sqlite`: the in-memory backend, data is lost on restart
//!
//! # Examples
//!
//! Build with SQLite (default):
//! ```bash
//! cargo build -p inventory
//! ```
//!
//! Build with in-memory storage:
//! ```bash
//! cargo build -p inventory --no-default-features
//! ```
//!
//! [`ItemRepository`]: inventory_core::storage::ItemRepository

#[cfg(feature = "sqlite")]
pub mod sqlite;

// Only the test suite reaches the in-memory backend when `sqlite` is enabled.
#[cfg_attr(feature = "sqlite", allow(dead_code))]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;

#[cfg_attr(feature = "sqlite", allow(unused_imports))]
pub use inmemory::InMemoryRepository;

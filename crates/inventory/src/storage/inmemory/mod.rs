//! In-memory storage backend.
//!
//! Stores all items in a `BTreeMap` wrapped in `Arc<RwLock<_>>`. Used by the
//! test suite, and as the storage backend when the `sqlite` feature is
//! disabled.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! ```

mod repository;

pub use repository::InMemoryRepository;

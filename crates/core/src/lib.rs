//! Domain types and storage contracts for the inventory service.
//!
//! Pure code only: no I/O happens in this crate.

pub mod inventory;
pub mod storage;

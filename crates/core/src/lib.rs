//! Domain types, validation and report rendering for the asset inventory.
//!
//! This crate does NOT depend on the database crate; the repository layer in
//! `assetdesk_db` feeds it plain data.

pub mod assets;
pub mod error;
pub mod report;
pub mod serde_helpers;
pub mod types;

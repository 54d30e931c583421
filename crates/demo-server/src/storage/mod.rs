//! Storage layer
//!
//! Articles live in a process-local DashMap; heroes live in an embedded
//! SQLite file.

pub mod db;
pub mod memory;

pub use db::Database;
pub use memory::ArticleCatalog;

//! Demo Core Library
//!
//! Error type and storage traits shared by the demo APIs.

// Re-export pure types from demo-types
pub use demo_types::*;

pub mod error;
pub mod ports;

pub use error::{DemoError, Result};
pub use ports::{ArticleStore, HeroStore};

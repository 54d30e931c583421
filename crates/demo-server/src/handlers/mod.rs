//! HTTP handlers

pub mod articles;
pub mod health;
pub mod heroes;

pub use health::health;

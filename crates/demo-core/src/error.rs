//! Error types for the demo APIs

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DemoError>;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Article not found: {0}")]
    ArticleNotFound(i64),

    #[error("Hero not found: {0}")]
    HeroNotFound(i64),

    #[error("Database error: {0}")]
    Database(String),
}

//! Storage traits for persistence

use crate::Result;
use async_trait::async_trait;
use demo_types::{Article, Hero, HeroCreate};

/// Article store
#[async_trait]
pub trait ArticleStore: Send + Sync {
    async fn get_article(&self, id: i64) -> Result<Option<Article>>;
    /// Store a new article under `max id + 1` and return that id.
    async fn create_article(&self, article: Article) -> Result<i64>;
}

/// Hero store
#[async_trait]
pub trait HeroStore: Send + Sync {
    /// Insert a hero and return the stored row, including its assigned id.
    async fn create_hero(&self, hero: &HeroCreate) -> Result<Hero>;
    async fn list_heroes(&self) -> Result<Vec<Hero>>;
    async fn get_hero(&self, id: i64) -> Result<Option<Hero>>;
}

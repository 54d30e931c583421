//! In-memory article catalog using DashMap

use async_trait::async_trait;
use dashmap::DashMap;
use demo_core::{Article, ArticleStore, Result};
use std::sync::atomic::{AtomicI64, Ordering};

/// Process-local article store, lost on restart
///
/// Ids come from an atomic counter seeded at `max(id) + 1`. Articles are never
/// removed, so the counter always equals the current maximum id plus one.
pub struct ArticleCatalog {
    data: DashMap<i64, Article>,
    next_id: AtomicI64,
}

impl ArticleCatalog {
    pub fn new() -> Self {
        Self::with_articles(std::iter::empty())
    }

    /// Catalog holding the two articles present at process start
    pub fn seeded() -> Self {
        Self::with_articles([
            (1, Article::new("Unité centrale", 750)),
            (2, Article::new("Ecran", 350)),
        ])
    }

    pub fn with_articles(articles: impl IntoIterator<Item = (i64, Article)>) -> Self {
        let data: DashMap<i64, Article> = articles.into_iter().collect();
        let max_id = data.iter().map(|entry| *entry.key()).max().unwrap_or(0);

        Self {
            data,
            next_id: AtomicI64::new(max_id + 1),
        }
    }

    pub fn get(&self, id: i64) -> Option<Article> {
        self.data.get(&id).map(|entry| entry.value().clone())
    }

    /// Store an article under the next id and return that id
    pub fn insert(&self, article: Article) -> i64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.data.insert(id, article);
        id
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }
}

impl Default for ArticleCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArticleStore for ArticleCatalog {
    async fn get_article(&self, id: i64) -> Result<Option<Article>> {
        Ok(self.get(id))
    }

    async fn create_article(&self, article: Article) -> Result<i64> {
        let id = self.insert(article);
        tracing::debug!("Stored article {}", id);
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_seeded_articles() {
        let catalog = ArticleCatalog::seeded();

        assert_eq!(catalog.len(), 2);
        assert_eq!(
            catalog.get_article(1).await.unwrap(),
            Some(Article::new("Unité centrale", 750))
        );
        assert_eq!(
            catalog.get_article(2).await.unwrap(),
            Some(Article::new("Ecran", 350))
        );
        assert_eq!(catalog.get_article(3).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_create_assigns_max_plus_one() {
        let catalog = ArticleCatalog::with_articles([
            (4, Article::new("Clavier", 40)),
            (10, Article::new("Souris", 25)),
        ]);

        let id = catalog
            .create_article(Article::new("Imprimante", 120))
            .await
            .unwrap();
        assert_eq!(id, 11);
        assert_eq!(catalog.get(11), Some(Article::new("Imprimante", 120)));

        let id = catalog.create_article(Article::new("Webcam", 60)).await.unwrap();
        assert_eq!(id, 12);
    }

    #[test]
    fn test_empty_catalog_starts_at_one() {
        let catalog = ArticleCatalog::new();
        assert_eq!(catalog.len(), 0);
        assert_eq!(catalog.insert(Article::new("Ecran", 350)), 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_creates_get_distinct_ids() {
        let catalog = Arc::new(ArticleCatalog::seeded());

        let mut handles = Vec::new();
        for i in 0..32 {
            let catalog = catalog.clone();
            handles.push(tokio::spawn(async move {
                catalog.insert(Article::new(format!("article-{}", i), i))
            }));
        }

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();

        assert_eq!(ids, (3..35).collect::<Vec<i64>>());
        assert_eq!(catalog.len(), 34);
    }
}

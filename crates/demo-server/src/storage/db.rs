//! SQLite hero store (embedded, no external dependencies)

use anyhow::{Context, Result};
use async_trait::async_trait;
use demo_core::{DemoError, Hero, HeroCreate, HeroStore};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    pub async fn new(database_path: &str, max_connections: u32) -> Result<Self> {
        tracing::info!("Opening SQLite database at: {}", database_path);

        // A bare file name has an empty parent; treat it as the working directory
        let parent = match Path::new(database_path).parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => std::path::PathBuf::from("."),
        };

        tokio::fs::create_dir_all(&parent).await.with_context(|| {
            format!("Failed to create database directory: {}", parent.display())
        })?;

        let test_file = parent.join(".write_test");
        match tokio::fs::write(&test_file, b"test").await {
            Ok(_) => {
                let _ = tokio::fs::remove_file(&test_file).await;
            }
            Err(e) => {
                return Err(anyhow::anyhow!(
                    "Database directory is not writable: {}: {}",
                    parent.display(),
                    e
                ));
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .synchronous(sqlx::sqlite::SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .connect_with(options)
            .await
            .with_context(|| {
                format!("Failed to connect to SQLite database at: {}", database_path)
            })?;

        Self::create_tables(&pool)
            .await
            .context("Failed to create hero table")?;

        tracing::info!("Database initialization complete");

        Ok(Self { pool })
    }

    /// Create the hero table and its indexes if absent
    async fn create_tables(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS hero (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                secret_name TEXT NOT NULL,
                age INTEGER
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS ix_hero_name ON hero (name)")
            .execute(pool)
            .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS ix_hero_age ON hero (age)")
            .execute(pool)
            .await?;

        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn storage_error(e: sqlx::Error) -> DemoError {
    DemoError::Database(e.to_string())
}

#[async_trait]
impl HeroStore for Database {
    async fn create_hero(&self, hero: &HeroCreate) -> demo_core::Result<Hero> {
        let mut tx = self.pool.begin().await.map_err(storage_error)?;

        let result = sqlx::query(
            r#"
            INSERT INTO hero (name, secret_name, age)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&hero.name)
        .bind(&hero.secret_name)
        .bind(hero.age)
        .execute(&mut *tx)
        .await
        .map_err(storage_error)?;

        // Re-read the row so the response reflects what was stored
        let row: HeroRow = sqlx::query_as(
            r#"
            SELECT id, name, secret_name, age FROM hero WHERE id = ?1
            "#,
        )
        .bind(result.last_insert_rowid())
        .fetch_one(&mut *tx)
        .await
        .map_err(storage_error)?;

        tx.commit().await.map_err(storage_error)?;

        tracing::info!("Created hero {} ({})", row.id, row.name);
        Ok(row.into())
    }

    async fn list_heroes(&self) -> demo_core::Result<Vec<Hero>> {
        let rows: Vec<HeroRow> = sqlx::query_as(
            r#"
            SELECT id, name, secret_name, age FROM hero ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(rows.into_iter().map(|r| r.into()).collect())
    }

    async fn get_hero(&self, id: i64) -> demo_core::Result<Option<Hero>> {
        let row: Option<HeroRow> = sqlx::query_as(
            r#"
            SELECT id, name, secret_name, age FROM hero WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(storage_error)?;

        Ok(row.map(|r| r.into()))
    }
}

// Helper struct for sqlx query_as
#[derive(sqlx::FromRow)]
struct HeroRow {
    id: i64,
    name: String,
    secret_name: String,
    age: Option<i64>,
}

impl From<HeroRow> for Hero {
    fn from(r: HeroRow) -> Self {
        Hero {
            id: r.id,
            name: r.name,
            secret_name: r.secret_name,
            age: r.age,
        }
    }
}

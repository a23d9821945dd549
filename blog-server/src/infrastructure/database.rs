use crate::data::{
    InMemoryPostRepository, PostRepository, PostgresPostRepository, SupabasePostRepository,
};
use crate::infrastructure::config::StorageConfig;
use anyhow::Result;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::sync::Arc;
use std::time::Duration;

pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;

    tracing::info!("Database connection pool created");
    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;

    tracing::info!("Database migrations completed");
    Ok(())
}

/// Builds the storage client once at startup.
pub async fn build_post_repository(
    storage: &StorageConfig,
) -> Result<Arc<dyn PostRepository + Send + Sync>> {
    match storage {
        StorageConfig::Postgres {
            url,
            max_connections,
            run_migrations: migrate,
        } => {
            tracing::info!("Connecting to database...");
            let pool = create_pool(url, *max_connections).await?;

            if *migrate {
                tracing::info!("Running database migrations...");
                run_migrations(&pool).await?;
            }

            Ok(Arc::new(PostgresPostRepository::new(pool)))
        }
        StorageConfig::Supabase { url, key } => {
            tracing::info!("Using storage REST API at {}", url);
            let client = reqwest::Client::builder()
                .connect_timeout(Duration::from_secs(5))
                .build()?;

            Ok(Arc::new(SupabasePostRepository::new(client, url, key)))
        }
        StorageConfig::InMemory => {
            tracing::warn!(
                "Neither DATABASE_URL nor SUPABASE_URL is set. Posts are kept in memory only."
            );
            Ok(Arc::new(InMemoryPostRepository::new()))
        }
    }
}

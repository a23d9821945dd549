//! Application configuration loaded from environment variables.

use std::env;

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

/// Where posts are stored.
#[derive(Debug, Clone, PartialEq)]
pub enum StorageConfig {
    /// Direct Postgres connection through sqlx.
    Postgres {
        url: String,
        max_connections: u32,
        run_migrations: bool,
    },
    /// Hosted database reached through its REST query API.
    Supabase { url: String, key: String },
    /// Nothing configured; posts live in process memory.
    InMemory,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: String,
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Values are read as-is; unparsable numbers fall back to defaults.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            cors_allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| DEFAULT_CORS_ORIGINS.to_string()),
            storage: StorageConfig::from_env(),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl StorageConfig {
    // DATABASE_URL wins over SUPABASE_URL
    fn from_env() -> Self {
        if let Ok(url) = env::var("DATABASE_URL") {
            return Self::Postgres {
                url,
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(5),
                run_migrations: env::var("RUN_MIGRATIONS")
                    .map(|v| !matches!(v.to_lowercase().as_str(), "0" | "false" | "no"))
                    .unwrap_or(true),
            };
        }

        if let Ok(url) = env::var("SUPABASE_URL") {
            return Self::Supabase {
                url,
                key: env::var("SUPABASE_KEY").unwrap_or_default(),
            };
        }

        Self::InMemory
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Self::Postgres { .. } => "postgres",
            Self::Supabase { .. } => "supabase",
            Self::InMemory => "in-memory",
        }
    }
}

//! # Storage Layer
//!
//! Persistence for books. The domain layer only sees [`BookStorage`];
//! the concrete backend is picked once at startup from the database URL.

pub mod memory;
pub mod sqlite;
pub mod traits;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

pub use memory::InMemoryBookStorage;
pub use sqlite::{DbConnection, SqliteBookRepository};
pub use traits::{BookStorage, StorageError, StorageResult};

/// Database URL that selects the non-persistent backend
pub const MEMORY_DATABASE_URL: &str = "memory";

/// Open the storage backend named by `database_url`
pub async fn connect(database_url: &str, max_connections: u32) -> Result<Arc<dyn BookStorage>> {
    if database_url == MEMORY_DATABASE_URL {
        info!("Using in-memory book storage");
        return Ok(Arc::new(InMemoryBookStorage::new()));
    }

    info!("Using SQLite book storage at {}", database_url);
    let db = DbConnection::new(database_url, max_connections).await?;
    Ok(Arc::new(SqliteBookRepository::new(db)))
}

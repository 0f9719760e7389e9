//! # Storage Traits
//!
//! This module defines the storage abstraction that lets different
//! backends be used interchangeably by the domain layer.

use async_trait::async_trait;
use sqlx::error::ErrorKind;

use crate::domain::models::book::{Book, BookContent};

/// Failures raised by a storage backend
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The store rejected a write because of a uniqueness or not-null rule
    #[error("{0}")]
    ConstraintViolation(String),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl StorageError {
    /// Sort a raw sqlx error into a constraint breach or a plain database failure
    pub fn classify(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.kind() {
                ErrorKind::UniqueViolation | ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
                    return StorageError::ConstraintViolation(db_err.message().to_string());
                }
                _ => {}
            }
        }
        StorageError::Database(err)
    }
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Trait defining the interface for book storage operations
///
/// Implementations are responsible for assigning ids on insert and for
/// enforcing title uniqueness.
#[async_trait]
pub trait BookStorage: Send + Sync {
    /// List every stored book, ordered by id
    async fn find_all(&self) -> StorageResult<Vec<Book>>;

    /// Retrieve a specific book by ID
    async fn find_by_id(&self, id: i64) -> StorageResult<Option<Book>>;

    /// All books whose title matches exactly
    async fn find_by_title(&self, title: &str) -> StorageResult<Vec<Book>>;

    /// Check whether a book with this ID exists
    async fn exists_by_id(&self, id: i64) -> StorageResult<bool>;

    /// Insert when `id` is `None`, otherwise replace the record stored under `id`
    async fn save(&self, id: Option<i64>, content: &BookContent) -> StorageResult<Book>;

    /// Delete a book by ID.
    /// Returns true if the book was found and deleted, false otherwise
    async fn delete(&self, id: i64) -> StorageResult<bool>;
}

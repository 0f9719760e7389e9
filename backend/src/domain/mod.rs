//! # Domain Module
//!
//! Business rules for the book catalogue: which writes are allowed, how
//! lookups fail, and how storage failures are classified.

pub mod book_service;
pub mod models;

pub use book_service::BookService;
pub use models::book::{Book, BookContent, BookDraft, BookValidationError};

use crate::storage::StorageError;

/// Everything a book operation can fail with
#[derive(Debug, thiserror::Error)]
pub enum BookError {
    #[error("no book found with id={0}")]
    NotFound(i64),
    #[error("ids do not match! path id={path}, payload id={payload}")]
    IdMismatch { path: i64, payload: i64 },
    #[error(transparent)]
    Validation(#[from] BookValidationError),
    #[error("{0}")]
    DataIntegrity(String),
    #[error("storage failure: {0}")]
    Storage(#[source] StorageError),
}

impl From<StorageError> for BookError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::ConstraintViolation(message) => BookError::DataIntegrity(message),
            other => BookError::Storage(other),
        }
    }
}

pub type BookResult<T> = Result<T, BookError>;

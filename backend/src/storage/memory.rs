//! # In-Memory Storage
//!
//! A non-persistent [`BookStorage`] backend. It follows the same rules as
//! the SQLite table: ids are never reused, titles are unique.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::models::book::{Book, BookContent};
use crate::storage::traits::{BookStorage, StorageError, StorageResult};

#[derive(Default)]
struct Shelf {
    books: BTreeMap<i64, Book>,
    last_id: i64,
}

#[derive(Default)]
pub struct InMemoryBookStorage {
    shelf: Mutex<Shelf>,
}

impl InMemoryBookStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookStorage for InMemoryBookStorage {
    async fn find_all(&self) -> StorageResult<Vec<Book>> {
        let shelf = self.shelf.lock().await;
        Ok(shelf.books.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> StorageResult<Option<Book>> {
        let shelf = self.shelf.lock().await;
        Ok(shelf.books.get(&id).cloned())
    }

    async fn find_by_title(&self, title: &str) -> StorageResult<Vec<Book>> {
        let shelf = self.shelf.lock().await;
        Ok(shelf
            .books
            .values()
            .filter(|book| book.title == title)
            .cloned()
            .collect())
    }

    async fn exists_by_id(&self, id: i64) -> StorageResult<bool> {
        let shelf = self.shelf.lock().await;
        Ok(shelf.books.contains_key(&id))
    }

    async fn save(&self, id: Option<i64>, content: &BookContent) -> StorageResult<Book> {
        let mut shelf = self.shelf.lock().await;

        let title_taken = shelf
            .books
            .values()
            .any(|book| book.title == content.title && Some(book.id) != id);
        if title_taken {
            return Err(StorageError::ConstraintViolation(
                "UNIQUE constraint failed: books.title".to_string(),
            ));
        }

        let id = match id {
            Some(id) => id,
            None => shelf.last_id + 1,
        };
        shelf.last_id = shelf.last_id.max(id);

        let book = Book {
            id,
            title: content.title.clone(),
            author: content.author.clone(),
        };
        shelf.books.insert(id, book.clone());

        Ok(book)
    }

    async fn delete(&self, id: i64) -> StorageResult<bool> {
        let mut shelf = self.shelf.lock().await;
        Ok(shelf.books.remove(&id).is_some())
    }
}

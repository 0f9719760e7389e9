use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::models::book::{Book, BookDraft};
use crate::domain::{BookError, BookResult};
use crate::storage::BookStorage;

/// Service for reading and writing books
#[derive(Clone)]
pub struct BookService {
    storage: Arc<dyn BookStorage>,
}

impl BookService {
    /// Create a new BookService
    pub fn new(storage: Arc<dyn BookStorage>) -> Self {
        Self { storage }
    }

    /// List all books
    pub async fn list_books(&self) -> BookResult<Vec<Book>> {
        let books = self.storage.find_all().await?;
        info!("Found {} books", books.len());
        Ok(books)
    }

    /// Books whose title matches exactly. An empty result is not an error.
    pub async fn find_by_title(&self, title: &str) -> BookResult<Vec<Book>> {
        let books = self.storage.find_by_title(title).await?;
        info!("Found {} books titled {:?}", books.len(), title);
        Ok(books)
    }

    /// Get a book by ID
    pub async fn get_book(&self, id: i64) -> BookResult<Book> {
        match self.storage.find_by_id(id).await? {
            Some(book) => Ok(book),
            None => {
                warn!("Book not found: {}", id);
                Err(BookError::NotFound(id))
            }
        }
    }

    /// Create a new book. Any id on the draft is ignored; the store assigns one.
    pub async fn create_book(&self, draft: BookDraft) -> BookResult<Book> {
        info!("Creating book: title={:?}, author={:?}", draft.title, draft.author);

        let content = draft.validate()?;
        let book = self.storage.save(None, &content).await?;

        info!("Created book {:?} with ID: {}", book.title, book.id);
        Ok(book)
    }

    /// Replace the book stored under `id`.
    ///
    /// Checks run in order: the draft id must equal `id`, the book must
    /// exist, then the draft must be valid.
    pub async fn update_book(&self, id: i64, draft: BookDraft) -> BookResult<Book> {
        info!("Updating book: {}", id);

        if draft.id != id {
            warn!("Rejecting update of book {}: payload carries id {}", id, draft.id);
            return Err(BookError::IdMismatch { path: id, payload: draft.id });
        }

        self.ensure_exists(id).await?;

        let content = draft.validate()?;
        let book = self.storage.save(Some(id), &content).await?;

        info!("Updated book {:?} with ID: {}", book.title, book.id);
        Ok(book)
    }

    /// Delete a book
    pub async fn delete_book(&self, id: i64) -> BookResult<()> {
        info!("Deleting book: {}", id);

        self.ensure_exists(id).await?;

        if !self.storage.delete(id).await? {
            // Removed by a concurrent request between the check and the delete
            return Err(BookError::NotFound(id));
        }

        info!("Deleted book with ID: {}", id);
        Ok(())
    }

    async fn ensure_exists(&self, id: i64) -> BookResult<()> {
        if self.storage.exists_by_id(id).await? {
            Ok(())
        } else {
            warn!("Book not found: {}", id);
            Err(BookError::NotFound(id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BookValidationError;
    use crate::storage::InMemoryBookStorage;

    fn setup_test() -> BookService {
        BookService::new(Arc::new(InMemoryBookStorage::new()))
    }

    fn draft(id: i64, title: &str, author: &str) -> BookDraft {
        BookDraft {
            id,
            title: Some(title.to_string()),
            author: Some(author.to_string()),
        }
    }

    #[tokio::test]
    async fn test_created_book_can_be_fetched() {
        let service = setup_test();

        let created = service.create_book(draft(0, "Dune", "Frank Herbert")).await.unwrap();
        let fetched = service.get_book(created.id).await.unwrap();

        assert_eq!(fetched.title, "Dune");
        assert_eq!(fetched.author, "Frank Herbert");
    }

    #[tokio::test]
    async fn test_get_missing_book_is_not_found() {
        let service = setup_test();

        let err = service.get_book(42).await.unwrap_err();
        assert!(matches!(err, BookError::NotFound(42)));
        assert_eq!(err.to_string(), "no book found with id=42");
    }

    #[tokio::test]
    async fn test_create_with_null_author_is_validation_error() {
        let service = setup_test();

        let mut bad = draft(0, "Dune", "x");
        bad.author = None;
        let err = service.create_book(bad).await.unwrap_err();

        assert!(matches!(err, BookError::Validation(BookValidationError::MissingAuthor)));
        assert!(service.list_books().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_existing_with_blank_title_is_validation_error() {
        let service = setup_test();

        let created = service.create_book(draft(0, "Dune", "Frank Herbert")).await.unwrap();
        let err = service.update_book(created.id, draft(created.id, " ", "Frank Herbert")).await.unwrap_err();

        assert!(matches!(err, BookError::Validation(BookValidationError::MissingTitle)));
        assert_eq!(service.get_book(created.id).await.unwrap().title, "Dune");
    }

    #[tokio::test]
    async fn test_duplicate_title_is_data_integrity_error() {
        let service = setup_test();

        service.create_book(draft(0, "Dune", "Frank Herbert")).await.unwrap();
        let err = service.create_book(draft(0, "Dune", "Someone Else")).await.unwrap_err();

        assert!(matches!(err, BookError::DataIntegrity(_)));
        assert_eq!(service.list_books().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_with_mismatched_id_leaves_record_unchanged() {
        let service = setup_test();

        let created = service.create_book(draft(0, "Dune", "Frank Herbert")).await.unwrap();
        let err = service
            .update_book(created.id, draft(created.id + 1, "Dune", "Changed"))
            .await
            .unwrap_err();

        assert!(matches!(err, BookError::IdMismatch { .. }));
        assert_eq!(service.get_book(created.id).await.unwrap().author, "Frank Herbert");
    }

    #[tokio::test]
    async fn test_id_mismatch_is_checked_before_existence() {
        let service = setup_test();

        let err = service.update_book(5, draft(6, "Dune", "Frank Herbert")).await.unwrap_err();
        assert!(matches!(err, BookError::IdMismatch { path: 5, payload: 6 }));
    }

    #[tokio::test]
    async fn test_update_missing_book_is_not_found() {
        let service = setup_test();

        let err = service.update_book(7, draft(7, "Dune", "Frank Herbert")).await.unwrap_err();
        assert!(matches!(err, BookError::NotFound(7)));
        assert!(service.list_books().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_author_keeps_id_and_title() {
        let service = setup_test();

        let created = service.create_book(draft(0, "Dune", "Frank Herbert")).await.unwrap();
        service
            .update_book(created.id, draft(created.id, "Dune", "newAuthor"))
            .await
            .unwrap();

        let fetched = service.get_book(created.id).await.unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.title, "Dune");
        assert_eq!(fetched.author, "newAuthor");
    }

    #[tokio::test]
    async fn test_delete_then_get_is_not_found() {
        let service = setup_test();

        let created = service.create_book(draft(0, "Dune", "Frank Herbert")).await.unwrap();
        service.delete_book(created.id).await.unwrap();

        assert!(matches!(service.get_book(created.id).await, Err(BookError::NotFound(_))));
        assert!(matches!(service.delete_book(created.id).await, Err(BookError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_find_by_title_returns_empty_for_unknown_title() {
        let service = setup_test();

        service.create_book(draft(0, "Dune", "Frank Herbert")).await.unwrap();

        assert_eq!(service.find_by_title("Dune").await.unwrap().len(), 1);
        assert!(service.find_by_title("Emma").await.unwrap().is_empty());
    }
}

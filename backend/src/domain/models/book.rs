//! backend/src/domain/models/book.rs

/// A persisted book. The id is assigned by the store and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
}

/// An unvalidated book as submitted by a client.
///
/// `id` is whatever the payload carried. It is ignored on create and
/// compared against the addressed id on update.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BookDraft {
    pub id: i64,
    pub title: Option<String>,
    pub author: Option<String>,
}

impl BookDraft {
    pub fn validate(self) -> Result<BookContent, BookValidationError> {
        BookContent::new(self.title, self.author)
    }
}

/// The writable part of a book: everything except its identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookContent {
    pub title: String,
    pub author: String,
}

impl BookContent {
    /// Validate raw fields. Both must be present and contain more than whitespace.
    pub fn new(title: Option<String>, author: Option<String>) -> Result<Self, BookValidationError> {
        let title = title
            .filter(|t| !t.trim().is_empty())
            .ok_or(BookValidationError::MissingTitle)?;
        let author = author
            .filter(|a| !a.trim().is_empty())
            .ok_or(BookValidationError::MissingAuthor)?;

        Ok(Self { title, author })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookValidationError {
    #[error("title must not be empty")]
    MissingTitle,
    #[error("author must not be empty")]
    MissingAuthor,
}

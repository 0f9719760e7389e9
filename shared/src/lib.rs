use serde::{Deserialize, Serialize};

/// Book as it travels over the wire.
///
/// `title` and `author` are optional on input so that a payload carrying
/// `null` reaches validation instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Book {
    /// Store-assigned identifier (ignored on create, must match the path on update)
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: 0,
            title: Some(title.into()),
            author: Some(author.into()),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }
}

/// Error body returned by every failing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_without_id_defaults_to_zero() {
        let book: Book = serde_json::from_str(r#"{"title":"Dune","author":"Herbert"}"#).unwrap();
        assert_eq!(book.id, 0);
        assert_eq!(book.title.as_deref(), Some("Dune"));
    }

    #[test]
    fn test_null_author_deserializes() {
        let book: Book = serde_json::from_str(r#"{"id":3,"title":"Dune","author":null}"#).unwrap();
        assert_eq!(book.id, 3);
        assert!(book.author.is_none());
    }

    #[test]
    fn test_book_serializes_flat_shape() {
        let json = serde_json::to_value(Book::new("Dune", "Herbert").with_id(7)).unwrap();
        assert_eq!(json, serde_json::json!({"id": 7, "title": "Dune", "author": "Herbert"}));
    }
}

use async_trait::async_trait;
use sqlx::{sqlite::SqliteRow, Row};

use crate::domain::models::book::{Book, BookContent};
use crate::storage::sqlite::db::DbConnection;
use crate::storage::traits::{BookStorage, StorageError, StorageResult};

/// SQLite-backed implementation of [`BookStorage`]
#[derive(Clone)]
pub struct SqliteBookRepository {
    db: DbConnection,
}

impl SqliteBookRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn row_to_book(row: &SqliteRow) -> StorageResult<Book> {
        Ok(Book {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            author: row.try_get("author")?,
        })
    }
}

#[async_trait]
impl BookStorage for SqliteBookRepository {
    async fn find_all(&self) -> StorageResult<Vec<Book>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, author
            FROM books
            ORDER BY id ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::row_to_book).collect()
    }

    async fn find_by_id(&self, id: i64) -> StorageResult<Option<Book>> {
        let row = sqlx::query(
            r#"
            SELECT id, title, author
            FROM books
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;

        row.as_ref().map(Self::row_to_book).transpose()
    }

    async fn find_by_title(&self, title: &str) -> StorageResult<Vec<Book>> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, author
            FROM books
            WHERE title = ?
            ORDER BY id ASC
            "#,
        )
        .bind(title)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::row_to_book).collect()
    }

    async fn exists_by_id(&self, id: i64) -> StorageResult<bool> {
        let row = sqlx::query("SELECT 1 FROM books WHERE id = ?")
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;

        Ok(row.is_some())
    }

    async fn save(&self, id: Option<i64>, content: &BookContent) -> StorageResult<Book> {
        let query = match id {
            None => sqlx::query(
                r#"
                INSERT INTO books (title, author)
                VALUES (?, ?)
                RETURNING id, title, author
                "#,
            )
            .bind(&content.title)
            .bind(&content.author),
            Some(id) => sqlx::query(
                r#"
                INSERT INTO books (id, title, author)
                VALUES (?, ?, ?)
                ON CONFLICT(id) DO UPDATE SET
                    title = excluded.title,
                    author = excluded.author
                RETURNING id, title, author
                "#,
            )
            .bind(id)
            .bind(&content.title)
            .bind(&content.author),
        };

        let row = query
            .fetch_one(self.db.pool())
            .await
            .map_err(StorageError::classify)?;

        Self::row_to_book(&row)
    }

    async fn delete(&self, id: i64) -> StorageResult<bool> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Setup a new private database for each test
    async fn setup_test() -> SqliteBookRepository {
        let db = DbConnection::in_memory().await.expect("Failed to create test database");
        SqliteBookRepository::new(db)
    }

    fn content(title: &str, author: &str) -> BookContent {
        BookContent {
            title: title.to_string(),
            author: author.to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let repo = setup_test().await;

        let first = repo.save(None, &content("Dune", "Frank Herbert")).await.expect("Failed to save");
        let second = repo.save(None, &content("Emma", "Jane Austen")).await.expect("Failed to save");

        assert!(first.id > 0);
        assert!(second.id > first.id);
        assert_eq!(second.title, "Emma");
    }

    #[tokio::test]
    async fn test_find_by_id_round_trip() {
        let repo = setup_test().await;

        let saved = repo.save(None, &content("Dune", "Frank Herbert")).await.unwrap();
        let found = repo.find_by_id(saved.id).await.expect("Query failed");

        assert_eq!(found, Some(saved));
        assert!(repo.find_by_id(9999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_title_is_constraint_violation() {
        let repo = setup_test().await;

        repo.save(None, &content("Dune", "Frank Herbert")).await.unwrap();
        let result = repo.save(None, &content("Dune", "Someone Else")).await;

        assert!(matches!(result, Err(StorageError::ConstraintViolation(_))));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_save_with_id_replaces_record() {
        let repo = setup_test().await;

        let saved = repo.save(None, &content("Dune", "Frank Herbert")).await.unwrap();
        let updated = repo
            .save(Some(saved.id), &content("Dune", "F. Herbert"))
            .await
            .expect("Failed to update");

        assert_eq!(updated.id, saved.id);
        assert_eq!(updated.author, "F. Herbert");
        assert_eq!(repo.find_all().await.unwrap(), vec![updated]);
    }

    #[tokio::test]
    async fn test_update_to_taken_title_is_rejected() {
        let repo = setup_test().await;

        repo.save(None, &content("Dune", "Frank Herbert")).await.unwrap();
        let emma = repo.save(None, &content("Emma", "Jane Austen")).await.unwrap();
        let result = repo.save(Some(emma.id), &content("Dune", "Jane Austen")).await;

        assert!(matches!(result, Err(StorageError::ConstraintViolation(_))));
        assert_eq!(repo.find_by_id(emma.id).await.unwrap().unwrap().title, "Emma");
    }

    #[tokio::test]
    async fn test_find_by_title_is_exact() {
        let repo = setup_test().await;

        repo.save(None, &content("Dune", "Frank Herbert")).await.unwrap();
        repo.save(None, &content("Dune Messiah", "Frank Herbert")).await.unwrap();

        let found = repo.find_by_title("Dune").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Dune");
        assert!(repo.find_by_title("dune").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_and_exists() {
        let repo = setup_test().await;

        let saved = repo.save(None, &content("Dune", "Frank Herbert")).await.unwrap();
        assert!(repo.exists_by_id(saved.id).await.unwrap());

        assert!(repo.delete(saved.id).await.expect("Failed to delete"));
        assert!(!repo.exists_by_id(saved.id).await.unwrap());

        // Deleting again finds nothing
        assert!(!repo.delete(saved.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = setup_test().await;

        let first = repo.save(None, &content("Dune", "Frank Herbert")).await.unwrap();
        repo.delete(first.id).await.unwrap();
        let second = repo.save(None, &content("Emma", "Jane Austen")).await.unwrap();

        assert!(second.id > first.id);
    }
}

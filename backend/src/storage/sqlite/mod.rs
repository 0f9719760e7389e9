pub mod book_repository;
pub mod db;

pub use book_repository::SqliteBookRepository;
pub use db::DbConnection;

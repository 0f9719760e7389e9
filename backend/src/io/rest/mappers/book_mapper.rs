//! backend/src/io/rest/mappers/book_mapper.rs

use crate::domain::models::book::{Book as DomainBook, BookDraft};
use shared::Book as SharedBook;

/// Mapper to convert between shared Book DTOs and domain Book models.
pub struct BookMapper;

impl BookMapper {
    /// Converts a domain Book model to a shared Book DTO.
    pub fn to_dto(domain: DomainBook) -> SharedBook {
        SharedBook {
            id: domain.id,
            title: Some(domain.title),
            author: Some(domain.author),
        }
    }

    pub fn to_dto_list(domain_books: Vec<DomainBook>) -> Vec<SharedBook> {
        domain_books.into_iter().map(Self::to_dto).collect()
    }

    /// Converts a shared Book DTO to an unvalidated domain draft.
    pub fn to_draft(dto: SharedBook) -> BookDraft {
        BookDraft {
            id: dto.id,
            title: dto.title,
            author: dto.author,
        }
    }
}

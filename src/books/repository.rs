pub mod memory_book_repository;

use crate::books::domain::model::BookEntity;
use crate::core::repository::Repository;

// BookRepository is the catalog store: the ordered sequence of book records
// for one session.
pub trait BookRepository: Repository<BookEntity> {
    // records whose title or author contains term, ignoring case, in catalog order
    fn search(&self, term: &str) -> Vec<&BookEntity>;
}

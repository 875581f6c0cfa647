use crate::books::repository::BookRepository;
use crate::books::repository::memory_book_repository::MemoryBookRepository;

// A fresh, empty catalog for a new session.
pub fn create_book_repository() -> Box<dyn BookRepository> {
    Box::new(MemoryBookRepository::new())
}

pub mod service;

use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::core::library::LibraryResult;

// CatalogService is the only caller of the catalog store. It owns the boundary
// checks the store leaves out: required fields and year bounds.
pub trait CatalogService {
    fn add_book(&mut self, book: &BookDto) -> LibraryResult<BookDto>;
    // number of removed records, zero when nothing matched
    fn remove_book(&mut self, title: &str) -> LibraryResult<usize>;
    // None when no record carries old_title
    fn update_book(&mut self, old_title: &str, update: &BookUpdate) -> LibraryResult<Option<BookDto>>;
    fn find_books(&self, term: &str) -> LibraryResult<Vec<BookDto>>;
    fn list_books(&self) -> LibraryResult<Vec<BookDto>>;
}

/// Replacement values for an existing record. A field that is `None` or
/// blank keeps the record's current value; a fully populated update
/// overwrites every field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub year: Option<i32>,
}

impl BookUpdate {
    pub fn full(title: &str, author: &str, genre: &str, year: i32) -> Self {
        Self {
            title: Some(title.to_string()),
            author: Some(author.to_string()),
            genre: Some(genre.to_string()),
            year: Some(year),
        }
    }

    pub fn is_empty(&self) -> bool {
        keep(&self.title) && keep(&self.author) && keep(&self.genre) && self.year.is_none()
    }

    pub fn apply(&self, current: &BookEntity) -> BookEntity {
        BookEntity {
            title: pick(&self.title, &current.title),
            author: pick(&self.author, &current.author),
            genre: pick(&self.genre, &current.genre),
            year: self.year.unwrap_or(current.year),
        }
    }
}

fn keep(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |v| v.trim().is_empty())
}

fn pick(value: &Option<String>, current: &str) -> String {
    if keep(value) {
        current.to_string()
    } else {
        value.as_deref().unwrap_or(current).to_string()
    }
}

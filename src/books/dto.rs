use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDto {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub year: i32,
}

impl BookDto {
    pub fn new(title: &str, author: &str, genre: &str, year: i32) -> BookDto {
        BookDto {
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            year,
        }
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.title.to_string()
    }
}

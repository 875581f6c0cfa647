use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

// BookEntity is a single record in the catalog. The title doubles as its key
// but nothing stops two records from sharing one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookEntity {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub year: i32,
}

impl BookEntity {
    pub fn new(title: &str, author: &str, genre: &str, year: i32) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            year,
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.title.to_string()
    }
}

impl Book for BookEntity {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn author(&self) -> &str {
        self.author.as_str()
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::Book;
    use crate::books::domain::model::BookEntity;
    use crate::core::domain::Identifiable;

    #[test]
    fn test_should_build_books() {
        let book = BookEntity::new("Dune", "Herbert", "Sci-Fi", 1965);
        assert_eq!("Dune", book.title.as_str());
        assert_eq!("Herbert", book.author.as_str());
        assert_eq!("Sci-Fi", book.genre.as_str());
        assert_eq!(1965, book.year);
        assert_eq!("Dune", book.id());
    }

    #[test]
    fn test_should_match_title_or_author_ignoring_case() {
        let book = BookEntity::new("Dune", "Herbert", "Sci-Fi", 1965);
        assert!(book.matches("du"));
        assert!(book.matches("he"));
        assert!(book.matches("herbert"));
        assert!(!book.matches("sci"));
        assert!(!book.matches("orwell"));
    }
}

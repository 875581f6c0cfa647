use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::{BookUpdate, CatalogService};
use crate::core::command::{Command, CommandError};

pub struct UpdateBookCommand<'a> {
    catalog_service: &'a mut dyn CatalogService,
}

impl<'a> UpdateBookCommand<'a> {
    pub fn new(catalog_service: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog_service,
        }
    }
}

// Fields left out, or sent blank, keep the book's current value.
#[derive(Debug, Deserialize)]
pub struct UpdateBookCommandRequest {
    pub old_title: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
}

impl UpdateBookCommandRequest {
    pub fn new(old_title: &str, title: &str, author: &str, genre: &str, year: i32) -> Self {
        Self {
            old_title: old_title.to_string(),
            title: Some(title.to_string()),
            author: Some(author.to_string()),
            genre: Some(genre.to_string()),
            year: Some(year),
        }
    }

    pub fn build_update(&self) -> BookUpdate {
        BookUpdate {
            title: self.title.clone(),
            author: self.author.clone(),
            genre: self.genre.clone(),
            year: self.year,
        }
    }
}


#[derive(Debug, Serialize)]
pub struct UpdateBookCommandResponse {
    // None when no book carried the old title
    pub book: Option<BookDto>,
}

impl UpdateBookCommandResponse {
    pub fn new(book: Option<BookDto>) -> Self {
        Self {
            book,
        }
    }
}

impl<'a> Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand<'a> {
    fn execute(&mut self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        let update = req.build_update();
        self.catalog_service.update_book(req.old_title.as_str(), &update)
            .map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
    use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::core::command::Command;
    use crate::core::domain::Configuration;

    #[test]
    fn test_should_run_update_book() {
        let mut svc = factory::create_catalog_service(&Configuration::new("test"));
        AddBookCommand::new(svc.as_mut()).execute(AddBookCommandRequest::new("1984", "Orwell", "Fiction", 1948)).expect("should add book");

        let req = UpdateBookCommandRequest::new("1984", "Nineteen Eighty-Four", "Orwell", "Dystopian", 1949);
        let res = UpdateBookCommand::new(svc.as_mut()).execute(req).expect("should update book");
        let expected = BookDto::new("Nineteen Eighty-Four", "Orwell", "Dystopian", 1949);
        assert_eq!(Some(expected.clone()), res.book);
        assert_eq!(vec![expected], svc.list_books().expect("should list books"));
    }

    #[test]
    fn test_should_run_partial_update_from_json() {
        let mut svc = factory::create_catalog_service(&Configuration::new("test"));
        AddBookCommand::new(svc.as_mut()).execute(AddBookCommandRequest::new("Dune", "Herbert", "Sci-Fi", 1965)).expect("should add book");

        let req: UpdateBookCommandRequest = serde_json::from_str(r#"{"old_title": "Dune", "title": "", "genre": "Science Fiction"}"#).expect("should parse");
        UpdateBookCommand::new(svc.as_mut()).execute(req).expect("should update book");
        assert_eq!(vec![BookDto::new("Dune", "Herbert", "Science Fiction", 1965)], svc.list_books().expect("should list books"));
    }

    #[test]
    fn test_should_report_missing_book() {
        let mut svc = factory::create_catalog_service(&Configuration::new("test"));
        let req = UpdateBookCommandRequest::new("1984", "Nineteen Eighty-Four", "Orwell", "Dystopian", 1949);
        let res = UpdateBookCommand::new(svc.as_mut()).execute(req).expect("should not fail");
        assert_eq!(None, res.book);
        assert!(svc.list_books().expect("should list books").is_empty());
    }
}

use tracing::{debug, info};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::{BookUpdate, CatalogService};
use crate::core::domain::{Configuration, Identifiable};
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::gateway::events::EventPublisher;

const EVENT_NAME: &str = "books";

pub struct CatalogServiceImpl {
    config: Configuration,
    book_repository: Box<dyn BookRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub fn new(config: &Configuration, book_repository: Box<dyn BookRepository>,
               events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            config: config.clone(),
            book_repository,
            events_publisher,
        }
    }

    fn check_year(&self, year: i32) -> LibraryResult<()> {
        if self.config.accepts_year(year) {
            Ok(())
        } else {
            Err(LibraryError::validation(
                format!("Year must be between {} and {}.", self.config.min_year, self.config.max_year).as_str(),
                Some("year".to_string())))
        }
    }
}

fn require(value: &str, field: &str, message: &str) -> LibraryResult<()> {
    if value.trim().is_empty() {
        Err(LibraryError::validation(message, Some(field.to_string())))
    } else {
        Ok(())
    }
}

impl CatalogService for CatalogServiceImpl {
    fn add_book(&mut self, book: &BookDto) -> LibraryResult<BookDto> {
        for (field, value) in [("title", &book.title), ("author", &book.author), ("genre", &book.genre)] {
            require(value, field, "Please fill in all fields.")?;
        }
        self.check_year(book.year)?;

        // publish before touching the store so a failed publish leaves it unchanged
        self.events_publisher.publish(&DomainEvent::added(EVENT_NAME, book.id().as_str(), book)?)?;
        self.book_repository.create(BookEntity::from(book));
        info!(title = book.title.as_str(), size = self.book_repository.len(), "book added");
        Ok(book.clone())
    }

    fn remove_book(&mut self, title: &str) -> LibraryResult<usize> {
        require(title, "title", "Please enter a title.")?;

        let removed = self.book_repository.delete(title);
        if removed > 0 {
            self.events_publisher.publish(&DomainEvent::deleted(EVENT_NAME, title, &removed)?)?;
            info!(title, removed, "book removed");
        } else {
            debug!(title, "no book to remove");
        }
        Ok(removed)
    }

    fn update_book(&mut self, old_title: &str, update: &BookUpdate) -> LibraryResult<Option<BookDto>> {
        require(old_title, "title", "Please enter the current title of the book.")?;
        if let Some(year) = update.year {
            self.check_year(year)?;
        }

        let replacement = match self.book_repository.get(old_title) {
            Some(current) => {
                let replacement = update.apply(current);
                if update.is_empty() || replacement == *current {
                    debug!(title = old_title, "update leaves book unchanged");
                    return Ok(Some(BookDto::from(current)));
                }
                replacement
            }
            None => {
                debug!(title = old_title, "no book to update");
                return Ok(None);
            }
        };
        let book = BookDto::from(&replacement);
        self.events_publisher.publish(&DomainEvent::updated(EVENT_NAME, old_title, &book)?)?;
        self.book_repository.update(old_title, replacement);
        info!(title = old_title, new_title = book.title.as_str(), "book updated");
        Ok(Some(book))
    }

    fn find_books(&self, term: &str) -> LibraryResult<Vec<BookDto>> {
        require(term, "term", "Please enter a title or author to search for.")?;
        let res: Vec<BookDto> = self.book_repository.search(term).into_iter().map(BookDto::from).collect();
        debug!(term, matches = res.len(), "searched books");
        Ok(res)
    }

    fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        Ok(self.book_repository.list().iter().map(BookDto::from).collect())
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            genre: other.genre.to_string(),
            year: other.year,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            title: other.title.to_string(),
            author: other.author.to_string(),
            genre: other.genre.to_string(),
            year: other.year,
        }
    }
}

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use crate::books::dto::BookDto;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest};
use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest};
use crate::catalog::command::search_books_cmd::{SearchBooksCommand, SearchBooksCommandRequest};
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::core::library::LibraryResult;

/// One line of input in a catalog session
#[derive(Parser, Debug)]
#[command(name = "catalog", no_binary_name = true, disable_version_flag = true)]
struct MenuLine {
    #[command(subcommand)]
    action: MenuAction,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum MenuAction {
    /// Add a new book
    Add {
        title: String,
        author: String,
        genre: String,
        #[arg(allow_negative_numbers = true)]
        year: i32,
    },

    /// Show every book in the library
    #[command(alias = "list")]
    View,

    /// Find books whose title or author contains a term
    Search {
        term: String,
    },

    /// Delete every book with exactly this title
    Delete {
        title: String,
    },

    /// Change the details of the first book with this title; omitted fields keep their value
    Update {
        old_title: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New author
        #[arg(long)]
        author: Option<String>,

        /// New genre
        #[arg(long)]
        genre: Option<String>,

        /// New publication year
        #[arg(long, allow_negative_numbers = true)]
        year: Option<i32>,
    },

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "level", content = "message", rename_all = "lowercase")]
pub enum Notice {
    Success(String),
    Info(String),
    Warning(String),
    Error(String),
}

// Reply is what the session shows the user after an action.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Reply {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<Notice>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub books: Vec<BookDto>,
    #[serde(skip)]
    pub quit: bool,
}

impl Reply {
    pub fn notice(notice: Notice) -> Self {
        Self { notice: Some(notice), ..Default::default() }
    }

    pub fn table(books: Vec<BookDto>) -> Self {
        Self { books, ..Default::default() }
    }

    pub fn quit() -> Self {
        Self { quit: true, ..Default::default() }
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        if !self.books.is_empty() {
            out.push_str(render_table(&self.books).as_str());
        }
        if let Some(notice) = &self.notice {
            let line = match notice {
                Notice::Success(msg) => format!("[ok] {}", msg),
                Notice::Info(msg) => format!("[info] {}", msg),
                Notice::Warning(msg) => format!("[warn] {}", msg),
                Notice::Error(msg) => format!("[error] {}", msg),
            };
            out.push_str(line.as_str());
            out.push('\n');
        }
        out
    }

    pub fn render_json(&self) -> LibraryResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<CommandError> for Reply {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::Validation { message, .. } => {
                Reply::notice(Notice::Error(message))
            }
            CommandError::Serialization { .. } | CommandError::Runtime { .. } => {
                Reply::notice(Notice::Error(format!("Something went wrong: {}", err.message())))
            }
        }
    }
}

/// Splits a line the way a shell would and parses it into a menu action.
/// Blank lines yield `Ok(None)`; anything clap rejects, including `help`,
/// comes back as a ready-made reply.
pub fn parse_line(line: &str) -> Result<Option<MenuAction>, Reply> {
    let tokens = shell_words::split(line)
        .map_err(|e| Reply::notice(Notice::Error(format!("Could not read that line: {}", e))))?;
    if tokens.is_empty() {
        return Ok(None);
    }
    match MenuLine::try_parse_from(tokens) {
        Ok(menu) => Ok(Some(menu.action)),
        Err(err) => {
            let text = err.render().to_string();
            match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                    Err(Reply::notice(Notice::Info(text.trim_end().to_string())))
                }
                _ => Err(Reply::notice(Notice::Error(text.trim_end().to_string()))),
            }
        }
    }
}

pub fn dispatch(svc: &mut dyn CatalogService, action: MenuAction) -> Reply {
    debug!(?action, "dispatching");
    let res = match action {
        MenuAction::Add { title, author, genre, year } => {
            AddBookCommand::new(svc)
                .execute(AddBookCommandRequest::new(&title, &author, &genre, year))
                .map(|_| Reply::notice(Notice::Success("Book added successfully!".to_string())))
        }
        MenuAction::View => {
            ListBooksCommand::new(svc)
                .execute(ListBooksCommandRequest::default())
                .map(|res| if res.books.is_empty() {
                    Reply::notice(Notice::Info("Your library is empty. Add some books!".to_string()))
                } else {
                    Reply::table(res.books)
                })
        }
        MenuAction::Search { term } => {
            SearchBooksCommand::new(svc)
                .execute(SearchBooksCommandRequest::new(&term))
                .map(|res| if res.books.is_empty() {
                    Reply::notice(Notice::Warning("No books found matching your search.".to_string()))
                } else {
                    Reply::table(res.books)
                })
        }
        MenuAction::Delete { title } => {
            RemoveBookCommand::new(svc)
                .execute(RemoveBookCommandRequest::new(&title))
                .map(|res| if res.removed == 0 {
                    Reply::notice(Notice::Info(format!("No book titled \"{}\"; nothing was deleted.", title)))
                } else {
                    Reply::notice(Notice::Success("Book deleted successfully!".to_string()))
                })
        }
        MenuAction::Update { old_title, title, author, genre, year } => {
            let req = UpdateBookCommandRequest { old_title: old_title.clone(), title, author, genre, year };
            let no_changes = req.build_update().is_empty();
            UpdateBookCommand::new(svc)
                .execute(req)
                .map(|res| match res.book {
                    Some(_) if no_changes => Reply::notice(Notice::Info(format!("No new details for \"{}\"; nothing was updated.", old_title))),
                    Some(_) => Reply::notice(Notice::Success("Book updated successfully!".to_string())),
                    None => Reply::notice(Notice::Info(format!("No book titled \"{}\"; nothing was updated.", old_title))),
                })
        }
        MenuAction::Quit => Ok(Reply::quit()),
    };
    res.unwrap_or_else(Reply::from)
}

fn render_table(books: &[BookDto]) -> String {
    let headers = ["Title", "Author", "Genre", "Year"];
    let rows: Vec<[String; 4]> = books.iter()
        .map(|b| [b.title.clone(), b.author.clone(), b.genre.clone(), b.year.to_string()])
        .collect();
    let mut widths = headers.map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let format_row = |cells: [&str; 4]| -> String {
        let padded: Vec<String> = cells.iter().zip(widths.iter())
            .map(|(cell, w)| format!("{:<width$}", cell, width = *w))
            .collect();
        format!("{}\n", padded.join(" | ").trim_end())
    };

    let mut out = format_row(headers);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    out.push_str(format!("{}\n", rule.join("-+-")).as_str());
    for row in &rows {
        out.push_str(format_row([row[0].as_str(), row[1].as_str(), row[2].as_str(), row[3].as_str()]).as_str());
    }
    out
}

//! # Commands
//!
//! Deferred operations against the [`Catalog`]. A command is built with its
//! inputs, executed, and discarded.
//!
//! Every command declares [`Command::undo`], but no command can revert yet:
//! searches leave nothing to roll back, so undo reports
//! [`CommandError::UndoUnsupported`] instead of silently succeeding.

use biblio_common::book::Book;
use biblio_common::error::CommandError;
use tracing::trace;

use crate::catalog::Catalog;

pub trait Command {
    type Output;

    fn execute(&mut self) -> Self::Output;

    fn undo(&mut self) -> Result<(), CommandError>;
}

/// Result of a title search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Found { title: String, author: String },
    NotFound { query: String },
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found { .. })
    }

    /// Matched base title, or the query when nothing matched.
    pub fn title(&self) -> &str {
        match self {
            SearchOutcome::Found { title, .. } => title,
            SearchOutcome::NotFound { query } => query,
        }
    }

    pub fn author(&self) -> Option<&str> {
        match self {
            SearchOutcome::Found { author, .. } => Some(author),
            SearchOutcome::NotFound { .. } => None,
        }
    }
}

pub struct SearchBookCommand<'a> {
    title: String,
    catalog: &'a Catalog,
}

impl<'a> SearchBookCommand<'a> {
    pub fn new(title: impl Into<String>, catalog: &'a Catalog) -> Self {
        Self {
            title: title.into(),
            catalog,
        }
    }
}

impl Command for SearchBookCommand<'_> {
    type Output = SearchOutcome;

    fn execute(&mut self) -> SearchOutcome {
        match self.catalog.find_by_title(&self.title) {
            Some(book) => found(book),
            None => SearchOutcome::NotFound {
                query: self.title.clone(),
            },
        }
    }

    fn undo(&mut self) -> Result<(), CommandError> {
        trace!(query = %self.title, "Undo requested for search");
        Err(CommandError::UndoUnsupported { command: "search" })
    }
}

fn found(book: &Book) -> SearchOutcome {
    SearchOutcome::Found {
        title: book.title().to_string(),
        author: book.author().to_string(),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

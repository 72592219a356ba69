//! # Book Model
//!
//! A [`Book`] is either a plain title/author record or a decorated value that
//! wraps exactly one inner book. Decorations only change the rendered
//! description; identity fields are always read from the innermost record.
//!
//! ```
//! use biblio_common::book::{self, Book};
//!
//! let book: Book = book::create_book("Dune", "Herbert").unwrap();
//! let book: Book = book::wrap_popular(book);
//! assert_eq!(book.title(), "Dune");
//! assert_eq!(book.description(), "Dune by Herbert (Popular)");
//! ```

use std::fmt;

use crate::error::BookError;

/// Descriptive attribute appended to a book's description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decoration {
    Popular,
    Recommended,
    Promotion,
}

impl Decoration {
    /// Every kind, in the order the shell asks about them.
    pub const ALL: [Decoration; 3] = [
        Decoration::Popular,
        Decoration::Recommended,
        Decoration::Promotion,
    ];

    pub fn suffix(&self) -> &'static str {
        match self {
            Decoration::Popular => " (Popular)",
            Decoration::Recommended => " - [Recomandată]",
            Decoration::Promotion => " - [Carte in promotie]",
        }
    }

    /// Wraps `inner` in this decoration.
    pub fn wrap(self, inner: Book) -> Book {
        Book::Decorated {
            kind: self,
            inner: Box::new(inner),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Book {
    Base { title: String, author: String },
    Decorated { kind: Decoration, inner: Box<Book> },
}

impl Book {
    /// Title of the innermost record. Never decorated.
    pub fn title(&self) -> &str {
        match self {
            Book::Base { title, .. } => title,
            Book::Decorated { inner, .. } => inner.title(),
        }
    }

    /// Author of the innermost record.
    pub fn author(&self) -> &str {
        match self {
            Book::Base { author, .. } => author,
            Book::Decorated { inner, .. } => inner.author(),
        }
    }

    /// Renders `"{title} by {author}"` followed by every decoration suffix, inner to outer.
    pub fn description(&self) -> String {
        match self {
            Book::Base { title, author } => format!("{title} by {author}"),
            Book::Decorated { kind, inner } => {
                let mut description: String = inner.description();
                description.push_str(kind.suffix());
                description
            }
        }
    }

    /// Decorations applied to this book, inner to outer.
    pub fn decorations(&self) -> Vec<Decoration> {
        let mut kinds: Vec<Decoration> = Vec::new();
        let mut current: &Book = self;
        while let Book::Decorated { kind, inner } = current {
            kinds.push(*kind);
            current = inner;
        }
        kinds.reverse();
        kinds
    }

    pub fn is_decorated(&self) -> bool {
        matches!(self, Book::Decorated { .. })
    }

    /// Case-insensitive comparison against the base title.
    pub fn title_matches(&self, query: &str) -> bool {
        self.title().to_lowercase() == query.to_lowercase()
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

/// Builds an undecorated book.
///
/// Blank (empty or whitespace-only) fields are rejected; anything else is stored verbatim.
pub fn create_book(title: &str, author: &str) -> Result<Book, BookError> {
    if title.trim().is_empty() {
        return Err(BookError::EmptyField { field: "title" });
    }
    if author.trim().is_empty() {
        return Err(BookError::EmptyField { field: "author" });
    }
    Ok(Book::Base {
        title: title.to_string(),
        author: author.to_string(),
    })
}

pub fn wrap_popular(book: Book) -> Book {
    Decoration::Popular.wrap(book)
}

pub fn wrap_recommended(book: Book) -> Book {
    Decoration::Recommended.wrap(book)
}

pub fn wrap_promotion(book: Book) -> Book {
    Decoration::Promotion.wrap(book)
}

/// Applies `kinds` in slice order, so the first entry ends up innermost.
pub fn decorate(book: Book, kinds: &[Decoration]) -> Book {
    kinds.iter().fold(book, |book, kind| kind.wrap(book))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

//! # Catalog Store
//!
//! The ordered collection of every book known to the running process.
//!
//! Entries keep insertion order and titles are not unique. Lookups and
//! removals act on the **first** entry whose base title matches the query
//! case-insensitively, so later duplicates stay hidden until the earlier
//! ones are removed.
//!
//! Iterators borrow the catalog, which keeps it from being mutated while a
//! listing is in progress. Take a [`Catalog::snapshot`] when a caller needs
//! to walk the entries and mutate the store in the same pass.

use biblio_common::book::Book;
use tracing::debug;

#[derive(Debug, Default, Clone)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `book` to the end of the catalog.
    pub fn add(&mut self, book: Book) {
        debug!(title = book.title(), "Adding book to catalog");
        self.books.push(book);
    }

    /// Removes the first entry sharing `book`'s title. Returns `false` if nothing matched.
    pub fn remove(&mut self, book: &Book) -> bool {
        self.remove_by_title(book.title())
    }

    /// Removes the first entry whose title matches `title`, ignoring case.
    pub fn remove_by_title(&mut self, title: &str) -> bool {
        self.take_by_title(title).is_some()
    }

    /// Like [`Catalog::remove_by_title`] but hands the removed entry back.
    pub fn take_by_title(&mut self, title: &str) -> Option<Book> {
        let idx: usize = self.position(title)?;
        let book: Book = self.books.remove(idx);
        debug!(title = book.title(), "Removed book from catalog");
        Some(book)
    }

    pub fn find_by_title(&self, title: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.title_matches(title))
    }

    /// Rendered descriptions in insertion order. Each call starts a fresh pass.
    pub fn list(&self) -> impl Iterator<Item = String> + '_ {
        self.books.iter().map(Book::description)
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Detached copy of the current entries.
    pub fn snapshot(&self) -> Vec<Book> {
        self.books.clone()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    fn position(&self, title: &str) -> Option<usize> {
        self.books.iter().position(|book| book.title_matches(title))
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

#[cfg(test)]
mod tests {
    use super::*;
    use biblio_common::book::{create_book, wrap_popular};

    fn book(title: &str, author: &str) -> Book {
        create_book(title, author).unwrap()
    }

    #[test]
    fn test_add_appends_description_last() {
        let mut catalog = Catalog::new();
        catalog.add(book("Ion", "Rebreanu"));
        let before = catalog.list().count();

        let dune = wrap_popular(book("Dune", "Herbert"));
        let expected = dune.description();
        catalog.add(dune);

        let listed: Vec<String> = catalog.list().collect();
        assert_eq!(listed.len(), before + 1);
        assert_eq!(listed.last(), Some(&expected));
    }

    #[test]
    fn test_remove_missing_on_empty() {
        let mut catalog = Catalog::new();
        assert!(!catalog.remove_by_title("X"));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_remove_missing_keeps_state() {
        let mut catalog = Catalog::new();
        catalog.add(book("Dune", "Herbert"));
        let before: Vec<String> = catalog.list().collect();

        assert!(!catalog.remove_by_title("X"));
        assert_eq!(catalog.list().collect::<Vec<_>>(), before);
    }

    #[test]
    fn test_remove_ignores_case() {
        let mut catalog = Catalog::new();
        catalog.add(book("Dune", "Herbert"));
        assert!(catalog.remove_by_title("dune"));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_remove_hits_first_duplicate_only() {
        let mut catalog = Catalog::new();
        catalog.add(book("Dune", "Herbert"));
        catalog.add(book("Ion", "Rebreanu"));
        catalog.add(book("DUNE", "Anderson"));

        let removed = catalog.take_by_title("dune").unwrap();
        assert_eq!(removed.author(), "Herbert");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find_by_title("Dune").map(Book::author), Some("Anderson"));
    }

    #[test]
    fn test_remove_by_book_uses_base_title() {
        let mut catalog = Catalog::new();
        let decorated = wrap_popular(book("Dune", "Herbert"));
        catalog.add(decorated.clone());

        assert!(catalog.remove(&decorated));
        assert!(!catalog.remove(&decorated));
    }

    #[test]
    fn test_find_does_not_mutate() {
        let mut catalog = Catalog::new();
        catalog.add(wrap_popular(book("Dune", "Herbert")));

        let found = catalog.find_by_title("dUNE").unwrap();
        assert_eq!(found.title(), "Dune");
        assert_eq!(found.author(), "Herbert");
        assert!(catalog.find_by_title("Dune (Popular)").is_none());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_list_is_restartable() {
        let mut catalog = Catalog::new();
        catalog.add(book("Dune", "Herbert"));
        catalog.add(book("Ion", "Rebreanu"));

        let first: Vec<String> = catalog.list().collect();
        let second: Vec<String> = catalog.list().collect();
        assert_eq!(first, second);
        assert_eq!(first, vec!["Dune by Herbert", "Ion by Rebreanu"]);
    }

    #[test]
    fn test_snapshot_allows_removal_while_walking() {
        let mut catalog = Catalog::new();
        catalog.add(book("Dune", "Herbert"));
        catalog.add(book("Ion", "Rebreanu"));

        for entry in catalog.snapshot() {
            assert!(catalog.remove(&entry));
        }
        assert!(catalog.is_empty());
    }
}

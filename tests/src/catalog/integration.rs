#![cfg(test)]
use biblio_common::book::{self, Book, Decoration};
use biblio_common::config::Config;
use biblio_common::error::{BookError, CommandError};
use biblio_core::catalog::Catalog;
use biblio_core::command::{Command, SearchBookCommand, SearchOutcome};
use biblio_core::library::Library;

fn base(title: &str, author: &str) -> Book {
    book::create_book(title, author).expect("valid book")
}

/// Decorating a book in the shell's order yields every suffix, inner to outer.
#[test]
fn full_decoration_chain() {
    let decorated: Book = book::wrap_promotion(book::wrap_recommended(book::wrap_popular(base("T", "A"))));

    assert_eq!(
        decorated.description(),
        "T by A (Popular) - [Recomandată] - [Carte in promotie]"
    );
    assert_eq!(decorated.title(), "T");
    assert_eq!(decorated, book::decorate(base("T", "A"), &Decoration::ALL));
}

#[test]
fn popular_wrap_preserves_title_for_any_book() {
    for (title, author) in [("Dune", "Herbert"), ("Ion", "Rebreanu"), ("Țară", "Ă")] {
        let plain: Book = base(title, author);
        let popular: Book = book::wrap_popular(plain.clone());
        assert_eq!(popular.title(), plain.title());
        assert_eq!(popular.description(), plain.description() + " (Popular)");
    }
}

#[test]
fn add_then_list_ends_with_new_entry() {
    let mut catalog = Catalog::new();
    catalog.add(base("Ion", "Rebreanu"));
    let before: usize = catalog.list().count();

    let entry: Book = book::wrap_recommended(base("Dune", "Herbert"));
    let description: String = entry.description();
    catalog.add(entry);

    let listed: Vec<String> = catalog.list().collect();
    assert_eq!(listed.len(), before + 1, "list grew by more than one entry");
    assert_eq!(listed.last(), Some(&description));
    assert_eq!(listed, catalog.list().collect::<Vec<_>>(), "list is not repeatable");
}

#[test]
fn remove_missing_title_is_not_found() {
    let mut catalog = Catalog::new();
    assert!(!catalog.remove_by_title("X"));

    catalog.add(base("Dune", "Herbert"));
    assert!(!catalog.remove_by_title("X"));
    assert_eq!(catalog.len(), 1);
}

#[test]
fn remove_is_case_insensitive() {
    let mut catalog = Catalog::new();
    catalog.add(base("Dune", "Herbert"));
    assert!(catalog.remove_by_title("dune"));
    assert!(catalog.is_empty());
}

#[test]
fn search_command_reports_found_and_missing() {
    let mut catalog = Catalog::new();
    catalog.add(book::wrap_popular(base("Dune", "Herbert")));

    let found: SearchOutcome = SearchBookCommand::new("Dune", &catalog).execute();
    assert_eq!(
        found,
        SearchOutcome::Found {
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
        }
    );

    let mut missing = SearchBookCommand::new("Nope", &catalog);
    assert!(!missing.execute().is_found());
    assert_eq!(
        missing.undo(),
        Err(CommandError::UndoUnsupported { command: "search" })
    );
}

/// Blank fields are rejected rather than stored.
#[test]
fn blank_fields_are_rejected() {
    assert_eq!(
        book::create_book("", "A"),
        Err(BookError::EmptyField { field: "title" })
    );
    assert_eq!(
        book::create_book("T", " \t"),
        Err(BookError::EmptyField { field: "author" })
    );
}

#[test]
fn library_session_end_to_end() {
    let mut library = Library::with_stock_users(&Config::default());
    library.add_book(book::wrap_promotion(base("Dune", "Herbert")));
    library.add_book(base("Dune", "Anderson"));

    assert_eq!(
        library.descriptions(),
        vec!["Dune by Herbert - [Carte in promotie]", "Dune by Anderson"]
    );
    assert_eq!(library.search("DUNE").author(), Some("Herbert"));

    assert!(library.remove_book("dune"));
    assert_eq!(library.search("dune").author(), Some("Anderson"));
}

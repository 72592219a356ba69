//! # Library Service
//!
//! Composition root for a run: owns the one [`Catalog`] and the one
//! [`Notifier`] and wires them together.
//!
//! Adding a book appends it to the catalog and then broadcasts the configured
//! notice. Every other operation goes straight to the catalog.

use biblio_common::book::Book;
use biblio_common::config::Config;
use biblio_common::notify::{Notifier, NotifyReport, Observer};

use crate::catalog::Catalog;
use crate::command::{Command, SearchBookCommand, SearchOutcome};
use crate::subscribers;

pub struct Library {
    catalog: Catalog,
    notifier: Notifier,
    notice: String,
}

impl Library {
    /// Empty library. Subscribers from `cfg` are not registered; see [`Library::with_stock_users`].
    pub fn new(cfg: &Config) -> Self {
        Self {
            catalog: Catalog::new(),
            notifier: Notifier::new(),
            notice: cfg.notice.clone(),
        }
    }

    /// Empty library with `cfg.subscribers` stock [`subscribers::LibraryUser`]s subscribed.
    pub fn with_stock_users(cfg: &Config) -> Self {
        let mut library = Self::new(cfg);
        for user in subscribers::stock_users(cfg.subscribers) {
            library.subscribe(Box::new(user));
        }
        library
    }

    pub fn subscribe(&mut self, observer: Box<dyn Observer>) {
        self.notifier.subscribe(observer);
    }

    /// Stores `book`, then tells every subscriber about it.
    pub fn add_book(&mut self, book: Book) -> NotifyReport {
        self.catalog.add(book);
        self.notifier.notify(&self.notice)
    }

    pub fn remove_book(&mut self, title: &str) -> bool {
        self.catalog.remove_by_title(title)
    }

    pub fn search(&self, title: &str) -> SearchOutcome {
        SearchBookCommand::new(title, &self.catalog).execute()
    }

    pub fn descriptions(&self) -> Vec<String> {
        self.catalog.list().collect()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn subscriber_count(&self) -> usize {
        self.notifier.len()
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

//! # Biblio Core
//!
//! The catalog engine behind the `biblio` shell.
//!
//! ## Architecture Overview
//! * **[`catalog`]**: the ordered book store and its queries.
//! * **[`command`]**: deferred operations against the store (title search).
//! * **[`subscribers`]**: stock observers that react to notifications.
//! * **[`library`]**: the service that owns one catalog and one notifier per run.
//!
//! The book model and the notifier itself live in `biblio_common` so that
//! adapters can depend on them without pulling in the store.

pub mod catalog;
pub mod command;
pub mod library;
pub mod subscribers;

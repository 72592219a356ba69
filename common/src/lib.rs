//! # Biblio Common
//!
//! Shared vocabulary of the `biblio` workspace: the book model and its
//! decorator chain, the notification primitives, configuration and errors.
//!
//! ## Contents
//! * **[`book`]**: [`book::Book`] and the [`book::Decoration`] kinds.
//! * **[`notify`]**: the [`notify::Observer`] trait and the [`notify::Notifier`] fan-out.
//! * **[`config`]**: runtime settings filled in by the CLI.
//! * **[`error`]**: typed errors shared by every layer.

pub mod book;
pub mod config;
pub mod error;
pub mod notify;

/// Reports a completed user action. Rendered with a success marker by the CLI formatter.
#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "biblio::success", $($arg)*)
    };
}

/// Reports a message delivered to a subscriber.
#[macro_export]
macro_rules! notice {
    ($($arg:tt)*) => {
        ::tracing::info!(target: "biblio::notice", $($arg)*)
    };
}

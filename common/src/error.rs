use thiserror::Error;

/// Rejections raised while building a [`crate::book::Book`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookError {
    #[error("book {field} must not be empty")]
    EmptyField { field: &'static str },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    /// Commands declare undo but none of them can revert yet.
    #[error("'{command}' cannot be undone")]
    UndoUnsupported { command: &'static str },
}

//! End-to-end checks of the public `biblio` API.

#[cfg(test)]
mod catalog;
#[cfg(test)]
mod notify;

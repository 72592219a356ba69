use biblio_common::notice;
use biblio_common::notify::Observer;

/// A library member who wants to hear about new arrivals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryUser {
    name: String,
}

impl LibraryUser {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Observer for LibraryUser {
    fn update(&self, message: &str) -> anyhow::Result<()> {
        notice!(member = %self.name, "Notificare: {message}");
        Ok(())
    }
}

/// Stock members `user1..=user{count}`.
pub fn stock_users(count: usize) -> Vec<LibraryUser> {
    (1..=count)
        .map(|idx| LibraryUser::new(format!("user{idx}")))
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

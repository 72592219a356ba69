pub mod demo;
pub mod menu;

use biblio_common::config::{Config, DEFAULT_NOTICE, DEFAULT_SUBSCRIBERS};
use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "biblio")]
#[command(about = "A tiny in-memory library catalog.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Do not print the banner on startup
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Print less output (-q hides headers, -qq also hides notifications)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Number of library users subscribed to new-book notifications
    #[arg(long, global = true, default_value_t = DEFAULT_SUBSCRIBERS)]
    pub subscribers: usize,

    /// Message broadcast to subscribers when a book is added
    #[arg(long, global = true, default_value = DEFAULT_NOTICE)]
    pub notice: String,
}

#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Manage the catalog through the interactive menu (default)
    #[command(alias = "m")]
    Menu,
    /// Fill the catalog with sample books and print it
    #[command(alias = "d")]
    Demo,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            no_banner: self.no_banner,
            quiet: self.quiet,
            subscribers: self.subscribers,
            notice: self.notice.clone(),
        }
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

use biblio_common::book::{self, Decoration};
use biblio_common::config::Config;
use biblio_core::library::Library;

use crate::commands::menu;
use crate::terminal::print;

const SAMPLE_BOOKS: &[(&str, &str, &[Decoration])] = &[
    ("Dune", "Frank Herbert", &[Decoration::Popular]),
    ("Ion", "Liviu Rebreanu", &[Decoration::Recommended, Decoration::Promotion]),
    ("Enigma Otiliei", "George Călinescu", &[]),
    ("Solaris", "Stanisław Lem", &Decoration::ALL),
];

pub fn demo(library: &mut Library, cfg: &Config) -> anyhow::Result<()> {
    seed(library)?;

    print::header("catalog", cfg.quiet);
    menu::list_books(library, cfg);

    print::header("search: dune", cfg.quiet);
    menu::report_search(&library.search("dune"));

    print::end_of_program();
    Ok(())
}

fn seed(library: &mut Library) -> anyhow::Result<()> {
    for (title, author, kinds) in SAMPLE_BOOKS {
        let base = book::create_book(title, author)?;
        library.add_book(book::decorate(base, kinds));
    }
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

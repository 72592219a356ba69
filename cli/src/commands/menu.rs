use std::io::BufRead;

use biblio_common::book::{self, Book, Decoration};
use biblio_common::config::Config;
use biblio_common::success;
use biblio_core::command::SearchOutcome;
use biblio_core::library::Library;
use colored::*;
use tracing::warn;

use crate::input;
use crate::terminal::{colors, print};

type Detail = (String, ColoredString);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Add,
    List,
    Remove,
    Search,
    Exit,
}

impl MenuChoice {
    const ALL: [MenuChoice; 5] = [
        MenuChoice::Add,
        MenuChoice::List,
        MenuChoice::Remove,
        MenuChoice::Search,
        MenuChoice::Exit,
    ];

    fn key(self) -> char {
        match self {
            MenuChoice::Add => '1',
            MenuChoice::List => '2',
            MenuChoice::Remove => '3',
            MenuChoice::Search => '4',
            MenuChoice::Exit => '5',
        }
    }

    fn label(self) -> &'static str {
        match self {
            MenuChoice::Add => "Adauga carte",
            MenuChoice::List => "Vizualizeaza cartile",
            MenuChoice::Remove => "Sterge o carte",
            MenuChoice::Search => "Cauta o carte",
            MenuChoice::Exit => "Iesire",
        }
    }

    fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL
            .into_iter()
            .find(|choice| input.len() == 1 && input.starts_with(choice.key()))
    }
}

fn decoration_question(kind: Decoration) -> &'static str {
    match kind {
        Decoration::Popular => "Este cartea populara? (da/nu)",
        Decoration::Recommended => "Este cartea recomandata? (da/nu)",
        Decoration::Promotion => "Este cartea la promotie? (da/nu)",
    }
}

/// Runs the interactive loop until the user exits or `input` runs dry.
pub fn menu<R: BufRead>(library: &mut Library, mut input: R, cfg: &Config) -> anyhow::Result<()> {
    loop {
        print_options(cfg);
        let Some(choice) = input::ask(&mut input, "Introdu optiunea dorita:")? else {
            break;
        };

        match MenuChoice::parse(&choice) {
            Some(MenuChoice::Add) => add_book(library, &mut input)?,
            Some(MenuChoice::List) => list_books(library, cfg),
            Some(MenuChoice::Remove) => remove_book(library, &mut input)?,
            Some(MenuChoice::Search) => search_book(library, &mut input)?,
            Some(MenuChoice::Exit) => break,
            None => warn!("Opțiune invalidă. Încearcă din nou."),
        }
    }

    print::end_of_program();
    Ok(())
}

fn print_options(cfg: &Config) {
    if cfg.quiet > 1 {
        return;
    }
    for choice in MenuChoice::ALL {
        print::menu_option(choice.key(), choice.label());
    }
}

fn add_book<R: BufRead>(library: &mut Library, input: &mut R) -> anyhow::Result<()> {
    let Some(title) = input::ask(input, "Introdu titlul cărții:")? else {
        return Ok(());
    };
    let Some(author) = input::ask(input, "Introdu autorul cărții:")? else {
        return Ok(());
    };

    let base: Book = match book::create_book(&title, &author) {
        Ok(base) => base,
        Err(e) => {
            warn!("Cartea nu a fost adăugată: {e}");
            return Ok(());
        }
    };

    let mut kinds: Vec<Decoration> = Vec::new();
    for kind in Decoration::ALL {
        let Some(answer) = input::ask(input, decoration_question(kind))? else {
            return Ok(());
        };
        if input::is_yes(&answer) {
            kinds.push(kind);
        }
    }

    library.add_book(book::decorate(base, &kinds));
    success!("Cartea a fost adăugată cu succes.");
    Ok(())
}

pub fn list_books(library: &Library, cfg: &Config) {
    if library.catalog().is_empty() {
        print::no_results();
        return;
    }

    for (idx, description) in library.catalog().list().enumerate() {
        print::tree_head(idx, &description);
    }

    if cfg.quiet == 0 {
        print::fat_separator();
        let count: ColoredString = format!("{} cărți", library.catalog().len()).bold().green();
        print::centerln(&format!("{}", format!("În catalog: {count}").color(colors::TEXT_DEFAULT)));
    }
}

fn remove_book<R: BufRead>(library: &mut Library, input: &mut R) -> anyhow::Result<()> {
    let Some(title) = input::ask(input, "Introdu titlul cărții pe care dorești să o ștergi:")? else {
        return Ok(());
    };

    if library.remove_book(&title) {
        success!("Cartea a fost ștearsă cu succes.");
    } else {
        warn!("Cartea nu a fost găsită.");
    }
    Ok(())
}

fn search_book<R: BufRead>(library: &Library, input: &mut R) -> anyhow::Result<()> {
    let Some(title) = input::ask(input, "Introdu titlul cartii:")? else {
        return Ok(());
    };
    report_search(&library.search(&title));
    Ok(())
}

pub fn report_search(outcome: &SearchOutcome) {
    match outcome {
        SearchOutcome::Found { title, author } => {
            success!("Carte găsită: {title} de {author}");
            print::as_tree_one_level(search_details(title, author));
        }
        SearchOutcome::NotFound { .. } => warn!("Carte ne găsită."),
    }
}

fn search_details(title: &str, author: &str) -> Vec<Detail> {
    vec![
        ("Titlu".to_string(), title.color(colors::PRIMARY)),
        ("Autor".to_string(), author.color(colors::SECONDARY)),
    ]
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

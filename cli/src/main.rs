mod commands;
mod input;
mod terminal;

use biblio_core::library::Library;
use commands::{CommandLine, Commands, demo, menu};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.to_config();

    logging::init_logging(cfg.quiet)?;
    print::banner(cfg.no_banner, cfg.quiet);

    let mut library = Library::with_stock_users(&cfg);

    match commands.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            print::header("biblioteca", cfg.quiet);
            menu::menu(&mut library, std::io::stdin().lock(), &cfg)
        }
        Commands::Demo => {
            print::header("demo catalog", cfg.quiet);
            demo::demo(&mut library, &cfg)
        }
    }
}

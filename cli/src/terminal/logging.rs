use std::fmt::Debug;

use colored::*;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

use crate::terminal::colors;

pub const PRINT_TARGET: &str = "biblio::print";
const SUCCESS_TARGET: &str = "biblio::success";
const NOTICE_TARGET: &str = "biblio::notice";
const LOG_ENV: &str = "BIBLIO_LOG";

pub struct BiblioFormatter;

impl<S, N> FormatEvent<S, N> for BiblioFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        if meta.target() == PRINT_TARGET {
            let mut raw = RawMessage::default();
            event.record(&mut raw);
            return writeln!(writer, "{}", raw.0.unwrap_or_default());
        }

        let (symbol, color_func) = marker(meta.target(), *meta.level());

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

type Paint = fn(ColoredString) -> ColoredString;

fn marker(target: &str, level: Level) -> (&'static str, Paint) {
    match (target, level) {
        (SUCCESS_TARGET, _) => ("[✓]", |s| s.green().bold()),
        (NOTICE_TARGET, _) => ("[!]", |s| s.color(colors::NOTICE).bold()),
        (_, Level::TRACE) => ("[ ]", |s| s.dimmed()),
        (_, Level::DEBUG) => ("[?]", |s| s.blue()),
        (_, Level::INFO) => ("[+]", |s| s.green().bold()),
        (_, Level::WARN) => ("[*]", |s| s.yellow().bold()),
        (_, Level::ERROR) => ("[-]", |s| s.red().bold()),
    }
}

/// Pulls the `raw_msg` field out of a print event.
#[derive(Default)]
struct RawMessage(Option<String>);

impl Visit for RawMessage {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "raw_msg" {
            self.0 = Some(value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        if field.name() == "raw_msg" {
            self.0 = Some(format!("{value:?}"));
        }
    }
}

/// Default directives for a quiet level. `BIBLIO_LOG` overrides them.
fn default_directives(quiet: u8) -> &'static str {
    match quiet {
        0 | 1 => "info",
        _ => "info,biblio::notice=off",
    }
}

pub fn init_logging(quiet: u8) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directives(quiet)));

    tracing_subscriber::fmt()
        .event_format(BiblioFormatter)
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

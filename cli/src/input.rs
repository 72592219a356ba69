use std::io::BufRead;

use anyhow::Context;

use crate::terminal::print;

/// Reads one line without its line ending. `None` once the input is exhausted.
pub fn read_line<R: BufRead>(input: &mut R) -> anyhow::Result<Option<String>> {
    let mut buf = String::new();
    let read: usize = input
        .read_line(&mut buf)
        .context("failed to read from input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim_end_matches(['\r', '\n']).to_string()))
}

/// Prints `prompt`, then reads the answer.
pub fn ask<R: BufRead>(input: &mut R, prompt: &str) -> anyhow::Result<Option<String>> {
    print::print_status(prompt);
    read_line(input)
}

/// `da` (any case, surrounding blanks ignored) is yes; everything else is no.
pub fn is_yes(answer: &str) -> bool {
    answer.trim().to_lowercase() == "da"
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

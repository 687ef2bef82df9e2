//! Interactive week prompt used when `--week` is not given.

use std::io::{BufRead, Write};

use super::types::Week;

pub const WEEK_PROMPT: &str = "Enter NFL scoring week (1-18): ";

/// Ask for a scoring week on `output` and read the answer from `input`.
///
/// Anything that is not a week number (including a read failure or EOF)
/// yields `None`, meaning "let Yahoo use the current week".
pub fn prompt_for_week<R: BufRead, W: Write>(mut input: R, mut output: W) -> Option<Week> {
    write!(output, "{WEEK_PROMPT}").ok()?;
    output.flush().ok()?;

    let mut line = String::new();
    input.read_line(&mut line).ok()?;
    line.trim().parse::<Week>().ok()
}

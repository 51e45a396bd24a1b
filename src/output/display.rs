//! Display functions for command results

use super::formatters::{letter_badge, outcome_line, plural};
use crate::commands::CheckResult;
use crate::core::ValidationOutcome;
use crate::game::GameSession;
use colored::Colorize;
use std::io::{self, Write};

/// Write a single submission outcome
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_outcome<W: Write>(
    out: &mut W,
    word: &str,
    outcome: ValidationOutcome,
    root: &str,
) -> io::Result<()> {
    let line = outcome_line(word, outcome, root);
    if outcome.is_accepted() {
        writeln!(out, "{}", line.green().bold())
    } else {
        writeln!(out, "{}", line.red())
    }
}

/// Write the root word banner for a new round
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_round_banner<W: Write>(out: &mut W, root: &str) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "Root word: {}",
        root.to_uppercase().bright_yellow().bold()
    )?;
    writeln!(out, "{}", "─".repeat(60).cyan())
}

/// Write the words found this round with their letter counts
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_round_summary<W: Write, D>(out: &mut W, session: &GameSession<D>) -> io::Result<()> {
    writeln!(
        out,
        "\n📊 {} from {}: {}",
        "Round summary".bright_cyan().bold(),
        session.root_word().text().to_uppercase().bright_yellow(),
        format!(
            "{}, {}",
            plural(session.len(), "word"),
            plural(session.letter_count(), "letter")
        )
        .bright_white()
    )?;

    for word in session.accepted_words() {
        writeln!(out, "   {} {word}", letter_badge(word.chars().count()))?;
    }
    Ok(())
}

/// Print the result of checking a batch of words
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn print_check_result(result: &CheckResult) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_check_result(&mut out, result)
}

/// Write the result of checking a batch of words
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_check_result<W: Write>(out: &mut W, result: &CheckResult) -> io::Result<()> {
    write_round_banner(out, result.root.text())?;

    for row in &result.rows {
        match row.outcome {
            Some(outcome) => write_outcome(out, &row.word, outcome, result.root.text())?,
            None => writeln!(out, "{}", "· (empty, ignored)".bright_black())?,
        }
    }

    writeln!(
        out,
        "\n{}",
        format!(
            "{} of {} accepted",
            result.accepted_count(),
            plural(result.rows.len(), "word")
        )
        .bold()
    )
}

//! Simple interactive CLI mode
//!
//! Line-based game without TUI

use crate::core::{ValidationOutcome, normalize};
use crate::dictionary::SpellChecker;
use crate::game::GameSession;
use crate::output::{write_outcome, write_round_banner, write_round_summary};
use anyhow::Result;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing output.
pub fn run_simple<D: SpellChecker, S: AsRef<str>>(
    session: &mut GameSession<D>,
    candidates: &[S],
) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_lines(session, candidates, stdin.lock(), stdout.lock())
}

/// Play a game reading one submission per line from `input`
///
/// Lines starting with `:` are commands: `:new` starts a new round,
/// `:words` lists the words found so far, `:quit` ends the game.
/// Everything else is submitted as a word.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `out` fails.
pub fn play_lines<D, S, R, W>(
    session: &mut GameSession<D>,
    candidates: &[S],
    input: R,
    mut out: W,
) -> Result<()>
where
    D: SpellChecker,
    S: AsRef<str>,
    R: BufRead,
    W: Write,
{
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                 Word Scramble - Simple Mode                  ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(out, "Find words made from the letters of the root word.")?;
    writeln!(out, "Commands: ':new' for a new root word, ':words' to list, ':quit' to exit\n")?;

    session.start_new_round(candidates);
    write_round_banner(&mut out, session.root_word().text())?;
    prompt(&mut out)?;

    for line in input.lines() {
        let line = line?;

        match line.trim() {
            ":quit" | ":q" | ":exit" => break,
            ":new" | ":n" => {
                write_round_summary(&mut out, session)?;
                session.start_new_round(candidates);
                write_round_banner(&mut out, session.root_word().text())?;
            }
            ":words" | ":w" => write_round_summary(&mut out, session)?,
            _ => {
                if let Some(outcome) = session.submit_word(&line) {
                    let word = normalize(&line).unwrap_or_default();
                    write_outcome(&mut out, &word, outcome, session.root_word().text())?;
                    if outcome == ValidationOutcome::Accepted {
                        writeln!(out, "  Found so far: {}", session.len())?;
                    }
                }
            }
        }

        prompt(&mut out)?;
    }

    write_round_summary(&mut out, session)?;
    writeln!(out, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "Word: ")?;
    out.flush()
}

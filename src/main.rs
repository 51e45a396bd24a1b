//! Word Scramble - CLI
//!
//! Find the words hidden inside a root word, in a TUI or on plain stdin/stdout.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use word_scramble::{
    commands::{check_words, run_simple},
    dictionary::{Language, SpellChecker, WordSet},
    game::{GameRules, GameSession},
    logging::init_logging,
    output::print_check_result,
    wordlists::{START_WORDS, loader},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Find the words hidden inside a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root word list: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Dictionary: 'embedded' (default, English) or path to a file with one word per line
    #[arg(short = 'd', long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Language tag passed to the spell checker
    #[arg(short, long, global = true, default_value = Language::ENGLISH)]
    language: String,

    /// Shortest word that counts
    #[arg(long, global = true, default_value_t = GameRules::MIN_WORD_LENGTH)]
    min_length: usize,

    /// Reject the root word itself
    #[arg(long, global = true)]
    reject_root: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one word per line, no TUI)
    Simple,

    /// Check words against a root word and print each outcome
    Check {
        /// The root word
        root: String,

        /// Words to submit, in order
        #[arg(required = true)]
        words: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let language = Language::new(&cli.language);
    let rules = GameRules::new(cli.min_length)
        .allow_root_word(!cli.reject_root)
        .language(language.clone());
    let dictionary = load_dictionary(&cli.dictionary, language)?;
    let session = GameSession::with_rules(dictionary, rules);

    match cli.command {
        Some(Commands::Check { root, words }) => run_check_command(session, &root, &words),
        Some(Commands::Simple) => {
            let candidates = load_wordlist(&cli.wordlist);
            run_simple_command(session, &candidates)
        }
        Some(Commands::Play) | None => {
            let candidates = load_wordlist(&cli.wordlist);
            run_play_command(session, candidates)
        }
    }
}

/// Load the dictionary based on the -d flag
///
/// A dictionary file that can't be read is an error: without it every word
/// would be rejected.
fn load_dictionary(mode: &str, language: Language) -> Result<WordSet> {
    if mode == "embedded" {
        let dictionary = WordSet::embedded_english();
        if language.tag() != Language::ENGLISH {
            tracing::warn!(
                language = %language,
                "embedded dictionary is English only, every word will be rejected"
            );
        }
        return Ok(dictionary);
    }

    let path = PathBuf::from(mode);
    WordSet::load(language, &path)
        .with_context(|| format!("Failed to load dictionary from {}", path.display()))
}

/// Load root word candidates based on the -w flag
///
/// Never fails: an unreadable file falls back to the embedded list.
fn load_wordlist(mode: &str) -> Vec<String> {
    if mode == "embedded" {
        loader::candidates_from_slice(START_WORDS)
    } else {
        loader::load_or_embedded(mode)
    }
}

fn run_check_command<D: SpellChecker>(
    mut session: GameSession<D>,
    root: &str,
    words: &[String],
) -> Result<()> {
    let result = check_words(&mut session, root, words);
    print_check_result(&result)?;
    Ok(())
}

fn run_simple_command<D: SpellChecker>(
    mut session: GameSession<D>,
    candidates: &[String],
) -> Result<()> {
    run_simple(&mut session, candidates)
}

fn run_play_command<D: SpellChecker>(session: GameSession<D>, candidates: Vec<String>) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let app = App::new(session, candidates);
    run_tui(app)
}

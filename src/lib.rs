//! Word Scramble
//!
//! Find the words hidden inside a root word. Every submission must be new,
//! spelled only from the root word's letters, and a real word.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::ValidationOutcome;
//! use word_scramble::dictionary::WordSet;
//! use word_scramble::game::GameSession;
//!
//! let mut session = GameSession::new(WordSet::embedded_english());
//! session.start_new_round(["silkworm"]);
//!
//! assert_eq!(session.submit_word("silk"), Some(ValidationOutcome::Accepted));
//! assert_eq!(session.accepted_words(), ["silk"]);
//! ```

// Core domain types
pub mod core;

// Spell-check capability and dictionaries
pub mod dictionary;

// Errors for loading word lists
pub mod error;

// Game session and rules
pub mod game;

// Logging setup
pub mod logging;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

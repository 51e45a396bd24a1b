//! Interactive TUI mode
//!
//! Terminal interface built on ratatui and crossterm.

mod app;
mod rendering;

pub use app::{Alert, App, InputMode, Message, MessageStyle, Statistics, run_tui};
pub use rendering::ui;

//! Command implementations

pub mod check;
pub mod simple;

pub use check::{CheckResult, CheckRow, check_words};
pub use simple::{play_lines, run_simple};

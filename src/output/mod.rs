//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_check_result, write_check_result, write_outcome, write_round_banner,
    write_round_summary,
};

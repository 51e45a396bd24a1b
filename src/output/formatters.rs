//! Formatting utilities for terminal output

use crate::core::ValidationOutcome;

/// Circled-number badge for a word's letter count
///
/// Counts from 1 to 20 use the Unicode circled digits, anything else
/// falls back to a parenthesized number.
#[must_use]
pub fn letter_badge(count: usize) -> String {
    match count {
        // ① is U+2460, ⑳ is U+2473
        1..=20 => char::from_u32(0x2460 + count as u32 - 1)
            .map_or_else(|| format!("({count})"), String::from),
        _ => format!("({count})"),
    }
}

/// One-line description of an outcome, without color
#[must_use]
pub fn outcome_line(word: &str, outcome: ValidationOutcome, root: &str) -> String {
    match outcome {
        ValidationOutcome::Accepted => {
            format!("✓ {word} {}", letter_badge(word.chars().count()))
        }
        ValidationOutcome::Rejected(reason) => {
            format!("✗ {word}: {}. {}", reason.title(), reason.message(root))
        }
    }
}

/// Pluralize a count, e.g. "1 word", "3 words"
#[must_use]
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

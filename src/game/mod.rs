//! Game session and rules
//!
//! A session holds one round at a time: the root word and the words the
//! player has found so far.

mod rules;
mod session;

pub use rules::GameRules;
pub use session::GameSession;

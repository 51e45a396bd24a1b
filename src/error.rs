//! Errors for the fallible edges of the crate
//!
//! The game itself never fails; only loading word lists from disk can.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no words found in {}", .path.display())]
    EmptyWordList { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, Error>;

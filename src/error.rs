use std::path::PathBuf;
use thiserror::Error;

/// dirseek Result type.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unknown sort strategy: {0:?} (expected one of: bubble, quick)")]
    UnknownSort(String),
    #[error("unknown search strategy: {0:?} (expected one of: linear, jump, binary, hash)")]
    UnknownSearch(String),
    #[error("invalid run plan: {0:?} (expected linear, hash or <sort>+<search>)")]
    InvalidPlan(String),
}

use thiserror::Error;

/// A wildcard pattern contained something other than letters, `?`, `_` and `*`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("invalid pattern token {found:?} at offset {offset}")]
    InvalidToken { offset: usize, found: char },
}

/// The errors the word list loader can produce.
#[derive(Debug, Error)]
pub enum WordlistError {
    #[error("could not read word list")]
    Io(#[from] std::io::Error),

    #[error("line {line} has no column {column}")]
    MissingColumn { line: usize, column: usize },
}

use thiserror::Error;

/// Errors raised while building an index. A keyword missing from the index
/// is a normal zero-result search outcome, never an error.
#[derive(Error, Debug)]
pub enum Error {
    /// A document or word-list source could not be opened.
    #[error("source not found: {name}")]
    SourceNotFound {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// A malformed request, e.g. an empty document name passed to the scanner.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;

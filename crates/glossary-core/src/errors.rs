//! Error types for glossary loading, configuration and site output
//!
//! Every failure in the pipeline is fatal: a malformed glossary, an invalid
//! configuration or an I/O failure stops the run. Tokenizer precondition
//! violations are programmer errors and panic instead of surfacing here.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GlossaryError {
    #[error("Malformed glossary input at line {line}: {message}")]
    MalformedInput { line: usize, message: String },
    #[error("Term '{term}' at line {line} is already defined")]
    DuplicateTerm { term: String, line: usize },
    #[error("Term '{0}' would overwrite the index page")]
    ReservedTerm(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("I/O error: {0}")]
    IoError(String),
    #[error("Output directory does not exist: {0}")]
    OutputDirectoryMissing(String),
}

impl From<std::io::Error> for GlossaryError {
    fn from(err: std::io::Error) -> Self {
        GlossaryError::IoError(err.to_string())
    }
}

impl GlossaryError {
    pub(crate) fn malformed(line: usize, message: impl Into<String>) -> Self {
        GlossaryError::MalformedInput {
            line,
            message: message.into(),
        }
    }
}

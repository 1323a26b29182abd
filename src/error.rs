use thiserror::Error;

/// Raised while compiling a lexicon. Nothing is partially compiled.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexiconError {
    #[error("Invalid rule name '{0}': expected a letter or underscore followed by letters, digits or underscores")]
    InvalidRuleName(String),

    #[error("Invalid pattern {pattern}: {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Lexicon has no rules")]
    Empty,
}

/// Raised by a scan the first time no rule matches.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexError {
    #[error("Unexpected {snippet} on line {line}, column {column}.")]
    UnexpectedToken {
        snippet: String,
        line: usize,
        column: usize,
    },
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum StreamError {
    #[error("Token stream ended unexpectedly")]
    EndOfStream,
}

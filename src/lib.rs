//! Regex-driven lexing: compile an ordered lexicon of rules into one
//! matcher, scan input into positioned tokens, and walk them with a
//! cursor built for hand-written recursive-descent parsers.

pub mod diagnostic;
pub mod error;
pub mod lexing;
pub mod source;
pub mod stream;

pub use diagnostic::{DefaultReporter, Diagnostic, Reporter};
pub use error::{LexError, LexiconError, StreamError};
pub use lexing::*;
pub use stream::Stream;

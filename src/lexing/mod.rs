pub mod lexer;
pub mod lexicon;
pub mod patterns;
pub mod rule;
pub mod token;

pub use lexer::Lexer;
pub use lexicon::{Flags, Lexicon};
pub use rule::{Rule, RuleTarget};
pub use token::{Token, TokenString};

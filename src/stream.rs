use crate::error::StreamError;
use crate::lexing::token::*;
use log::trace;

/// An owned sequence of tokens with a cursor. The cursor may sit past the
/// last token, in which case there is no current token.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Stream {
    tokens: Vec<Token>,
    position: usize,
}

type Result<T> = std::result::Result<T, StreamError>;

impl Stream {
    pub fn new(tokens: Vec<Token>) -> Self {
        Stream {
            tokens,
            position: 0,
        }
    }

    pub fn count(&self) -> usize {
        self.tokens.len()
    }

    pub fn len(&self) -> usize {
        self.count()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// The token under the cursor. Reading past the end is an error, since
    /// callers only ask for the current token when they expect one.
    pub fn current(&self) -> Result<&Token> {
        self.tokens.get(self.position).ok_or(StreamError::EndOfStream)
    }

    /// Moves the cursor forward and returns the token there, or `None`
    /// once the stream is exhausted. The cursor keeps moving past the end.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&Token> {
        self.position = self.position.saturating_add(1);
        self.tokens.get(self.position)
    }

    pub fn has_next(&self) -> bool {
        self.position.saturating_add(1) < self.tokens.len()
    }

    pub fn is_current(&self, kind: &str) -> bool {
        self.is_at(Some(self.position), kind)
    }

    pub fn is_next(&self, kind: &str) -> bool {
        self.is_at(self.position.checked_add(1), kind)
    }

    pub fn is_prev(&self, kind: &str) -> bool {
        self.is_at(self.position.checked_sub(1), kind)
    }

    pub fn rewind(&mut self) -> &mut Self {
        self.position = 0;
        self
    }

    pub fn skip_while(&mut self, kinds: &[&str]) {
        self.consume(kinds, true);
    }

    pub fn skip_until(&mut self, kinds: &[&str]) {
        self.consume(kinds, false);
    }

    pub fn consume_while(&mut self, kinds: &[&str]) -> Vec<Token> {
        self.consume(kinds, true).to_vec()
    }

    pub fn consume_until(&mut self, kinds: &[&str]) -> Vec<Token> {
        self.consume(kinds, false).to_vec()
    }

    pub fn consume_value_while(&mut self, kinds: &[&str]) -> String {
        join_values(self.consume(kinds, true))
    }

    pub fn consume_value_until(&mut self, kinds: &[&str]) -> String {
        join_values(self.consume(kinds, false))
    }

    /// Consumes up to the first token of one of `kinds` into a new,
    /// independent stream positioned at its first token.
    pub fn copy_stream_until(&mut self, kinds: &[&str]) -> Stream {
        let start = self.position;
        let tokens = self.consume_until(kinds);
        trace!(
            target: "stream",
            "Copied {} tokens from {} into a new stream",
            tokens.len(),
            start
        );
        Stream::new(tokens)
    }

    // Advances over the run of tokens whose membership in `kinds` equals
    // `member`, returning the run.
    fn consume(&mut self, kinds: &[&str], member: bool) -> &[Token] {
        let start = self.position;
        while self.current_matches(kinds, member) {
            self.position += 1;
        }
        self.tokens.get(start..self.position).unwrap_or(&[])
    }

    fn current_matches(&self, kinds: &[&str], member: bool) -> bool {
        match self.tokens.get(self.position) {
            Some(token) => token.is_any_kind(kinds) == member,
            None => false,
        }
    }

    fn is_at(&self, position: Option<usize>, kind: &str) -> bool {
        position
            .and_then(|p| self.tokens.get(p))
            .map(|token| token.is_kind(kind))
            .unwrap_or(false)
    }
}

impl From<Vec<Token>> for Stream {
    fn from(tokens: Vec<Token>) -> Self {
        Stream::new(tokens)
    }
}

fn join_values(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.value.as_str()).collect()
}

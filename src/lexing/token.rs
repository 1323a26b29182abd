use std::fmt;

/// A classified slice of the scanned input. `offset` and `length` are in
/// bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub value: String,
    pub kind: String,
    pub offset: usize,
    pub length: usize,
}

impl Token {
    pub fn new(value: &str, kind: &str, offset: usize) -> Self {
        Token {
            value: String::from(value),
            kind: String::from(kind),
            offset,
            length: value.len(),
        }
    }

    pub fn is_kind(&self, kind: &str) -> bool {
        self.kind == kind
    }

    pub fn is_any_kind(&self, kinds: &[&str]) -> bool {
        kinds.iter().any(|kind| self.is_kind(kind))
    }

    /// Byte offset just past the end of this token.
    pub fn end(&self) -> usize {
        self.offset + self.length
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Token(kind: {}, value: {:?}, at: {}..{})",
            self.kind,
            self.value,
            self.offset,
            self.end()
        )
    }
}

pub trait TokenString {
    fn token_string(&self) -> String;
}

impl TokenString for [Token] {
    fn token_string(&self) -> String {
        let toks = self
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        String::from("Vec(") + &toks + ")"
    }
}

/// A 1-based line/column pair inside some input text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    /// Locates the byte `offset` inside `text`. Lines are counted by `\n`,
    /// columns are counted in bytes since the last newline. Offsets past the
    /// end or inside a character are pulled back to the nearest boundary.
    pub fn of(text: &str, offset: usize) -> Self {
        let offset = char_boundary(text, offset);
        let before = &text[..offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let column = offset - line_start + 1;
        Location { line, column }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

pub const SNIPPET_LENGTH: usize = 10;

/// Up to `SNIPPET_LENGTH` characters of `text` starting at `offset`, with
/// newlines written as the two characters `\n`.
pub fn snippet(text: &str, offset: usize) -> String {
    text[char_boundary(text, offset)..]
        .chars()
        .take(SNIPPET_LENGTH)
        .fold(String::new(), |mut acc, c| {
            if c == '\n' {
                acc.push_str("\\n");
            } else {
                acc.push(c);
            }
            acc
        })
}

fn char_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

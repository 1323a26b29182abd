use crate::error::LexError;
use crate::source::Location;
use colored::*;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Severity {
    Error,
    // Warning,
}

/// A scan failure ready to be shown to a person: the message, where it
/// happened, and the line of input it happened on.
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub location: Location,
    pub line: String,
}

impl Diagnostic {
    pub fn error(location: Location, line: &str, message: &str) -> Self {
        Diagnostic {
            severity: Severity::Error,
            message: String::from(message),
            location,
            line: String::from(line),
        }
    }

    pub fn from_error(err: &LexError, input: &str) -> Self {
        match err {
            LexError::UnexpectedToken { line, column, .. } => {
                let text = input.lines().nth(line.saturating_sub(1)).unwrap_or("");
                Diagnostic::error(
                    Location {
                        line: *line,
                        column: *column,
                    },
                    text,
                    &err.to_string(),
                )
            }
        }
    }

    /// Header, offending line and a caret under the failing column.
    pub fn render(&self) -> String {
        let header = match self.severity {
            Severity::Error => "• Error:".red().bold(),
        };
        let offset = (1..self.location.column).map(|_| " ").collect::<String>();
        format!(
            "\n{} {}\n\n  {}\n  {}{}\n  {}\n",
            header,
            self.message,
            self.line,
            offset,
            "^".red().bold(),
            self.location
        )
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Diagnostic({}, {})", self.message, self.location)
    }
}

pub trait DiagnosticString {
    fn diagnostic_string(&self) -> String;
}

impl DiagnosticString for [Diagnostic] {
    fn diagnostic_string(&self) -> String {
        self.iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub trait Reporter {
    fn report(&self, diagnostic: Diagnostic);
}

pub struct DefaultReporter {}

impl DefaultReporter {
    pub fn new() -> Self {
        DefaultReporter {}
    }
}

impl Default for DefaultReporter {
    fn default() -> Self {
        DefaultReporter::new()
    }
}

impl Reporter for DefaultReporter {
    fn report(&self, diagnostic: Diagnostic) {
        eprintln!("{}", diagnostic.render());
    }
}

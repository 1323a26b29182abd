use super::lexicon::*;
use super::rule::*;
use super::token::*;
use crate::diagnostic::{Diagnostic, Reporter};
use crate::error::{LexError, LexiconError};
use crate::source::{self, Location};
use crate::stream::Stream;
use log::{debug, trace};
use regex::{CaptureLocations, Regex, RegexBuilder};

/// A compiled lexicon. All rules live in a single regex, one alternative
/// per rule in declaration order, so the first rule able to match at a
/// position is the one that fires.
#[derive(Clone, Debug)]
pub struct Lexer {
    rules: Vec<Rule>,
    regex: Regex,
    // (capture group index, rule name) for every named rule, in order
    groups: Vec<(usize, String)>,
}

impl Lexer {
    pub fn new(lexicon: Lexicon) -> Result<Self, LexiconError> {
        if lexicon.is_empty() {
            return Err(LexiconError::Empty);
        }

        let mut group_names: Vec<(String, String)> = Vec::new();
        let mut alternatives = Vec::new();

        for (index, rule) in lexicon.rules().iter().enumerate() {
            match &rule.target {
                RuleTarget::Named(name) => {
                    if !is_valid_rule_name(name) {
                        return Err(LexiconError::InvalidRuleName(name.clone()));
                    }
                    let mut group = name.clone();
                    while group_names.iter().any(|(taken, _)| *taken == group) {
                        group = format!("{}__{}", group, index);
                    }
                    alternatives.push(format!("(?P<{}>{})", group, rule.pattern));
                    group_names.push((group, name.clone()));
                }
                RuleTarget::Skip => alternatives.push(format!("(?:{})", rule.pattern)),
            }
        }

        let pattern = alternatives.join("|");
        let mut builder = RegexBuilder::new(&pattern);
        lexicon.engine_flags().apply(&mut builder);
        let regex = builder
            .build()
            .map_err(|err| LexiconError::InvalidPattern {
                pattern: pattern.clone(),
                message: err.to_string(),
            })?;

        let mut groups = Vec::with_capacity(group_names.len());
        for (group, name) in group_names {
            let index = regex
                .capture_names()
                .position(|n| n == Some(group.as_str()))
                .ok_or_else(|| LexiconError::InvalidPattern {
                    pattern: pattern.clone(),
                    message: format!("capture group '{}' is missing", group),
                })?;
            groups.push((index, name));
        }

        debug!(target: "lexer", "Compiled {} rules into {}", lexicon.rules().len(), pattern);

        Ok(Lexer {
            rules: lexicon.rules().to_vec(),
            regex,
            groups,
        })
    }

    /// The composed pattern, for diagnostics.
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Scans `input` from start to end. Every match must begin exactly
    /// where the previous one ended; the first position where no rule
    /// produces a non-empty match aborts the scan.
    pub fn tokenize(&self, input: &str) -> Result<Stream, LexError> {
        let mut tokens = Vec::new();
        let mut locations = self.regex.capture_locations();
        let mut offset = 0;

        while offset < input.len() {
            let end = match self.regex.captures_read_at(&mut locations, input, offset) {
                Some(m) if m.start() == offset && m.end() > offset => m.end(),
                _ => return Err(self.unexpected(input, offset)),
            };
            let value = &input[offset..end];

            match self.matched_rule(&locations) {
                Some(kind) => {
                    trace!(target: "lexer", "{} {:?} at {}", kind, value, offset);
                    tokens.push(Token::new(value, kind, offset));
                }
                None => trace!(target: "lexer", "skipped {:?} at {}", value, offset),
            }

            offset = end;
        }

        Ok(Stream::new(tokens))
    }

    /// Like `tokenize`, but hands a failure to `reporter` as a diagnostic.
    pub fn tokenize_reporting(&self, input: &str, reporter: &dyn Reporter) -> Option<Stream> {
        match self.tokenize(input) {
            Ok(stream) => Some(stream),
            Err(err) => {
                reporter.report(Diagnostic::from_error(&err, input));
                None
            }
        }
    }

    fn matched_rule(&self, locations: &CaptureLocations) -> Option<&str> {
        self.groups
            .iter()
            .find(|(index, _)| locations.get(*index).is_some())
            .map(|(_, name)| name.as_str())
    }

    fn unexpected(&self, input: &str, offset: usize) -> LexError {
        let Location { line, column } = Location::of(input, offset);
        let snippet = source::snippet(input, offset);
        debug!(target: "lexer", "No rule matches {:?} at {}:{}", snippet, line, column);
        LexError::UnexpectedToken {
            snippet,
            line,
            column,
        }
    }
}

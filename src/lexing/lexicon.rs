use super::rule::*;
use regex::RegexBuilder;
use std::iter::FromIterator;

/// Engine modifiers applied to the whole composed pattern.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Flags {
    pub case_insensitive: bool,
    pub multi_line: bool,
    pub dot_matches_new_line: bool,
    pub ignore_whitespace: bool,
    pub unicode: bool,
    pub size_limit: Option<usize>,
}

impl Default for Flags {
    fn default() -> Self {
        Flags {
            case_insensitive: false,
            multi_line: false,
            dot_matches_new_line: false,
            ignore_whitespace: false,
            unicode: true,
            size_limit: None,
        }
    }
}

impl Flags {
    pub fn new() -> Self {
        Flags::default()
    }

    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self
    }

    pub fn multi_line(mut self, yes: bool) -> Self {
        self.multi_line = yes;
        self
    }

    pub fn dot_matches_new_line(mut self, yes: bool) -> Self {
        self.dot_matches_new_line = yes;
        self
    }

    pub fn ignore_whitespace(mut self, yes: bool) -> Self {
        self.ignore_whitespace = yes;
        self
    }

    pub fn unicode(mut self, yes: bool) -> Self {
        self.unicode = yes;
        self
    }

    pub fn size_limit(mut self, bytes: usize) -> Self {
        self.size_limit = Some(bytes);
        self
    }

    pub(crate) fn apply(&self, builder: &mut RegexBuilder) {
        builder
            .case_insensitive(self.case_insensitive)
            .multi_line(self.multi_line)
            .dot_matches_new_line(self.dot_matches_new_line)
            .ignore_whitespace(self.ignore_whitespace)
            .unicode(self.unicode);
        if let Some(limit) = self.size_limit {
            builder.size_limit(limit);
        }
    }
}

/// An ordered set of rules. Earlier rules win over later ones when both
/// match at the same position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Lexicon {
    rules: Vec<Rule>,
    flags: Flags,
}

impl Lexicon {
    pub fn new() -> Self {
        Lexicon::default()
    }

    pub fn rule(mut self, pattern: &str, name: &str) -> Self {
        self.rules.push(Rule::new(pattern, name));
        self
    }

    pub fn skip(mut self, pattern: &str) -> Self {
        self.rules.push(Rule::skip(pattern));
        self
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn engine_flags(&self) -> &Flags {
        &self.flags
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<P: AsRef<str>, T: Into<RuleTarget>> FromIterator<(P, T)> for Lexicon {
    fn from_iter<I: IntoIterator<Item = (P, T)>>(iter: I) -> Self {
        let rules = iter
            .into_iter()
            .map(|(pattern, target)| Rule::new(pattern.as_ref(), target))
            .collect();
        Lexicon {
            rules,
            flags: Flags::default(),
        }
    }
}

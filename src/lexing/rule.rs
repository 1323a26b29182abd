/// What happens to the text a rule matches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleTarget {
    /// Emit a token of this kind.
    Named(String),
    /// Consume the text without emitting a token.
    Skip,
}

impl RuleTarget {
    pub fn name(&self) -> Option<&str> {
        match self {
            RuleTarget::Named(name) => Some(name),
            RuleTarget::Skip => None,
        }
    }

    pub fn is_skip(&self) -> bool {
        *self == RuleTarget::Skip
    }
}

impl From<&str> for RuleTarget {
    fn from(name: &str) -> Self {
        RuleTarget::Named(String::from(name))
    }
}

impl From<String> for RuleTarget {
    fn from(name: String) -> Self {
        RuleTarget::Named(name)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub pattern: String,
    pub target: RuleTarget,
}

impl Rule {
    pub fn new<T: Into<RuleTarget>>(pattern: &str, target: T) -> Self {
        Rule {
            pattern: String::from(pattern),
            target: target.into(),
        }
    }

    pub fn skip(pattern: &str) -> Self {
        Rule::new(pattern, RuleTarget::Skip)
    }
}

/// Names become capture group names: a letter or `_`, then letters,
/// digits or `_`. Unicode letters and digits are accepted.
pub fn is_valid_rule_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

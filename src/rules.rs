//! Custom rule chains
//!
//! A custom chain replaces the built-in stages entirely. It holds exactly
//! three rules, evaluated in order `tooShort`, `weak`, `strong`; a rule
//! "fails" when its pattern does not match the password.

use regex::Regex;
use thiserror::Error;

use crate::Category;

/// Message reported for a custom rule whose failure message is empty.
pub const MISSING_MESSAGE: &str = "N/A";

#[derive(Error, Debug)]
pub enum RuleError {
    #[error("Invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// A pattern predicate paired with the message shown when it fails.
///
/// The pattern is a search test: it matches anywhere in the password unless
/// it anchors itself with `^`/`$`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RuleDef", into = "RuleDef"))]
pub struct Rule {
    pattern: Regex,
    message: String,
}

impl Rule {
    /// Compiles `pattern` into a rule.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::InvalidPattern`] if the pattern does not compile.
    pub fn new(pattern: &str, message: impl Into<String>) -> Result<Self, RuleError> {
        let compiled = Regex::new(pattern).map_err(|source| {
            #[cfg(feature = "tracing")]
            tracing::warn!("Rejected custom rule pattern: {}", source);
            RuleError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            }
        })?;
        Ok(Self::from_regex(compiled, message))
    }

    pub fn from_regex(pattern: Regex, message: impl Into<String>) -> Self {
        Self {
            pattern,
            message: message.into(),
        }
    }

    pub fn is_satisfied_by(&self, password: &str) -> bool {
        self.pattern.is_match(password)
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// The failure message, or [`MISSING_MESSAGE`] when none was given.
    pub fn message(&self) -> &str {
        if self.message.is_empty() {
            MISSING_MESSAGE
        } else {
            &self.message
        }
    }
}

impl PartialEq for Rule {
    fn eq(&self, other: &Self) -> bool {
        self.pattern() == other.pattern() && self.message == other.message
    }
}

impl Eq for Rule {}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct RuleDef {
    regex: String,
    #[serde(default)]
    error_message: String,
}

#[cfg(feature = "serde")]
impl TryFrom<RuleDef> for Rule {
    type Error = RuleError;

    fn try_from(def: RuleDef) -> Result<Self, Self::Error> {
        Rule::new(&def.regex, def.error_message)
    }
}

#[cfg(feature = "serde")]
impl From<Rule> for RuleDef {
    fn from(rule: Rule) -> Self {
        RuleDef {
            regex: rule.pattern.as_str().to_string(),
            error_message: rule.message,
        }
    }
}

/// Position of a rule inside a custom chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomStage {
    TooShort,
    Weak,
    Strong,
}

impl CustomStage {
    /// Category reported when the chain stops at this stage.
    ///
    /// Failing the last stage still lands in the `Strong` tier: the meter
    /// shows "almost there" while the message asks for the last step.
    pub fn category(self) -> Category {
        match self {
            CustomStage::TooShort => Category::TooShort,
            CustomStage::Weak => Category::Weak,
            CustomStage::Strong => Category::Strong,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CustomStage::TooShort => "tooShort",
            CustomStage::Weak => "weak",
            CustomStage::Strong => "strong",
        }
    }
}

/// The three caller-supplied rules, in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct CustomRules {
    pub too_short: Rule,
    pub weak: Rule,
    pub strong: Rule,
}

impl CustomRules {
    pub fn new(too_short: Rule, weak: Rule, strong: Rule) -> Self {
        Self {
            too_short,
            weak,
            strong,
        }
    }

    pub fn stages(&self) -> [(CustomStage, &Rule); 3] {
        [
            (CustomStage::TooShort, &self.too_short),
            (CustomStage::Weak, &self.weak),
            (CustomStage::Strong, &self.strong),
        ]
    }

    /// First rule whose pattern does not match `password`, if any.
    pub fn first_failure(&self, password: &str) -> Option<(CustomStage, &Rule)> {
        self.stages()
            .into_iter()
            .find(|(_, rule)| !rule.is_satisfied_by(password))
    }
}

/// Which rule set drives classification. Custom rules replace the built-in
/// stages; the two are never combined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "Option<CustomRules>", into = "Option<CustomRules>")
)]
pub enum RuleChain {
    #[default]
    Default,
    Custom(CustomRules),
}

impl From<Option<CustomRules>> for RuleChain {
    fn from(rules: Option<CustomRules>) -> Self {
        rules.map_or(RuleChain::Default, RuleChain::Custom)
    }
}

impl From<RuleChain> for Option<CustomRules> {
    fn from(chain: RuleChain) -> Self {
        match chain {
            RuleChain::Default => None,
            RuleChain::Custom(rules) => Some(rules),
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_deserialize_custom_rules() {
        let rules: CustomRules = serde_json::from_str(
            r#"{
                "tooShort": {"regex": "^.{10,}$", "errorMessage": "Ten or more"},
                "weak": {"regex": "[A-Z]", "errorMessage": "Add a capital"},
                "strong": {"regex": "[!?]"}
            }"#,
        )
        .expect("valid rules");
        assert_eq!(rules.too_short.pattern(), "^.{10,}$");
        assert_eq!(rules.weak.message(), "Add a capital");
        assert_eq!(rules.strong.message(), MISSING_MESSAGE);
    }

    #[test]
    fn test_invalid_pattern_fails_deserialization() {
        let result: Result<Rule, _> =
            serde_json::from_str(r#"{"regex": "(unclosed", "errorMessage": "x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_default_chain_serializes_as_null() {
        let json = serde_json::to_string(&RuleChain::Default).expect("serializable");
        assert_eq!(json, "null");
    }
}

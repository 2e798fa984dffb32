//! Classification options.

use crate::messages::MessageTable;
use crate::rules::{CustomRules, RuleChain};

/// Everything a caller can configure for one classification.
///
/// The default uses the built-in stages and the built-in English messages.
/// When a custom chain is set, the message table is not consulted: each
/// custom rule carries its own message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClassifyOptions {
    #[cfg_attr(feature = "serde", serde(rename = "errorMessages"))]
    pub messages: MessageTable,
    #[cfg_attr(feature = "serde", serde(rename = "customValidations"))]
    pub chain: RuleChain,
}

impl ClassifyOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_messages(mut self, messages: MessageTable) -> Self {
        self.messages = messages;
        self
    }

    #[must_use]
    pub fn with_custom_rules(mut self, rules: CustomRules) -> Self {
        self.chain = RuleChain::Custom(rules);
        self
    }

    pub fn is_custom(&self) -> bool {
        matches!(self.chain, RuleChain::Custom(_))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::messages::MessageKey;

    #[test]
    fn test_deserialize_empty_object_is_default() {
        let options: ClassifyOptions = serde_json::from_str("{}").expect("valid options");
        assert_eq!(options, ClassifyOptions::default());
    }

    #[test]
    fn test_deserialize_full_options() {
        let options: ClassifyOptions = serde_json::from_str(
            r#"{
                "errorMessages": {"numeric": "Needs a number"},
                "customValidations": {
                    "tooShort": {"regex": "^.{8,}$", "errorMessage": "8+"},
                    "weak": {"regex": "[0-9]", "errorMessage": "digit"},
                    "strong": {"regex": "[!@#]", "errorMessage": "symbol"}
                }
            }"#,
        )
        .expect("valid options");
        assert!(options.is_custom());
        assert_eq!(options.messages.get(MessageKey::Numeric), "Needs a number");
    }
}

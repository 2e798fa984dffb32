//! Advisory message table
//!
//! Callers may override any subset of the six entries; an unset (or empty)
//! entry falls back to the built-in English text.

/// Fixed message for a run of 3+ identical characters. Not overridable.
pub const REPEATING_CHARS_MESSAGE: &str = "Password contains too many repeating characters";

/// Keys of the message table, named as in the `serde` representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    TooShort,
    Uppercase,
    Lowercase,
    Numeric,
    SpecialChar,
    LengthRequirement,
}

impl MessageKey {
    pub const ALL: [MessageKey; 6] = [
        MessageKey::TooShort,
        MessageKey::Uppercase,
        MessageKey::Lowercase,
        MessageKey::Numeric,
        MessageKey::SpecialChar,
        MessageKey::LengthRequirement,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MessageKey::TooShort => "tooShort",
            MessageKey::Uppercase => "uppercase",
            MessageKey::Lowercase => "lowercase",
            MessageKey::Numeric => "numeric",
            MessageKey::SpecialChar => "specialChar",
            MessageKey::LengthRequirement => "lengthRequirement",
        }
    }

    /// Built-in English text for this key.
    pub fn default_text(self) -> &'static str {
        match self {
            MessageKey::TooShort => "Password is too short",
            MessageKey::Uppercase => "Password must contain at least one uppercase letter",
            MessageKey::Lowercase => "Password must contain at least one lowercase letter",
            MessageKey::Numeric => "Password must contain at least one numeric digit",
            MessageKey::SpecialChar => "Password must contain at least one special character",
            MessageKey::LengthRequirement => "Password Length must be greater than 8 characters.",
        }
    }
}

impl std::str::FromStr for MessageKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MessageKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or(())
    }
}

/// Caller overrides for the advisory messages.
///
/// `tooShort` is only used by callers building custom rules; the built-in
/// chain reports short passwords with `lengthRequirement`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct MessageTable {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub too_short: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub uppercase: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub lowercase: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub numeric: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub special_char: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub length_requirement: Option<String>,
}

impl MessageTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the override for `key`, consuming and returning the table.
    #[must_use]
    pub fn with(mut self, key: MessageKey, text: impl Into<String>) -> Self {
        *self.slot_mut(key) = Some(text.into());
        self
    }

    /// Returns the text for `key`: the override if set and non-empty,
    /// the built-in text otherwise.
    pub fn get(&self, key: MessageKey) -> &str {
        match self.slot(key) {
            Some(text) if !text.is_empty() => text,
            _ => key.default_text(),
        }
    }

    fn slot(&self, key: MessageKey) -> &Option<String> {
        match key {
            MessageKey::TooShort => &self.too_short,
            MessageKey::Uppercase => &self.uppercase,
            MessageKey::Lowercase => &self.lowercase,
            MessageKey::Numeric => &self.numeric,
            MessageKey::SpecialChar => &self.special_char,
            MessageKey::LengthRequirement => &self.length_requirement,
        }
    }

    fn slot_mut(&mut self, key: MessageKey) -> &mut Option<String> {
        match key {
            MessageKey::TooShort => &mut self.too_short,
            MessageKey::Uppercase => &mut self.uppercase,
            MessageKey::Lowercase => &mut self.lowercase,
            MessageKey::Numeric => &mut self.numeric,
            MessageKey::SpecialChar => &mut self.special_char,
            MessageKey::LengthRequirement => &mut self.length_requirement,
        }
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_deserialize_subset_with_camel_case_keys() {
        let table: MessageTable = serde_json::from_str(
            r#"{"specialChar": "Use one of !@#", "lengthRequirement": "Too short!"}"#,
        )
        .expect("valid table");
        assert_eq!(table.get(MessageKey::SpecialChar), "Use one of !@#");
        assert_eq!(table.get(MessageKey::LengthRequirement), "Too short!");
        assert_eq!(table.get(MessageKey::Uppercase), MessageKey::Uppercase.default_text());
    }

    #[test]
    fn test_serialize_skips_unset() {
        let table = MessageTable::new().with(MessageKey::TooShort, "short");
        let json = serde_json::to_string(&table).expect("serializable");
        assert_eq!(json, r#"{"tooShort":"short"}"#);
    }
}

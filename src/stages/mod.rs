//! Built-in rule stages
//!
//! Each stage is a pure predicate over the password text. The category chain
//! and the message chain both walk this table, each in its own order.

mod length;
mod repetition;
mod variety;

pub use length::{MIN_LENGTH, meets_min_length, password_length};
pub use repetition::has_repeating_run;
pub use variety::{
    CATEGORY_SPECIAL_CHARS, MESSAGE_SPECIAL_CHARS, has_digit, has_lowercase, has_special_char,
    has_uppercase,
};

/// One rule of the built-in chain.
///
/// `HasSpecialChar` carries the literal character set it tests against, since
/// the category chain and the message chain each keep their own set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    MinLength,
    NoRepeatingRun,
    HasUppercase,
    HasLowercase,
    HasDigit,
    HasSpecialChar(&'static str),
}

impl Stage {
    /// Stages that decide the strength category, after the length gate.
    pub const CATEGORY_CHAIN: [Stage; 4] = [
        Stage::HasUppercase,
        Stage::HasDigit,
        Stage::HasLowercase,
        Stage::HasSpecialChar(CATEGORY_SPECIAL_CHARS),
    ];

    /// Stages that pick the advisory message, after the length gate.
    pub const MESSAGE_CHAIN: [Stage; 5] = [
        Stage::NoRepeatingRun,
        Stage::HasUppercase,
        Stage::HasLowercase,
        Stage::HasDigit,
        Stage::HasSpecialChar(MESSAGE_SPECIAL_CHARS),
    ];

    /// Returns `true` when `password` satisfies this stage.
    pub fn passes(self, password: &str) -> bool {
        match self {
            Stage::MinLength => meets_min_length(password),
            Stage::NoRepeatingRun => !has_repeating_run(password),
            Stage::HasUppercase => has_uppercase(password),
            Stage::HasLowercase => has_lowercase(password),
            Stage::HasDigit => has_digit(password),
            Stage::HasSpecialChar(set) => has_special_char(password, set),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Stage::MinLength => "minLength",
            Stage::NoRepeatingRun => "noRepeatingRun",
            Stage::HasUppercase => "uppercase",
            Stage::HasLowercase => "lowercase",
            Stage::HasDigit => "numeric",
            Stage::HasSpecialChar(_) => "specialChar",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passes_dispatches_to_predicates() {
        assert!(Stage::MinLength.passes("12345678"));
        assert!(!Stage::MinLength.passes("1234567"));
        assert!(!Stage::NoRepeatingRun.passes("abccc"));
        assert!(Stage::NoRepeatingRun.passes("abcc"));
        assert!(Stage::HasUppercase.passes("aB"));
        assert!(Stage::HasLowercase.passes("Ab"));
        assert!(Stage::HasDigit.passes("a1"));
        assert!(Stage::HasSpecialChar(CATEGORY_SPECIAL_CHARS).passes("a*"));
        assert!(!Stage::HasSpecialChar(MESSAGE_SPECIAL_CHARS).passes("a-"));
    }

    #[test]
    fn test_message_chain_starts_with_repetition() {
        assert_eq!(Stage::MESSAGE_CHAIN[0], Stage::NoRepeatingRun);
        assert!(!Stage::CATEGORY_CHAIN.contains(&Stage::NoRepeatingRun));
    }

    #[test]
    fn test_stage_names_match_message_keys() {
        assert_eq!(Stage::HasUppercase.name(), "uppercase");
        assert_eq!(Stage::HasDigit.name(), "numeric");
        assert_eq!(Stage::HasSpecialChar(MESSAGE_SPECIAL_CHARS).name(), "specialChar");
    }
}

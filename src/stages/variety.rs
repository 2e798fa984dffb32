//! Character variety stages - uppercase, lowercase, digits, special chars.

/// Special characters accepted by the category chain.
pub const CATEGORY_SPECIAL_CHARS: &str = "!@#$*%^&+=";

/// Special characters accepted by the message chain.
///
/// Kept apart from [`CATEGORY_SPECIAL_CHARS`]: the two literals are written
/// in a different order and must not drift without a test noticing.
pub const MESSAGE_SPECIAL_CHARS: &str = "!@#*$%^&+=";

pub fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

pub fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

/// Checks whether any character of `password` belongs to `set`.
pub fn has_special_char(password: &str, set: &str) -> bool {
    password.chars().any(|c| set.contains(c))
}

//! Length stage - checks password minimum length.

pub const MIN_LENGTH: usize = 8;

/// Length of the password in characters, not bytes.
pub fn password_length(password: &str) -> usize {
    password.chars().count()
}

/// Checks if the password meets the minimum length requirement.
pub fn meets_min_length(password: &str) -> bool {
    password_length(password) >= MIN_LENGTH
}

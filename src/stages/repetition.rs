//! Repetition stage - detects runs of identical consecutive characters.

/// Shortest run of identical characters that is rejected.
const MAX_RUN: usize = 3;

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Returns `true` if the password contains 3 or more identical consecutive
/// characters (e.g. `"aaa"`). Line terminators never count toward a run.
pub fn has_repeating_run(password: &str) -> bool {
    let mut prev: Option<char> = None;
    let mut run = 0;

    for c in password.chars() {
        if is_line_terminator(c) {
            prev = None;
            run = 0;
            continue;
        }
        if prev == Some(c) {
            run += 1;
            if run >= MAX_RUN {
                return true;
            }
        } else {
            prev = Some(c);
            run = 1;
        }
    }

    false
}

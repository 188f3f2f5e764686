//! Syntactic email checks

use std::sync::LazyLock;

use regex::Regex;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Live state of the email field while the user types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailFieldState {
    Empty,
    Valid,
    Invalid,
}

/// `local@domain.tld` shape check: no whitespace, a single `@`, and a dot
/// with text on both sides somewhere in the domain.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL.is_match(email)
}

/// Classify trimmed field input.
pub fn classify_email(input: &str) -> EmailFieldState {
    let email = input.trim();
    if email.is_empty() {
        EmailFieldState::Empty
    } else if is_valid_email(email) {
        EmailFieldState::Valid
    } else {
        EmailFieldState::Invalid
    }
}

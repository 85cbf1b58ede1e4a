//! Parameter syntax validation.
//!
//! Pure checks with no side effects: a rule either accepts the trimmed
//! parameter or rejects it, and the dispatcher turns a rejection into a
//! usage hint.

use regex::Regex;
use std::sync::OnceLock;

static USERNAME: OnceLock<Regex> = OnceLock::new();
static USERNAME_WITH_TIME: OnceLock<Regex> = OnceLock::new();

fn username() -> &'static Regex {
    USERNAME.get_or_init(|| Regex::new(r"^[a-zA-Z0-9_]+$").expect("hardcoded pattern"))
}

fn username_with_time() -> &'static Regex {
    USERNAME_WITH_TIME
        .get_or_init(|| Regex::new(r"^[a-zA-Z0-9_]+( [0-9]+)?$").expect("hardcoded pattern"))
}

/// Syntax rule for a command parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxRule {
    /// A single valid username token.
    Username,
    /// A username token optionally followed by a whitespace-separated
    /// non-negative integer.
    UsernameWithTime,
    /// Any non-empty parameter (after trimming).
    Any,
}

/// Trim the raw parameter and check it against the rule.
///
/// Returns the trimmed string on success. An absent parameter always fails.
pub fn validate(rule: SyntaxRule, raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    let accepted = match rule {
        SyntaxRule::Username => username().is_match(trimmed),
        SyntaxRule::UsernameWithTime => username_with_time().is_match(trimmed),
        SyntaxRule::Any => !trimmed.is_empty(),
    };
    accepted.then(|| trimmed.to_string())
}

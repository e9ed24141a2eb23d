//! Email-shape validation.

use once_cell::sync::Lazy;
use regex::Regex;

/// The fixed permissive email pattern: a local part drawn from a character
/// class, one or more domain labels, and a two-plus letter final label.
/// Purely syntactic; the character class permits consecutive dots in the
/// local part, so `a..b@c.com` is accepted.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$").unwrap()
});

/// Whether a string matches the email-shape pattern.
///
/// No DNS or mailbox checks; this is a format gate only.
pub fn is_valid_email(input: &str) -> bool {
    EMAIL_PATTERN.is_match(input)
}

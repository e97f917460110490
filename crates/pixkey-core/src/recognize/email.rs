//! # Email Keys
//!
//! Syntax-only check using the `validator` crate's HTML5 email rules. No
//! DNS lookups are made.

use validator::ValidateEmail;

/// Whether `s` is a syntactically valid email address.
pub fn is_email(s: &str) -> bool {
    s.validate_email()
}

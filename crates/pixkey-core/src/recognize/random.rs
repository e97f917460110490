//! # Random Keys
//!
//! A random PIX key is the hyphenated 8-4-4-4-12 text form of a UUID.
//! Braced, URN and unhyphenated spellings parse as UUIDs but are not
//! accepted as keys.

use uuid::Uuid;

const HYPHENATED_LEN: usize = 36;

/// Whether `s` is a hyphenated UUID. Hex digits may be either case.
pub fn is_random_key(s: &str) -> bool {
    s.len() == HYPHENATED_LEN && Uuid::try_parse(s).is_ok()
}

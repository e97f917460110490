//! # Canonicalizer
//!
//! Maps a key to its machine form once its kind is resolved:
//!
//! | Kind | Canonical form |
//! |------|----------------|
//! | CPF, CNPJ | digits only |
//! | random, email | trimmed input, unchanged |
//! | phone | E.164 (`+5511987654321`) |
//!
//! Canonicalization never changes what the key identifies, only how it is
//! spelled.

use tracing::{debug, warn};

use crate::classify::classify;
use crate::kind::KeyKind;
use crate::recognize::national_id::strip_to_digits;
use crate::recognize::{guard, Recognizers};
use crate::region::Region;
use crate::resolve::{resolve, Resolution};

/// Classify, disambiguate with `hint`, and canonicalize `raw`.
///
/// Returns `None` when the key matches nothing, is ambiguous, the hint
/// is not among the matches, or the phone parser faults.
pub fn canonicalize<R: Recognizers + ?Sized>(
    recognizers: &R,
    region: Region,
    raw: &str,
    hint: Option<KeyKind>,
) -> Option<String> {
    let key = raw.trim();
    match resolve(&classify(recognizers, region, key), hint) {
        Resolution::Resolved(kind) => canonical_form(recognizers, region, key, kind),
        Resolution::Unresolved(reason) => {
            debug!(%reason, ?hint, "pix key not canonicalized");
            None
        }
    }
}

/// Canonical form of an already-trimmed `key` known to be of `kind`.
pub fn canonical_form<R: Recognizers + ?Sized>(
    recognizers: &R,
    region: Region,
    key: &str,
    kind: KeyKind,
) -> Option<String> {
    match kind {
        KeyKind::NationalIdPerson | KeyKind::NationalIdOrg => Some(strip_to_digits(key)),
        KeyKind::RandomToken | KeyKind::EmailAddress => Some(key.to_string()),
        KeyKind::PhoneNumber => {
            match guard(kind, || recognizers.parse_phone_number(key, region)).and_then(|parsed| parsed) {
                Ok(parsed) => Some(parsed.full_international),
                Err(fault) => {
                    warn!(%fault, "phone canonicalization failed");
                    None
                }
            }
        }
    }
}

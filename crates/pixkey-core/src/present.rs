//! # Presenter
//!
//! Renders the human form of a key. The key is canonicalized first and
//! the canonical string is classified again, because canonicalization can
//! change which kinds match: `85966078033` is both a CPF and a phone
//! number, while its phone canonical form `+5585966078033` is only a phone
//! number.
//!
//! | Kind | Display form |
//! |------|--------------|
//! | CPF | `036.376.490-98` |
//! | CNPJ | `84.870.394/0001-29` |
//! | random, email | canonical form, unchanged |
//! | phone | national notation at home, international notation otherwise |

use tracing::{debug, warn};

use crate::canonical::canonicalize;
use crate::classify::classify;
use crate::kind::KeyKind;
use crate::recognize::national_id::{mask_cnpj, mask_cpf};
use crate::recognize::{guard, Recognizers};
use crate::region::Region;
use crate::resolve::{resolve, Resolution};

/// Canonicalize `raw`, reclassify the canonical form, and render it.
pub fn present<R: Recognizers + ?Sized>(
    recognizers: &R,
    region: Region,
    raw: &str,
    hint: Option<KeyKind>,
) -> Option<String> {
    let canonical = canonicalize(recognizers, region, raw, hint)?;
    present_canonical(recognizers, region, &canonical, hint)
}

/// Reclassify an already canonical key and render it.
pub fn present_canonical<R: Recognizers + ?Sized>(
    recognizers: &R,
    region: Region,
    canonical: &str,
    hint: Option<KeyKind>,
) -> Option<String> {
    match resolve(&classify(recognizers, region, canonical), hint) {
        Resolution::Resolved(kind) => display_form(recognizers, region, canonical, kind),
        Resolution::Unresolved(reason) => {
            debug!(%reason, ?hint, "canonical pix key not formatted");
            None
        }
    }
}

/// Display form of `canonical`, known to be of `kind`.
pub fn display_form<R: Recognizers + ?Sized>(
    recognizers: &R,
    region: Region,
    canonical: &str,
    kind: KeyKind,
) -> Option<String> {
    match kind {
        KeyKind::NationalIdPerson => mask_cpf(canonical),
        KeyKind::NationalIdOrg => mask_cnpj(canonical),
        KeyKind::RandomToken | KeyKind::EmailAddress => Some(canonical.to_string()),
        KeyKind::PhoneNumber => {
            match guard(kind, || recognizers.parse_phone_number(canonical, region)).and_then(|parsed| parsed) {
                Ok(parsed) if parsed.region == Some(region) => Some(parsed.national_display),
                Ok(parsed) => Some(parsed.international_display),
                Err(fault) => {
                    warn!(%fault, "phone formatting failed");
                    None
                }
            }
        }
    }
}

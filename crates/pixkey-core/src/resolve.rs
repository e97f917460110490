//! # Disambiguator
//!
//! Reduces a [`Classification`] to at most one kind. A single match wins
//! regardless of hint. With several matches the caller must name one of
//! them; the disambiguator never guesses, because storing a CPF under the
//! phone kind (or the reverse) routes a payment to the wrong place.

use serde::Serialize;

use crate::classify::Classification;
use crate::kind::KeyKind;

/// Why a classification did not resolve to a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "reason", content = "hint")]
pub enum UnresolvedReason {
    /// No recognizer matched.
    NoMatch,
    /// Several kinds matched and no hint was given.
    Ambiguous,
    /// Several kinds matched and the hint named none of them.
    HintNotMatched(KeyKind),
    /// The key resolved but the phone parser could not canonicalize or
    /// render it.
    RenderFailed,
}

impl std::fmt::Display for UnresolvedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoMatch => f.write_str("no recognizer matched"),
            Self::Ambiguous => f.write_str("several kinds matched and no hint was given"),
            Self::HintNotMatched(hint) => write!(f, "hint {hint} is not among the matched kinds"),
            Self::RenderFailed => f.write_str("key resolved but could not be rendered"),
        }
    }
}

/// Outcome of disambiguation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Resolved(KeyKind),
    Unresolved(UnresolvedReason),
}

impl Resolution {
    /// The resolved kind, if any.
    pub fn kind(&self) -> Option<KeyKind> {
        match self {
            Self::Resolved(kind) => Some(*kind),
            Self::Unresolved(_) => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }
}

/// Resolve `classification` to a single kind using the optional `hint`.
pub fn resolve(classification: &Classification, hint: Option<KeyKind>) -> Resolution {
    match (classification.kinds(), hint) {
        ([], _) => Resolution::Unresolved(UnresolvedReason::NoMatch),
        ([only], _) => Resolution::Resolved(*only),
        (_, Some(hint)) if classification.contains(hint) => Resolution::Resolved(hint),
        (_, Some(hint)) => Resolution::Unresolved(UnresolvedReason::HintNotMatched(hint)),
        (_, None) => Resolution::Unresolved(UnresolvedReason::Ambiguous),
    }
}

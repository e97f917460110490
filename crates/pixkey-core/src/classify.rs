//! # Classifier
//!
//! Runs every recognizer over the trimmed input and collects the kinds it
//! satisfies. Recognizers are evaluated independently and sequentially in
//! [`KeyKind::all`] order, so the result order never depends on which
//! recognizers matched. Overlaps are expected: an 11-digit string can be
//! both a valid CPF and a valid domestic mobile number.

use serde::Serialize;
use tracing::{debug, warn};

use crate::kind::KeyKind;
use crate::recognize::{guard, Recognizers};
use crate::region::Region;

/// Ordered set of kinds a key satisfies, in priority order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Classification(Vec<KeyKind>);

impl Classification {
    /// The matching kinds in priority order.
    pub fn kinds(&self) -> &[KeyKind] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, kind: KeyKind) -> bool {
        self.0.contains(&kind)
    }

    /// Highest-priority match. Informational only: the disambiguator never
    /// picks it on its own when there is more than one match.
    pub fn first(&self) -> Option<KeyKind> {
        self.0.first().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = KeyKind> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<KeyKind> for Classification {
    /// Collects into priority order, dropping duplicates.
    fn from_iter<I: IntoIterator<Item = KeyKind>>(iter: I) -> Self {
        let mut kinds: Vec<KeyKind> = iter.into_iter().collect();
        kinds.sort();
        kinds.dedup();
        Self(kinds)
    }
}

impl IntoIterator for Classification {
    type Item = KeyKind;
    type IntoIter = std::vec::IntoIter<KeyKind>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tags: Vec<&str> = self.0.iter().map(KeyKind::as_str).collect();
        write!(f, "[{}]", tags.join(", "))
    }
}

/// Classify `raw` (trimmed) against every recognizer.
///
/// Never fails. A recognizer that panics is logged and counted as "no
/// match" for its kind only.
pub fn classify<R: Recognizers + ?Sized>(recognizers: &R, region: Region, raw: &str) -> Classification {
    let key = raw.trim();
    let mut kinds = Vec::with_capacity(KeyKind::all().len());
    for &kind in KeyKind::all() {
        match guard(kind, || recognizers.matches(kind, key, region)) {
            Ok(true) => kinds.push(kind),
            Ok(false) => {}
            Err(fault) => warn!(%fault, "recognizer fault contained, treating as no match"),
        }
    }
    let classification = Classification(kinds);
    debug!(%region, matches = %classification, "classified pix key");
    classification
}

//! # Engine
//!
//! [`PixKeyEngine`] bundles a recognizer set with a default dialing region
//! and exposes the three public operations:
//!
//! - `validate`: every kind the key satisfies, in priority order
//! - `normalize`: canonical form, or `None` if unresolved
//! - `format`: display form, or `None` if unresolved
//!
//! The engine holds no mutable state. It is `Send + Sync` whenever its
//! recognizer set is, and one instance can serve any number of threads.

use serde::Serialize;

use crate::canonical::{canonical_form, canonicalize};
use crate::classify::{classify, Classification};
use crate::config::PixKeyConfig;
use crate::kind::KeyKind;
use crate::present::{present, present_canonical};
use crate::recognize::{Recognizers, StandardRecognizers};
use crate::region::Region;
use crate::resolve::{resolve, Resolution};

/// A key whose kind, canonical form and display form are all known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PixKey {
    pub kind: KeyKind,
    pub canonical: String,
    pub display: String,
}

/// Classification pipeline over a recognizer set.
#[derive(Debug, Clone, Default)]
pub struct PixKeyEngine<R = StandardRecognizers> {
    recognizers: R,
    region: Region,
}

impl PixKeyEngine {
    /// Standard recognizers, default region `BR`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Standard recognizers with a different default region.
    pub fn with_region(region: Region) -> Self {
        Self::with_recognizers(StandardRecognizers, region)
    }

    /// Standard recognizers configured from `config`.
    pub fn from_config(config: &PixKeyConfig) -> Self {
        Self::with_region(config.default_region)
    }
}

impl<R: Recognizers> PixKeyEngine<R> {
    /// Engine over a caller-supplied recognizer set.
    pub fn with_recognizers(recognizers: R, region: Region) -> Self {
        Self { recognizers, region }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn recognizers(&self) -> &R {
        &self.recognizers
    }

    /// Every kind `raw` satisfies, in priority order. Empty if none.
    pub fn validate(&self, raw: &str) -> Classification {
        classify(&self.recognizers, self.region, raw)
    }

    /// Classify `raw` and disambiguate with `hint`.
    pub fn resolve(&self, raw: &str, hint: Option<KeyKind>) -> Resolution {
        resolve(&self.validate(raw), hint)
    }

    /// Canonical form of `raw`, or `None` if it does not resolve to a
    /// single kind.
    pub fn normalize(&self, raw: &str, hint: Option<KeyKind>) -> Option<String> {
        canonicalize(&self.recognizers, self.region, raw, hint)
    }

    /// Display form of `raw`, or `None` if it, or its canonical form, does
    /// not resolve to a single kind.
    pub fn format(&self, raw: &str, hint: Option<KeyKind>) -> Option<String> {
        present(&self.recognizers, self.region, raw, hint)
    }

    /// Resolve, canonicalize and render `raw` in one pass.
    ///
    /// Follows the same rules as [`normalize`](Self::normalize) followed by
    /// [`format`](Self::format); `None` if either would be `None`.
    pub fn analyze(&self, raw: &str, hint: Option<KeyKind>) -> Option<PixKey> {
        let key = raw.trim();
        let kind = self.resolve(key, hint).kind()?;
        let canonical = canonical_form(&self.recognizers, self.region, key, kind)?;
        let display = present_canonical(&self.recognizers, self.region, &canonical, hint)?;
        Some(PixKey {
            kind,
            canonical,
            display,
        })
    }
}

/// [`PixKeyEngine::validate`] with standard recognizers and region `BR`.
pub fn validate(raw: &str) -> Classification {
    PixKeyEngine::new().validate(raw)
}

/// [`PixKeyEngine::normalize`] with standard recognizers and region `BR`.
pub fn normalize(raw: &str, hint: Option<KeyKind>) -> Option<String> {
    PixKeyEngine::new().normalize(raw, hint)
}

/// [`PixKeyEngine::format`] with standard recognizers and region `BR`.
pub fn format(raw: &str, hint: Option<KeyKind>) -> Option<String> {
    PixKeyEngine::new().format(raw, hint)
}

//! # pixkey-core: PIX Key Classification
//!
//! Decides which kind of PIX key a free-form string is, then produces its
//! canonical (machine) form and its display (human) form.
//!
//! ```text
//! raw ─► classify ─► resolve(hint) ─► canonicalize ─┬─► normalize
//!                                                   └─► classify ─► resolve(hint) ─► present ─► format
//! ```
//!
//! ## Key Design Principles
//!
//! 1. **Overlaps are reported, never guessed.** [`validate`] returns every
//!    kind a key satisfies. When more than one matches, `normalize` and
//!    `format` require a hint naming one of them and return `None`
//!    otherwise.
//!
//! 2. **Single `KeyKind` enum.** Five variants in a fixed priority order;
//!    every per-kind transformation is an exhaustive `match`.
//!
//! 3. **Recognizers are injected.** The pipeline consumes the
//!    [`Recognizers`] trait. [`StandardRecognizers`] ships CPF/CNPJ
//!    checksums, UUID, email and libphonenumber-backed phone rules.
//!
//! 4. **Collaborator faults are contained.** A recognizer or phone parser
//!    that panics is treated as "not this kind" and logged; no public
//!    operation panics on any input.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - No I/O besides explicit configuration loading; every operation is a
//!   pure function of its arguments.
//!
//! ## Example
//!
//! ```
//! use pixkey_core::{format, normalize, validate, KeyKind};
//!
//! assert_eq!(
//!     validate("85966078033").kinds(),
//!     &[KeyKind::NationalIdPerson, KeyKind::PhoneNumber]
//! );
//! assert_eq!(normalize("85966078033", None), None);
//! assert_eq!(
//!     normalize("85966078033", Some(KeyKind::PhoneNumber)).as_deref(),
//!     Some("+5585966078033")
//! );
//! assert_eq!(format("03637649098", None).as_deref(), Some("036.376.490-98"));
//! ```

#![forbid(unsafe_code)]

pub mod canonical;
pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod kind;
pub mod present;
pub mod recognize;
pub mod region;
pub mod resolve;

// Re-export primary types for ergonomic imports.
pub use classify::Classification;
pub use config::{PixKeyConfig, REGION_ENV_VAR};
pub use engine::{format, normalize, validate, PixKey, PixKeyEngine};
pub use error::{PixKeyError, RecognizerError};
pub use kind::{
    KeyKind, KEY_KIND_COUNT, PIX_KEY_CNPJ, PIX_KEY_CPF, PIX_KEY_EMAIL, PIX_KEY_PHONE, PIX_KEY_RANDOM,
};
pub use recognize::{ParsedPhone, Recognizers, StandardRecognizers};
pub use region::Region;
pub use resolve::{Resolution, UnresolvedReason};

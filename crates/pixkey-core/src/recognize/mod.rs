//! # Recognizers
//!
//! The per-kind validity tests consumed by the classification pipeline.
//! The pipeline only sees the [`Recognizers`] capability trait, so the
//! checksum, UUID, email and dialing-plan logic can be swapped or faked
//! independently of classification and disambiguation.
//!
//! [`StandardRecognizers`] is the production set:
//!
//! - CPF / CNPJ: mod-11 check digits ([`national_id`])
//! - random key: hyphenated UUID text ([`random`])
//! - email: HTML5 email syntax via `validator` ([`email`])
//! - phone: mobile numbers per libphonenumber metadata via `phonenumber` ([`phone`])
//!
//! ## Fault containment
//!
//! A recognizer may panic on inputs that superficially match its own
//! format (dialing-plan parsers are the usual suspects). [`guard`] runs a
//! collaborator call behind `catch_unwind` and turns a panic into a
//! [`RecognizerError::Panicked`], which the pipeline then treats as "not
//! this kind".

pub mod email;
pub mod national_id;
pub mod phone;
pub mod random;

use std::panic::{catch_unwind, AssertUnwindSafe};

use serde::Serialize;

use crate::error::RecognizerError;
use crate::kind::KeyKind;
use crate::region::Region;

/// A phone number parsed against a default region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedPhone {
    /// E.164 form: `+`, country code, national significant number.
    pub full_international: String,
    /// Region the number belongs to, when the metadata can tell.
    pub region: Option<Region>,
    /// Calling code, e.g. `55`.
    pub country_code: u16,
    /// National display notation, e.g. `(11) 98765-4321`.
    pub national_display: String,
    /// International display notation, e.g. `+55 11 98765 4321`.
    pub international_display: String,
}

/// Capability set: one validity test per PIX key kind, plus the phone
/// parser used for canonicalization and display.
pub trait Recognizers {
    /// Checksum-valid CPF, bare or punctuated.
    fn is_national_id_person(&self, s: &str) -> bool;

    /// Checksum-valid CNPJ, bare or punctuated.
    fn is_national_id_org(&self, s: &str) -> bool;

    /// Hyphenated UUID text.
    fn is_random_token(&self, s: &str) -> bool;

    /// Syntactically valid email address.
    fn is_email_address(&self, s: &str) -> bool;

    /// Valid mobile number when dialed from `region`.
    fn is_phone_number(&self, s: &str, region: Region) -> bool;

    /// Parse a phone number dialed from `region`.
    fn parse_phone_number(&self, s: &str, region: Region) -> Result<ParsedPhone, RecognizerError>;

    /// Dispatch to the recognizer for `kind`.
    fn matches(&self, kind: KeyKind, s: &str, region: Region) -> bool {
        match kind {
            KeyKind::NationalIdPerson => self.is_national_id_person(s),
            KeyKind::NationalIdOrg => self.is_national_id_org(s),
            KeyKind::RandomToken => self.is_random_token(s),
            KeyKind::PhoneNumber => self.is_phone_number(s, region),
            KeyKind::EmailAddress => self.is_email_address(s),
        }
    }
}

impl<R: Recognizers + ?Sized> Recognizers for &R {
    fn is_national_id_person(&self, s: &str) -> bool {
        (**self).is_national_id_person(s)
    }

    fn is_national_id_org(&self, s: &str) -> bool {
        (**self).is_national_id_org(s)
    }

    fn is_random_token(&self, s: &str) -> bool {
        (**self).is_random_token(s)
    }

    fn is_email_address(&self, s: &str) -> bool {
        (**self).is_email_address(s)
    }

    fn is_phone_number(&self, s: &str, region: Region) -> bool {
        (**self).is_phone_number(s, region)
    }

    fn parse_phone_number(&self, s: &str, region: Region) -> Result<ParsedPhone, RecognizerError> {
        (**self).parse_phone_number(s, region)
    }
}

/// The production recognizer set.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardRecognizers;

impl Recognizers for StandardRecognizers {
    fn is_national_id_person(&self, s: &str) -> bool {
        national_id::is_cpf(s)
    }

    fn is_national_id_org(&self, s: &str) -> bool {
        national_id::is_cnpj(s)
    }

    fn is_random_token(&self, s: &str) -> bool {
        random::is_random_key(s)
    }

    fn is_email_address(&self, s: &str) -> bool {
        email::is_email(s)
    }

    fn is_phone_number(&self, s: &str, region: Region) -> bool {
        phone::is_phone_number(s, region)
    }

    fn parse_phone_number(&self, s: &str, region: Region) -> Result<ParsedPhone, RecognizerError> {
        phone::parse(s, region)
    }
}

/// Run a collaborator call, converting a panic into [`RecognizerError::Panicked`].
pub fn guard<T>(kind: KeyKind, f: impl FnOnce() -> T) -> Result<T, RecognizerError> {
    catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "non-string panic payload".to_string()
        };
        RecognizerError::Panicked {
            kind: kind.as_str(),
            message,
        }
    })
}

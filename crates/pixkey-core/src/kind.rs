//! # PIX Key Kinds
//!
//! The closed set of PIX key kinds. The declaration order of [`KeyKind`]
//! is also the evaluation order of the classifier and therefore the order
//! of entries in every multi-match result:
//!
//! | # | Kind | Tag |
//! |---|------|-----|
//! | 1 | National ID, person (CPF) | `cpf` |
//! | 2 | National ID, organization (CNPJ) | `cnpj` |
//! | 3 | Random key (UUID) | `random` |
//! | 4 | Phone number | `phone` |
//! | 5 | Email address | `email` |
//!
//! Every `match` on `KeyKind` is exhaustive; adding a kind forces every
//! canonicalization and display arm to handle it.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::PixKeyError;

/// Tag for [`KeyKind::NationalIdPerson`].
pub const PIX_KEY_CPF: &str = "cpf";
/// Tag for [`KeyKind::NationalIdOrg`].
pub const PIX_KEY_CNPJ: &str = "cnpj";
/// Tag for [`KeyKind::RandomToken`].
pub const PIX_KEY_RANDOM: &str = "random";
/// Tag for [`KeyKind::EmailAddress`].
pub const PIX_KEY_EMAIL: &str = "email";
/// Tag for [`KeyKind::PhoneNumber`].
pub const PIX_KEY_PHONE: &str = "phone";

/// Number of PIX key kinds.
pub const KEY_KIND_COUNT: usize = 5;

/// One of the five PIX key kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum KeyKind {
    /// Individual taxpayer registry number (CPF).
    #[serde(rename = "cpf")]
    NationalIdPerson,
    /// Legal entity registry number (CNPJ).
    #[serde(rename = "cnpj")]
    NationalIdOrg,
    /// Random key: hyphenated text form of a 128-bit UUID.
    #[serde(rename = "random")]
    RandomToken,
    /// Mobile phone number.
    #[serde(rename = "phone")]
    PhoneNumber,
    /// Email address.
    #[serde(rename = "email")]
    EmailAddress,
}

impl KeyKind {
    /// All kinds in classifier priority order.
    pub fn all() -> &'static [KeyKind; KEY_KIND_COUNT] {
        &[
            Self::NationalIdPerson,
            Self::NationalIdOrg,
            Self::RandomToken,
            Self::PhoneNumber,
            Self::EmailAddress,
        ]
    }

    /// Stable lowercase tag, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NationalIdPerson => PIX_KEY_CPF,
            Self::NationalIdOrg => PIX_KEY_CNPJ,
            Self::RandomToken => PIX_KEY_RANDOM,
            Self::PhoneNumber => PIX_KEY_PHONE,
            Self::EmailAddress => PIX_KEY_EMAIL,
        }
    }

    /// Whether the canonical form of this kind is digits only.
    pub fn is_national_id(&self) -> bool {
        matches!(self, Self::NationalIdPerson | Self::NationalIdOrg)
    }
}

impl std::fmt::Display for KeyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyKind {
    type Err = PixKeyError;

    /// Parse a kind from its tag. Tags are case-sensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            PIX_KEY_CPF => Ok(Self::NationalIdPerson),
            PIX_KEY_CNPJ => Ok(Self::NationalIdOrg),
            PIX_KEY_RANDOM => Ok(Self::RandomToken),
            PIX_KEY_PHONE => Ok(Self::PhoneNumber),
            PIX_KEY_EMAIL => Ok(Self::EmailAddress),
            other => Err(PixKeyError::UnknownKind(other.to_string())),
        }
    }
}

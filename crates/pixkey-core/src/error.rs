//! # Error Types
//!
//! Two error families, split by who is expected to see them:
//!
//! - [`PixKeyError`] is returned to callers for invalid arguments (an
//!   unknown kind tag, a malformed region code) and configuration problems.
//! - [`RecognizerError`] describes a fault inside a recognizer or the phone
//!   parser. These are contained by the pipeline and surface only as "no
//!   match" or "canonicalization failed"; they never leave
//!   `validate` / `normalize` / `format`.
//!
//! Expected outcomes (no match, ambiguous key, hint not in the match set)
//! are not errors at all. They are `None` or an empty classification.

use thiserror::Error;

/// Caller-facing error type for the PIX key library.
#[derive(Error, Debug)]
pub enum PixKeyError {
    /// A kind tag outside the five known PIX key kinds.
    #[error("unknown pix key kind: {0:?} (expected one of cpf, cnpj, random, email, phone)")]
    UnknownKind(String),

    /// A region code that is not two ASCII letters, or that the phone
    /// metadata does not know.
    #[error("invalid region code: {0:?}")]
    InvalidRegion(String),

    /// Configuration could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error while reading configuration.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Fault raised by a recognizer collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecognizerError {
    /// The phone parser rejected the input.
    #[error("phone number parse failed for {input:?}: {reason}")]
    PhoneParse {
        /// Input handed to the parser.
        input: String,
        /// Parser-supplied reason.
        reason: String,
    },

    /// The recognizer panicked; the panic was caught at the boundary.
    #[error("{kind} recognizer panicked: {message}")]
    Panicked {
        /// Tag of the kind whose recognizer faulted.
        kind: &'static str,
        /// Panic payload, when it was a string.
        message: String,
    },
}

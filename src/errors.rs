//! Error taxonomy for identifier generation and assignment.
//!
//! Both operations in this crate are pure, local computations, so there is no
//! recovery logic here: every failure propagates immediately to the caller.
//! Retrying on entropy failure, if desired, belongs to the host save pipeline.

use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur while generating or assigning an identifier.
///
/// A failed generation must surface to the host so the save can be retried or
/// aborted; the field slot is never left holding a placeholder or a partially
/// generated value.
#[derive(Debug, Error, Diagnostic)]
pub enum AssignError {
    /// The entropy or time source could not be read.
    #[error("identifier generation unavailable: {message}")]
    #[diagnostic(
        code(idfill::generator::unavailable),
        help("The process entropy source failed. Abort the save and retry; never persist a placeholder identifier.")
    )]
    GeneratorUnavailable { message: String },

    /// An unrecognized algorithm name was supplied at a validating boundary.
    #[error("unrecognized identifier algorithm: {input:?}")]
    #[diagnostic(
        code(idfill::algorithm::invalid),
        help("Valid algorithm names are \"random_uuid\" and \"fallback\".")
    )]
    InvalidAlgorithm { input: String },
}

impl AssignError {
    /// Shorthand for an entropy-source failure with a message.
    pub fn unavailable<M: Into<String>>(message: M) -> Self {
        AssignError::GeneratorUnavailable {
            message: message.into(),
        }
    }
}

//! Errors raised by the measurement engine

use larder_core::{LarderError, Number, NumberError};
use thiserror::Error;
use crate::{Kind, System};

/// Failures from parsing, arithmetic and rendering.
///
/// None of these are retryable; callers decide whether to skip one
/// ingredient or abandon a whole document.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeasureError {
    #[error("cannot parse {input:?} as a measurement, expected '<amount> <unit>'")]
    Malformed { input: String },

    #[error("could not recognize {unit:?} as a unit in {input:?}")]
    UnrecognizedUnit { unit: String, input: String },

    #[error("amount token {token:?} is not a number: {source}")]
    NonNumericMagnitude {
        token: String,
        #[source]
        source: NumberError,
    },

    #[error("{magnitude} base units times {factor} is not a whole number of base units")]
    PrecisionLoss { magnitude: i64, factor: Number },

    #[error("{left} is incompatible with {right}")]
    KindMismatch { left: Kind, right: Kind },

    #[error("quantity too large to represent")]
    Overflow,

    #[error("{magnitude} base units of {kind} cannot be expressed in {system} units")]
    Unrepresentable { kind: Kind, system: System, magnitude: i64 },
}

/// Defects in a unit table, detected while building a registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("spelling {spelling:?} is claimed by both {first} and {second}")]
    DuplicateSpelling {
        spelling: &'static str,
        first: &'static str,
        second: &'static str,
    },

    #[error("unit {unit} has an empty spelling")]
    EmptySpelling { unit: &'static str },

    #[error("unit {unit} has non-positive base multiple {base}")]
    InvalidBase { unit: &'static str, base: i64 },

    #[error("{first} and {second} both display {kind} in {system} at {base} base units")]
    AmbiguousMagnitude {
        kind: Kind,
        system: System,
        base: i64,
        first: &'static str,
        second: &'static str,
    },
}

impl From<MeasureError> for LarderError {
    fn from(err: MeasureError) -> Self {
        let message = err.to_string();
        match err {
            MeasureError::Malformed { .. } => LarderError::malformed(message),
            MeasureError::UnrecognizedUnit { unit, .. } => LarderError::unrecognized_unit(&unit),
            MeasureError::NonNumericMagnitude { .. } => LarderError::non_numeric(message),
            MeasureError::PrecisionLoss { .. } => LarderError::precision_loss(message),
            MeasureError::KindMismatch { .. } => LarderError::kind_mismatch(message),
            MeasureError::Overflow => LarderError::overflow(),
            MeasureError::Unrepresentable { .. } => LarderError::unrepresentable(message),
        }
    }
}

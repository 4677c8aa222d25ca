//! Quantity type - a kind and an exact count of base units

use std::fmt;
use serde::{Serialize, Deserialize};
use larder_core::Number;
use crate::{Kind, UnitDef, MeasureError};

/// A measured amount of volume or weight.
///
/// The magnitude is an integer count of the kind's base unit, so sums
/// and scalings are exact. Quantities are immutable values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Quantity {
    kind: Kind,
    magnitude: i64,
}

impl Quantity {
    pub const fn new(kind: Kind, magnitude: i64) -> Self {
        Quantity { kind, magnitude }
    }

    pub const fn volume(magnitude: i64) -> Self {
        Quantity::new(Kind::Volume, magnitude)
    }

    pub const fn weight(magnitude: i64) -> Self {
        Quantity::new(Kind::Weight, magnitude)
    }

    /// `amount` of `unit`, e.g. 3/4 of a gallon.
    ///
    /// Fails with `PrecisionLoss` unless the result is a whole number of
    /// base units.
    pub fn of(unit: &UnitDef, amount: &Number) -> Result<Self, MeasureError> {
        Quantity::new(unit.kind, unit.base).scale(amount)
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Count of base units
    pub fn magnitude(&self) -> i64 {
        self.magnitude
    }

    /// Check if two quantities can be combined
    pub fn is_compatible(&self, other: &Quantity) -> bool {
        self.kind == other.kind
    }

    /// Add two quantities of the same kind
    pub fn add(&self, other: &Quantity) -> Result<Quantity, MeasureError> {
        if !self.is_compatible(other) {
            return Err(MeasureError::KindMismatch { left: self.kind, right: other.kind });
        }

        let magnitude = self.magnitude
            .checked_add(other.magnitude)
            .ok_or(MeasureError::Overflow)?;
        Ok(Quantity::new(self.kind, magnitude))
    }

    /// Multiply by an exact rational factor
    pub fn scale(&self, factor: &Number) -> Result<Quantity, MeasureError> {
        let product = Number::from_i64(self.magnitude).mul(factor);
        if !product.is_integer() {
            return Err(MeasureError::PrecisionLoss {
                magnitude: self.magnitude,
                factor: factor.clone(),
            });
        }

        let magnitude = product.to_i64().ok_or(MeasureError::Overflow)?;
        Ok(Quantity::new(self.kind, magnitude))
    }

    /// Sum a sequence of quantities; None for an empty sequence
    pub fn sum<'a>(quantities: impl IntoIterator<Item = &'a Quantity>) -> Result<Option<Quantity>, MeasureError> {
        let mut total: Option<Quantity> = None;
        for q in quantities {
            total = Some(match total {
                Some(t) => t.add(q)?,
                None => *q,
            });
        }
        Ok(total)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} base units of {}", self.magnitude, self.kind)
    }
}

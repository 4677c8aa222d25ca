//! Unit definitions with their output policy

use std::fmt;
use serde::Serialize;
use crate::{Kind, System};

/// How the renderer may use a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutputPolicy {
    /// Input only; never chosen by the renderer
    pub suppress: bool,
    /// May render as "N unit" for any N
    pub multiples: bool,
    /// May render a non-integral remainder as a decimal
    pub fractions: bool,
}

impl OutputPolicy {
    /// Accepted on input, never rendered (deciliter, fluid ounce, pint)
    pub const NEVER: OutputPolicy = OutputPolicy { suppress: true, multiples: false, fractions: false };

    /// Rendered only as exactly one of itself, by label ("1/8 tsp")
    pub const SINGLE: OutputPolicy = OutputPolicy { suppress: false, multiples: false, fractions: false };

    /// Rendered as "N unit"
    pub const MULTIPLES: OutputPolicy = OutputPolicy { suppress: false, multiples: true, fractions: false };

    pub const fn with_fractions(self) -> OutputPolicy {
        OutputPolicy { fractions: true, ..self }
    }
}

/// A single unit of a kind, as measured in that kind's base unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitDef {
    /// Descriptive name, used in diagnostics and listings
    pub name: &'static str,
    pub kind: Kind,
    pub system: System,
    /// How many base units equal one of this unit
    pub base: i64,
    /// Accepted input spellings (case-sensitive)
    pub spellings: &'static [&'static str],
    /// Display label
    pub label: &'static str,
    /// Decimal places for a fractional remainder in this unit
    pub decimal_places: u32,
    pub output: OutputPolicy,
}

impl UnitDef {
    pub fn is_output(&self) -> bool {
        !self.output.suppress
    }

    pub fn is_input(&self) -> bool {
        !self.spellings.is_empty()
    }
}

impl fmt::Display for UnitDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

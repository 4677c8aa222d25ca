//! Quantity kinds and display systems

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};

/// The closed set of measurable kinds.
///
/// Quantities of different kinds are never arithmetically compatible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Volume,
    Weight,
}

impl Kind {
    pub const ALL: [Kind; 2] = [Kind::Volume, Kind::Weight];

    pub fn name(&self) -> &'static str {
        match self {
            Kind::Volume => "volume",
            Kind::Weight => "weight",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "volume" => Ok(Kind::Volume),
            "weight" | "mass" => Ok(Kind::Weight),
            other => Err(format!("unknown kind '{}', expected volume or weight", other)),
        }
    }
}

/// Display convention used when rendering a quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum System {
    Metric,
    Imperial,
}

impl System {
    pub const ALL: [System; 2] = [System::Metric, System::Imperial];

    pub fn name(&self) -> &'static str {
        match self {
            System::Metric => "metric",
            System::Imperial => "imperial",
        }
    }

    /// The system to fall back to when this one cannot show a quantity
    pub fn other(&self) -> System {
        match self {
            System::Metric => System::Imperial,
            System::Imperial => System::Metric,
        }
    }
}

impl fmt::Display for System {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for System {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" => Ok(System::Metric),
            "imperial" | "us" => Ok(System::Imperial),
            other => Err(format!("unknown system '{}', expected metric or imperial", other)),
        }
    }
}

//! Unit registry: spelling lookup and per-system render order
//!
//! Built once from static tables and never mutated afterwards, so a
//! single registry can be shared by reference across threads.

use std::collections::HashMap;
use std::sync::LazyLock;
use tracing::debug;
use crate::{Kind, System, UnitDef, Quantity, MeasureError, RegistryError};
use crate::units::STANDARD_TABLES;
use crate::{parse, render};

static STANDARD: LazyLock<UnitRegistry> = LazyLock::new(|| {
    UnitRegistry::build(&STANDARD_TABLES)
        .unwrap_or_else(|e| panic!("shipped unit tables are defective: {}", e))
});

/// Registry of all known units
#[derive(Debug)]
pub struct UnitRegistry {
    lookup: HashMap<&'static str, &'static UnitDef>,
    ordered: HashMap<(Kind, System), Vec<&'static UnitDef>>,
    all: Vec<&'static UnitDef>,
}

impl UnitRegistry {
    /// Build a registry from unit tables, checking the tables for defects.
    pub fn build(tables: &[&'static [UnitDef]]) -> Result<Self, RegistryError> {
        let mut lookup: HashMap<&'static str, &'static UnitDef> = HashMap::new();
        let mut ordered: HashMap<(Kind, System), Vec<&'static UnitDef>> = HashMap::new();
        let mut all = Vec::new();

        for &table in tables {
            for unit in table {
                if unit.base <= 0 {
                    return Err(RegistryError::InvalidBase { unit: unit.name, base: unit.base });
                }

                for &spelling in unit.spellings {
                    if spelling.is_empty() {
                        return Err(RegistryError::EmptySpelling { unit: unit.name });
                    }
                    if let Some(existing) = lookup.insert(spelling, unit) {
                        return Err(RegistryError::DuplicateSpelling {
                            spelling,
                            first: existing.name,
                            second: unit.name,
                        });
                    }
                }

                if unit.is_output() {
                    ordered.entry((unit.kind, unit.system)).or_default().push(unit);
                }
                all.push(unit);
            }
        }

        for ((kind, system), units) in ordered.iter_mut() {
            units.sort_by(|a, b| b.base.cmp(&a.base));
            if let Some(pair) = units.windows(2).find(|w| w[0].base == w[1].base) {
                return Err(RegistryError::AmbiguousMagnitude {
                    kind: *kind,
                    system: *system,
                    base: pair[0].base,
                    first: pair[0].name,
                    second: pair[1].name,
                });
            }
        }

        debug!(spellings = lookup.len(), units = all.len(), "unit registry built");

        Ok(UnitRegistry { lookup, ordered, all })
    }

    /// The shipped volume and weight tables, built on first use
    pub fn standard() -> &'static UnitRegistry {
        &STANDARD
    }

    /// Get a unit by one of its accepted spellings
    pub fn lookup(&self, spelling: &str) -> Option<&'static UnitDef> {
        self.lookup.get(spelling).copied()
    }

    /// Renderable units of a kind in a system, largest first
    pub fn ordered_units(&self, kind: Kind, system: System) -> &[&'static UnitDef] {
        self.ordered
            .get(&(kind, system))
            .map(|units| units.as_slice())
            .unwrap_or(&[])
    }

    /// Every registered unit in table order
    pub fn units(&self) -> &[&'static UnitDef] {
        &self.all
    }

    /// Parse text such as "1 1/2 cups" into a quantity
    pub fn parse(&self, text: &str) -> Result<Quantity, MeasureError> {
        parse::parse_measurement(self, text)
    }

    /// Render a quantity using the units of one system
    pub fn render(&self, quantity: &Quantity, system: System) -> Result<String, MeasureError> {
        render::render_greedy(self.ordered_units(quantity.kind(), system), quantity, system)
    }
}

//! Ingredients - an item and one or more alternative measurements
//!
//! "bread flour: 20 1/2 oz or 3 3/4 c" is one ingredient with a weight
//! and a volume. Merging adds measurements pairwise, so both
//! ingredients must list the same kinds in the same order.
//!
//! Rendering never fails outright. A measurement the requested system
//! cannot show is shown in the other system, and the caller gets a
//! warning saying so.

use serde::{Serialize, Deserialize};
use tracing::warn;
use larder_core::{LarderError, Number, Severity};
use larder_units::{Quantity, System, UnitRegistry};

use crate::helpers::normalize_ingredient;
use crate::KitchenError;

/// Rendered text plus a warning for each measurement not shown as asked
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rendered {
    pub text: String,
    pub warnings: Vec<LarderError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub item: String,
    pub measurements: Vec<Quantity>,
}

impl Ingredient {
    pub fn new(item: impl Into<String>, measurements: Vec<Quantity>) -> Self {
        Ingredient { item: item.into(), measurements }
    }

    /// Build an ingredient from measurement text such as ["2 cups", "250 g"]
    pub fn parse<S: AsRef<str>>(
        registry: &UnitRegistry,
        item: &str,
        texts: &[S],
    ) -> Result<Self, KitchenError> {
        if texts.is_empty() {
            return Err(KitchenError::NoMeasurements { item: item.to_string() });
        }

        let measurements = texts
            .iter()
            .map(|text| {
                registry
                    .parse(text.as_ref())
                    .map_err(|e| KitchenError::measurement(item, e))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Ingredient::new(item, measurements))
    }

    /// Name used to decide whether two ingredients are the same item
    pub fn key(&self) -> String {
        normalize_ingredient(&self.item)
    }

    pub fn same_item(&self, other: &Ingredient) -> bool {
        self.key() == other.key()
    }

    /// Add `other`'s measurements into this one.
    ///
    /// All or nothing: on error `self` is unchanged.
    pub fn merge(&mut self, other: &Ingredient) -> Result<(), KitchenError> {
        if !self.same_item(other) {
            return Err(KitchenError::ItemMismatch {
                left: self.item.clone(),
                right: other.item.clone(),
            });
        }
        if self.measurements.len() != other.measurements.len() {
            return Err(KitchenError::MeasurementCount {
                item: self.item.clone(),
                left: self.measurements.len(),
                right: other.measurements.len(),
            });
        }

        let merged = self
            .measurements
            .iter()
            .zip(&other.measurements)
            .map(|(a, b)| a.add(b).map_err(|e| KitchenError::measurement(&self.item, e)))
            .collect::<Result<Vec<_>, _>>()?;

        self.measurements = merged;
        Ok(())
    }

    /// Multiply every measurement by `factor`
    pub fn scale(&self, factor: &Number) -> Result<Ingredient, KitchenError> {
        let measurements = self
            .measurements
            .iter()
            .map(|q| q.scale(factor).map_err(|e| KitchenError::measurement(&self.item, e)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Ingredient::new(self.item.clone(), measurements))
    }

    /// "20 1/2 oz or 3 3/4 c" style text for the measurements.
    ///
    /// Falls back to the other system per measurement; one that neither
    /// system can show is left out. With nothing left the text is "-".
    pub fn render(&self, registry: &UnitRegistry, system: System) -> Rendered {
        let mut parts = Vec::with_capacity(self.measurements.len());
        let mut warnings = Vec::new();

        for quantity in &self.measurements {
            let err = match registry.render(quantity, system) {
                Ok(text) => {
                    parts.push(text);
                    continue;
                }
                Err(e) => e,
            };

            let fallback = system.other();
            let warning = LarderError::from(err)
                .for_ingredient(&self.item)
                .with_severity(Severity::Warning);

            match registry.render(quantity, fallback) {
                Ok(text) => {
                    warn!(item = %self.item, %system, %fallback, "measurement shown in other system");
                    parts.push(text);
                    warnings.push(warning.with_note(format!("shown in {}", fallback)));
                }
                Err(_) => {
                    warn!(item = %self.item, magnitude = quantity.magnitude(), "measurement left out");
                    warnings.push(warning.with_note("left out"));
                }
            }
        }

        let text = if parts.is_empty() { "-".to_string() } else { parts.join(" or ") };
        Rendered { text, warnings }
    }
}

//! Larder Units - Kitchen Measurements
//!
//! Parses measurement text, does exact arithmetic on the resulting
//! quantities and renders them back in metric or imperial units.
//!
//! Kinds:
//! - Volume (ml, l, tsp, T, c, qt, gal, etc.)
//! - Weight (mg, g, kg, oz, lb)
//!
//! Magnitudes are integer counts of a per-kind base unit, so nothing
//! is ever rounded until a decimal is printed.

mod kind;
mod unit;
mod units;
mod registry;
mod quantity;
mod parse;
mod render;
mod error;

pub use kind::{Kind, System};
pub use unit::{UnitDef, OutputPolicy};
pub use units::{volume, weight, VOLUME_UNITS, WEIGHT_UNITS, STANDARD_TABLES};
pub use registry::UnitRegistry;
pub use quantity::Quantity;
pub use parse::parse_magnitude;
pub use error::{MeasureError, RegistryError};

#[cfg(test)]
mod tests {
    use super::*;
    use larder_core::Number;

    #[test]
    fn test_parse_add_render() {
        let registry = UnitRegistry::standard();
        let a = registry.parse("1 cup").unwrap();
        let b = registry.parse("1 tsp").unwrap();
        let sum = a.add(&b).unwrap();
        assert_eq!(registry.render(&sum, System::Imperial).unwrap(), "1 c, 1 tsp");
    }

    #[test]
    fn test_parse_scale_render() {
        let registry = UnitRegistry::standard();
        let q = registry.parse("1 1/2 lb").unwrap();
        let doubled = q.scale(&Number::from_i64(2)).unwrap();
        assert_eq!(registry.render(&doubled, System::Imperial).unwrap(), "3 lb");
        assert_eq!(registry.render(&doubled, System::Metric).unwrap(), "1.361 kg");
    }

    #[test]
    fn test_mixed_kinds_rejected() {
        let registry = UnitRegistry::standard();
        let flour = registry.parse("2 cups").unwrap();
        let butter = registry.parse("4 oz").unwrap();
        assert!(matches!(flour.add(&butter), Err(MeasureError::KindMismatch { .. })));
    }

    #[test]
    fn test_registry_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<UnitRegistry>();
        assert_send_sync::<Quantity>();
    }
}

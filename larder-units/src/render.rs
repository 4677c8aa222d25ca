//! Greedy rendering - "1 c, 1 tsp" rather than "49 tsp"
//!
//! Units are visited largest first. Each one takes as many whole copies
//! of itself as its output policy allows, and the leftover moves on to
//! smaller units. Only a final leftover in a unit that allows decimals
//! is shown as a decimal, rounded exactly.

use larder_core::Number;
use crate::{Quantity, System, UnitDef, MeasureError};

/// Render a quantity using `units`, which must be sorted largest first
pub fn render_greedy(
    units: &[&UnitDef],
    quantity: &Quantity,
    system: System,
) -> Result<String, MeasureError> {
    let unrepresentable = || MeasureError::Unrepresentable {
        kind: quantity.kind(),
        system,
        magnitude: quantity.magnitude(),
    };

    let mut remainder = quantity.magnitude();
    if remainder <= 0 {
        return Err(unrepresentable());
    }

    let mut tokens: Vec<String> = Vec::new();

    for unit in units {
        let ui = unit.base;

        if remainder == ui && !unit.output.multiples {
            tokens.push(unit.label.to_string());
            remainder = 0;
        } else if ui <= remainder
            && unit.output.multiples
            && (remainder % ui == 0 || unit.decimal_places == 0)
        {
            let count = remainder / ui;
            tokens.push(format!("{} {}", count, unit.label));
            remainder -= count * ui;
            if remainder == 0 {
                break;
            }
            continue;
        } else if (ui < remainder && unit.decimal_places > 0) || unit.output.fractions {
            let amount = Number::from_ratio(remainder, ui).map_err(|_| unrepresentable())?;
            let text = amount.as_decimal(unit.decimal_places);
            // a nonzero remainder may not print as zero
            if text.bytes().all(|b| b == b'0' || b == b'.') {
                return Err(unrepresentable());
            }
            tokens.push(format!("{} {}", text, unit.label));
            remainder = 0;
        } else {
            continue;
        }

        break;
    }

    if tokens.is_empty() || remainder != 0 {
        return Err(unrepresentable());
    }

    Ok(tokens.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UnitRegistry;
    use crate::units::{volume, weight};

    fn imperial(q: Quantity) -> String {
        UnitRegistry::standard().render(&q, System::Imperial).unwrap()
    }

    fn metric(q: Quantity) -> String {
        UnitRegistry::standard().render(&q, System::Metric).unwrap()
    }

    #[test]
    fn test_render_imperial_volume() {
        assert_eq!(imperial(Quantity::volume(volume::EIGHTH_TEASPOON)), "1/8 tsp");
        assert_eq!(imperial(Quantity::volume(volume::TEASPOON)), "1 tsp");
        assert_eq!(imperial(Quantity::volume(volume::TABLESPOON * 2)), "2 T");
        assert_eq!(imperial(Quantity::volume(volume::THREE_QUARTER_CUP)), "3/4 c");
        assert_eq!(imperial(Quantity::volume(volume::CUP + volume::TEASPOON)), "1 c, 1 tsp");
        assert_eq!(imperial(Quantity::volume(volume::GALLON + volume::CUP)), "1 gal, 1 c");
    }

    #[test]
    fn test_render_imperial_weight() {
        assert_eq!(imperial(Quantity::weight(weight::OUNCE)), "1 oz");
        assert_eq!(imperial(Quantity::weight(weight::OUNCE / 2)), "0.5 oz");
        assert_eq!(imperial(Quantity::weight(weight::OUNCE * 16 * 3 + weight::OUNCE * 8)), "3 lb, 8 oz");
        assert_eq!(imperial(Quantity::weight(weight::OUNCE * 3 / 2)), "1.5 oz");
        assert_eq!(imperial(Quantity::weight(weight::POUND + weight::OUNCE / 2)), "1 lb, 0.5 oz");
    }

    #[test]
    fn test_render_metric() {
        assert_eq!(metric(Quantity::volume(volume::TEASPOON)), "5 ml");
        assert_eq!(metric(Quantity::volume(volume::MILLILITER * 3)), "3 ml");
        assert_eq!(metric(Quantity::volume(volume::MILLILITER * 451)), "451 ml");
        assert_eq!(metric(Quantity::volume(volume::MILLILITER * 1451)), "1.451 l");
        assert_eq!(metric(Quantity::volume(volume::LITER * 2)), "2 l");
        assert_eq!(metric(Quantity::volume(volume::EIGHTH_TEASPOON)), "0.6 ml");
        assert_eq!(metric(Quantity::weight(weight::GRAM * 250)), "250 g");
        assert_eq!(metric(Quantity::weight(weight::OUNCE)), "28.4 g");
        assert_eq!(metric(Quantity::weight(weight::MILLIGRAM * 500)), "500 mg");
        assert_eq!(metric(Quantity::weight(weight::KILOGRAM * 3 / 2)), "1.500 kg");
    }

    #[test]
    fn test_larger_units_come_first() {
        let q = Quantity::volume(volume::QUART * 2 + volume::CUP * 3 + volume::TABLESPOON * 2);
        assert_eq!(imperial(q), "2 qt, 3 c, 2 T");
    }

    #[test]
    fn test_suppressed_units_never_rendered() {
        // A pint renders as cups, a fluid ounce as tablespoons
        assert_eq!(imperial(Quantity::volume(volume::PINT)), "2 c");
        assert_eq!(imperial(Quantity::volume(volume::FLUID_OUNCE)), "2 T");
        assert_eq!(metric(Quantity::volume(volume::DECILITER)), "100 ml");
    }

    #[test]
    fn test_scaled_multiples_render_as_multiples() {
        let registry = UnitRegistry::standard();
        for (text, n, expected) in [
            ("1 c", 3, "3 c"),
            ("1 oz", 5, "5 oz"),
            ("1 tsp", 2, "2 tsp"),
            ("1 gal", 4, "4 gal"),
            ("1 ml", 451, "451 ml"),
        ] {
            let q = registry.parse(text).unwrap();
            let scaled = q.scale(&Number::from_i64(n)).unwrap();
            assert_eq!(imperial_or_metric(registry, text, &scaled), expected);
        }
    }

    fn imperial_or_metric(registry: &UnitRegistry, text: &str, q: &Quantity) -> String {
        let system = if text.ends_with("ml") { System::Metric } else { System::Imperial };
        registry.render(q, system).unwrap()
    }

    #[test]
    fn test_zero_and_negative_are_unrepresentable() {
        let registry = UnitRegistry::standard();
        for q in [Quantity::volume(0), Quantity::weight(-8)] {
            assert!(matches!(
                registry.render(&q, System::Imperial),
                Err(MeasureError::Unrepresentable { .. })
            ));
        }
    }

    #[test]
    fn test_leftover_below_smallest_unit_is_unrepresentable() {
        let registry = UnitRegistry::standard();
        // 3 base units: smaller than an eighth teaspoon
        assert_eq!(
            registry.render(&Quantity::volume(3), System::Imperial),
            Err(MeasureError::Unrepresentable {
                kind: crate::Kind::Volume,
                system: System::Imperial,
                magnitude: 3,
            })
        );
        // A teaspoon plus 3/8 teaspoon cannot be finished in spoons
        let q = Quantity::volume(volume::TEASPOON + volume::EIGHTH_TEASPOON * 3);
        assert!(registry.render(&q, System::Imperial).is_err());
        // The metric side can always fall back to decimal milliliters
        assert_eq!(registry.render(&q, System::Metric).unwrap(), "6.9 ml");
    }

    #[test]
    fn test_remainder_rounding_to_zero_is_unrepresentable() {
        let registry = UnitRegistry::standard();
        let q = Quantity::weight(weight::MILLIGRAM);
        assert!(matches!(
            registry.render(&q, System::Imperial),
            Err(MeasureError::Unrepresentable { magnitude: 8, .. })
        ));
        assert_eq!(registry.render(&q, System::Metric).unwrap(), "1 mg");
        // A tenth of an ounce still shows
        assert_eq!(imperial(Quantity::weight(weight::OUNCE / 10)), "0.1 oz");
    }
}

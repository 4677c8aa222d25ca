//! Measurement parsing - "1 1/2 cups", "2.5 oz", "3/4 gal"
//!
//! The amount is an integer, a decimal, a fraction, or a whole number
//! and a fraction separated by whitespace. Everything after the amount
//! is the unit, so multi-word spellings such as "fl oz" resolve too.

use tracing::debug;
use larder_core::Number;
use crate::{Quantity, MeasureError, UnitRegistry};

/// Parse measurement text against a registry
pub fn parse_measurement(registry: &UnitRegistry, text: &str) -> Result<Quantity, MeasureError> {
    let malformed = || MeasureError::Malformed { input: text.to_string() };

    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() < 2 {
        return Err(malformed());
    }

    // "2 1/2 cups": a whole number followed by a fraction
    let amount_words = if words.len() > 2 && is_digits(words[0]) && words[1].contains('/') {
        2
    } else {
        1
    };

    let unit_text = words[amount_words..].join(" ");
    if unit_text.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(malformed());
    }

    let amount = parse_magnitude(&words[..amount_words])?;

    let unit = registry.lookup(&unit_text).ok_or_else(|| MeasureError::UnrecognizedUnit {
        unit: unit_text.clone(),
        input: text.to_string(),
    })?;

    let quantity = Quantity::of(unit, &amount)?;
    debug!(input = text, amount = %amount, unit = unit.name, magnitude = quantity.magnitude(), "parsed measurement");
    Ok(quantity)
}

/// Parse amount tokens exactly and sum them: ["2", "1/2"] -> 5/2
pub fn parse_magnitude(tokens: &[&str]) -> Result<Number, MeasureError> {
    let mut total = Number::from_i64(0);
    for token in tokens {
        let value = Number::from_str(token).map_err(|source| MeasureError::NonNumericMagnitude {
            token: token.to_string(),
            source,
        })?;
        total = total.add(&value);
    }
    Ok(total)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{volume, weight};

    fn parse(text: &str) -> Result<Quantity, MeasureError> {
        UnitRegistry::standard().parse(text)
    }

    fn ratio(num: i64, den: i64) -> Number {
        Number::from_ratio(num, den).unwrap()
    }

    #[test]
    fn test_parse_magnitude() {
        assert_eq!(parse_magnitude(&["1/2"]).unwrap(), ratio(1, 2));
        assert_eq!(parse_magnitude(&["1", "1/2"]).unwrap(), ratio(3, 2));
        assert_eq!(parse_magnitude(&["2.5"]).unwrap(), ratio(5, 2));
        assert_eq!(parse_magnitude(&["3"]).unwrap(), Number::from_i64(3));
    }

    #[test]
    fn test_parse_known_literals() {
        assert_eq!(parse("1/2 tsp").unwrap(), Quantity::volume(volume::HALF_TEASPOON));
        assert_eq!(
            parse("1 1/2 tsp").unwrap(),
            Quantity::volume(volume::TEASPOON + volume::HALF_TEASPOON)
        );
        assert_eq!(parse("3/4 gallons").unwrap(), Quantity::volume(volume::QUART * 3));
        assert_eq!(parse("16 oz").unwrap(), Quantity::weight(weight::POUND));
        assert_eq!(parse("1/2 lb").unwrap(), Quantity::weight(weight::OUNCE * 8));
    }

    #[test]
    fn test_parse_whitespace_tolerance() {
        assert_eq!(parse("  2 cups \t").unwrap(), Quantity::volume(volume::CUP * 2));
        assert_eq!(parse("2   1/4\tcups").unwrap(), Quantity::volume(volume::CUP * 9 / 4));
    }

    #[test]
    fn test_parse_decimal_amounts() {
        assert_eq!(parse("2.5 oz").unwrap(), Quantity::weight(weight::OUNCE * 5 / 2));
        assert_eq!(parse(".5 c").unwrap(), Quantity::volume(volume::HALF_CUP));
    }

    #[test]
    fn test_parse_multi_word_and_punctuated_units() {
        assert_eq!(parse("2 fl oz").unwrap(), Quantity::volume(volume::FLUID_OUNCE * 2));
        assert_eq!(parse("1 fluid ounce").unwrap(), Quantity::volume(volume::FLUID_OUNCE));
        assert_eq!(parse("1 1/2 fl qt").unwrap(), Quantity::volume(volume::QUART * 3 / 2));
        assert_eq!(parse("1 tbsp.").unwrap(), Quantity::volume(volume::TABLESPOON));
        assert_eq!(parse("2 #").unwrap(), Quantity::weight(weight::POUND * 2));
    }

    #[test]
    fn test_parse_input_only_units() {
        assert_eq!(parse("1 pint").unwrap(), Quantity::volume(volume::PINT));
        assert_eq!(parse("3 dl").unwrap(), Quantity::volume(volume::DECILITER * 3));
    }

    #[test]
    fn test_parse_metric() {
        assert_eq!(parse("250 g").unwrap(), Quantity::weight(weight::GRAM * 250));
        assert_eq!(parse("1.5 L").unwrap(), Quantity::volume(volume::LITER * 3 / 2));
        assert_eq!(parse("5 mL").unwrap(), Quantity::volume(volume::TEASPOON));
    }

    #[test]
    fn test_parse_unrecognized_unit() {
        assert!(matches!(
            parse("3 zorp"),
            Err(MeasureError::UnrecognizedUnit { ref unit, .. }) if unit == "zorp"
        ));
        // Spellings are case-sensitive
        assert!(matches!(parse("1 CUP"), Err(MeasureError::UnrecognizedUnit { .. })));
        // Output labels are not input spellings
        assert!(matches!(parse("1 1/8 tsp tsp"), Err(MeasureError::UnrecognizedUnit { .. })));
    }

    #[test]
    fn test_parse_non_numeric_magnitude() {
        assert!(matches!(
            parse("abc tsp"),
            Err(MeasureError::NonNumericMagnitude { ref token, .. }) if token == "abc"
        ));
        assert!(matches!(parse("1/0 cup"), Err(MeasureError::NonNumericMagnitude { .. })));
        assert!(matches!(parse("2 x/y cups"), Err(MeasureError::NonNumericMagnitude { .. })));
        assert!(matches!(parse("-1 cup"), Err(MeasureError::NonNumericMagnitude { .. })));
    }

    #[test]
    fn test_parse_malformed() {
        for text in ["", "   ", "tsp", "3", "1/2tsp", "1 1/2", "3 4 cups"] {
            assert!(
                matches!(parse(text), Err(MeasureError::Malformed { .. })),
                "expected malformed for {:?}",
                text
            );
        }
    }

    #[test]
    fn test_parse_precision_guard() {
        // A third of an eighth teaspoon would split the base unit
        assert!(matches!(
            parse("1/3 tsp"),
            Err(MeasureError::PrecisionLoss { .. })
        ));
        assert!(matches!(
            parse("1/7 mg"),
            Err(MeasureError::PrecisionLoss { .. })
        ));
    }
}

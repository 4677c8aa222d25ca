//! Larder Core - Fundamental types
//!
//! This crate provides the core types used throughout Larder:
//! - `Number`: Exact rational numbers
//! - `LarderError`: Structured errors for tool clients

mod number;
mod error;

pub use number::{Number, NumberError};
pub use error::{LarderError, ErrorContext, Severity, codes};

#[cfg(test)]
mod tests {
    use super::*;

    mod number_tests {
        use super::*;

        #[test]
        fn test_from_i64() {
            let n = Number::from_i64(42);
            assert_eq!(n.to_i64(), Some(42));
        }

        #[test]
        fn test_from_str_integer() {
            let n = Number::from_str("123").unwrap();
            assert_eq!(n.to_i64(), Some(123));
        }

        #[test]
        fn test_from_str_decimal_is_exact() {
            let n = Number::from_str("2.5").unwrap();
            assert!(!n.is_integer());
            assert_eq!(n, Number::from_ratio(5, 2).unwrap());

            let n = Number::from_str(".5").unwrap();
            assert_eq!(n, Number::from_ratio(1, 2).unwrap());
        }

        #[test]
        fn test_from_str_fraction() {
            let n = Number::from_str("1/3").unwrap();
            assert!(!n.is_integer());
            assert_eq!(n.to_string(), "1/3");

            // Stored in lowest terms
            let n = Number::from_str("6/8").unwrap();
            assert_eq!(n, Number::from_ratio(3, 4).unwrap());
        }

        #[test]
        fn test_from_str_rejects_garbage() {
            for s in ["abc", "", "1.2.3", "1/2/3", "-1", "1e3", "1 / 2", "/2", "3/"] {
                assert!(
                    matches!(Number::from_str(s), Err(NumberError::ParseError(_))),
                    "expected parse error for {:?}",
                    s
                );
            }
        }

        #[test]
        fn test_from_str_zero_denominator() {
            assert_eq!(Number::from_str("1/0"), Err(NumberError::DivisionByZero));
        }

        #[test]
        fn test_from_ratio_normalizes_sign() {
            let n = Number::from_ratio(3, -4).unwrap();
            assert!(n.is_negative());
            assert_eq!(n.to_string(), "-3/4");
            assert_eq!(Number::from_ratio(1, 0), Err(NumberError::DivisionByZero));
        }

        #[test]
        fn test_arithmetic() {
            let half = Number::from_ratio(1, 2).unwrap();
            let third = Number::from_ratio(1, 3).unwrap();
            assert_eq!(half.add(&third), Number::from_ratio(5, 6).unwrap());
            assert_eq!(half.mul(&third), Number::from_ratio(1, 6).unwrap());
        }

        #[test]
        fn test_to_i64() {
            assert_eq!(Number::from_ratio(8, 2).unwrap().to_i64(), Some(4));
            assert_eq!(Number::from_ratio(1, 2).unwrap().to_i64(), None);

            let huge = Number::from_i64(i64::MAX).mul(&Number::from_i64(4));
            assert!(huge.is_integer());
            assert_eq!(huge.to_i64(), None);
        }

        #[test]
        fn test_as_decimal() {
            assert_eq!(Number::from_ratio(1451, 1000).unwrap().as_decimal(3), "1.451");
            assert_eq!(Number::from_ratio(1, 2).unwrap().as_decimal(1), "0.5");
            assert_eq!(Number::from_ratio(3, 2).unwrap().as_decimal(3), "1.500");
            assert_eq!(Number::from_ratio(1, 16).unwrap().as_decimal(2), "0.06");
            assert_eq!(Number::from_ratio(1, 3).unwrap().as_decimal(1), "0.3");
            assert_eq!(Number::from_ratio(5, 2).unwrap().as_decimal(0), "3");
            assert_eq!(Number::from_ratio(-5, 4).unwrap().as_decimal(1), "-1.3");
        }

        #[test]
        fn test_serde_as_string() {
            let n = Number::from_ratio(3, 2).unwrap();
            let json = serde_json::to_string(&n).unwrap();
            assert_eq!(json, "\"3/2\"");
            let back: Number = serde_json::from_str(&json).unwrap();
            assert_eq!(back, n);
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn test_number_error_conversion() {
            let err: LarderError = NumberError::ParseError("abc".to_string()).into();
            assert_eq!(err.code, codes::NON_NUMERIC);
            assert!(err.message.contains("abc"));
        }

        #[test]
        fn test_context_builders() {
            let err = LarderError::kind_mismatch("volume vs weight")
                .in_recipe("bread")
                .in_section("dough")
                .for_ingredient("flour")
                .with_note("while building shopping list");

            let ctx = err.context.as_ref().unwrap();
            assert_eq!(ctx.recipe.as_deref(), Some("bread"));
            assert_eq!(ctx.section.as_deref(), Some("dough"));
            assert_eq!(ctx.ingredient.as_deref(), Some("flour"));
            assert_eq!(ctx.notes.len(), 1);
            assert_eq!(err.severity, Severity::Error);
        }

        #[test]
        fn test_display_includes_code_and_suggestion() {
            let err = LarderError::unrecognized_unit("zorp");
            let text = err.to_string();
            assert!(text.starts_with("[UNRECOGNIZED_UNIT]"));
            assert!(text.contains("suggestion"));
        }

        #[test]
        fn test_warning_severity() {
            let warning = LarderError::unrepresentable("55 base units of volume")
                .for_ingredient("yeast")
                .with_severity(Severity::Warning);
            let json = serde_json::to_value(&warning).unwrap();
            assert_eq!(json["severity"], "warning");
            assert_eq!(json["context"]["ingredient"], "yeast");
        }

        #[test]
        fn test_serialized_shape() {
            let err = LarderError::overflow();
            let json = serde_json::to_value(&err).unwrap();
            assert_eq!(json["code"], "OVERFLOW");
            assert_eq!(json["severity"], "error");
            assert!(json.get("context").is_none());
        }
    }
}

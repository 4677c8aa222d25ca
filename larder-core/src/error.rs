//! Structured errors for tool clients
//!
//! Library crates raise typed errors; at the server boundary they are
//! converted into `LarderError`, which carries a machine-readable code,
//! a message and an optional suggestion.

use crate::NumberError;
use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const MALFORMED_INPUT: &str = "MALFORMED_INPUT";
    pub const UNRECOGNIZED_UNIT: &str = "UNRECOGNIZED_UNIT";
    pub const NON_NUMERIC: &str = "NON_NUMERIC";
    pub const PRECISION_LOSS: &str = "PRECISION_LOSS";
    pub const KIND_MISMATCH: &str = "KIND_MISMATCH";
    pub const OVERFLOW: &str = "OVERFLOW";
    pub const UNREPRESENTABLE: &str = "UNREPRESENTABLE";
    pub const INGREDIENT_MISMATCH: &str = "INGREDIENT_MISMATCH";
    pub const DOCUMENT_ERROR: &str = "DOCUMENT_ERROR";
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
}

/// Severity level of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Result produced, but part of it could not be shown
    Warning,
    /// The requested operation failed
    Error,
}

/// Where in a recipe an error occurred
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ingredient: Option<String>,

    /// Propagation notes
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub notes: Vec<String>,
}

/// Structured error sent over the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LarderError {
    /// Machine-readable error code
    pub code: String,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Where the error occurred
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<ErrorContext>,

    pub severity: Severity,
}

impl LarderError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            suggestion: None,
            context: None,
            severity: Severity::Error,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Builder: set recipe context
    pub fn in_recipe(mut self, recipe: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.recipe = Some(recipe.into());
        self
    }

    /// Builder: set section context
    pub fn in_section(mut self, section: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.section = Some(section.into());
        self
    }

    /// Builder: set ingredient context
    pub fn for_ingredient(mut self, ingredient: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.ingredient = Some(ingredient.into());
        self
    }

    /// Builder: add propagation note
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        let ctx = self.context.get_or_insert_with(ErrorContext::default);
        ctx.notes.push(note.into());
        self
    }

    /// Builder: set severity
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    // ========== Common Error Constructors ==========

    pub fn malformed(details: impl Into<String>) -> Self {
        Self::new(codes::MALFORMED_INPUT, details)
            .with_suggestion("Write measurements as '<amount> <unit>', e.g. '1 1/2 cups'")
    }

    pub fn unrecognized_unit(unit: &str) -> Self {
        Self::new(codes::UNRECOGNIZED_UNIT, format!("Unrecognized unit: {}", unit))
            .with_suggestion("Use list_units to see accepted spellings")
    }

    pub fn non_numeric(details: impl Into<String>) -> Self {
        Self::new(codes::NON_NUMERIC, details)
            .with_suggestion("Amounts may be integers, decimals, fractions or '2 1/2'")
    }

    pub fn precision_loss(details: impl Into<String>) -> Self {
        Self::new(codes::PRECISION_LOSS, details)
            .with_suggestion("Pick a factor that divides the amount evenly")
    }

    pub fn kind_mismatch(details: impl Into<String>) -> Self {
        Self::new(codes::KIND_MISMATCH, details)
            .with_suggestion("Volume and weight cannot be combined")
    }

    pub fn overflow() -> Self {
        Self::new(codes::OVERFLOW, "Numeric overflow: quantity too large")
    }

    pub fn unrepresentable(details: impl Into<String>) -> Self {
        Self::new(codes::UNREPRESENTABLE, details)
            .with_suggestion("Try the other measurement system")
    }

    pub fn ingredient_mismatch(details: impl Into<String>) -> Self {
        Self::new(codes::INGREDIENT_MISMATCH, details)
    }

    pub fn document(details: impl Into<String>) -> Self {
        Self::new(codes::DOCUMENT_ERROR, details)
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::new(codes::NOT_FOUND, format!("Not found: {}", what.into()))
    }

    pub fn invalid_argument(details: impl Into<String>) -> Self {
        Self::new(codes::INVALID_ARGUMENT, details)
    }
}

impl std::fmt::Display for LarderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for LarderError {}

impl From<NumberError> for LarderError {
    fn from(err: NumberError) -> Self {
        match err {
            NumberError::ParseError(s) => Self::non_numeric(format!("Invalid number: {}", s)),
            NumberError::DivisionByZero => Self::non_numeric("Division by zero"),
        }
    }
}

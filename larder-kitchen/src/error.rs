//! Errors raised while building, merging and loading recipes

use std::io;
use std::path::PathBuf;
use larder_core::LarderError;
use larder_units::MeasureError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum KitchenError {
    #[error("{item}: {source}")]
    Measurement {
        item: String,
        #[source]
        source: MeasureError,
    },

    #[error("cannot merge ingredient {right:?} into {left:?}")]
    ItemMismatch { left: String, right: String },

    #[error("cannot merge {item:?}: {left} measurements against {right}")]
    MeasurementCount { item: String, left: usize, right: usize },

    #[error("recipe {title:?} does not say how many it serves")]
    MissingServings { title: String },

    #[error("cannot scale from {from} to {to} servings")]
    InvalidServings { from: u32, to: u32 },

    #[error("{arg} must be positive, got {value}")]
    InvalidFactor { arg: String, value: String },

    #[error("section {section:?} has an ingredient with no name")]
    EmptyIngredient { section: String },

    #[error("ingredient {item:?} has no measurements")]
    NoMeasurements { item: String },

    #[error("invalid recipe document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl KitchenError {
    /// Attach an ingredient name to a measurement failure
    pub fn measurement(item: &str, source: MeasureError) -> Self {
        KitchenError::Measurement { item: item.to_string(), source }
    }
}

impl From<KitchenError> for LarderError {
    fn from(err: KitchenError) -> Self {
        let message = err.to_string();
        match err {
            KitchenError::Measurement { item, source } => {
                LarderError::from(source).for_ingredient(item)
            }
            KitchenError::ItemMismatch { right, .. } => {
                LarderError::ingredient_mismatch(message).for_ingredient(right)
            }
            KitchenError::MeasurementCount { item, .. } => {
                LarderError::ingredient_mismatch(message)
                    .for_ingredient(item)
                    .with_suggestion("Give every occurrence of an ingredient the same measurements")
            }
            KitchenError::MissingServings { title } => {
                LarderError::invalid_argument(message)
                    .in_recipe(title)
                    .with_suggestion("Scale by factor instead, or add \"servings\" to the recipe")
            }
            KitchenError::InvalidServings { .. } | KitchenError::InvalidFactor { .. } => {
                LarderError::invalid_argument(message)
            }
            KitchenError::EmptyIngredient { section } => {
                LarderError::document(message).in_section(section)
            }
            KitchenError::NoMeasurements { item } => {
                LarderError::document(message).for_ingredient(item)
            }
            KitchenError::Json(_) => LarderError::document(message),
            KitchenError::Io { source, .. } if source.kind() == io::ErrorKind::NotFound => {
                LarderError::not_found(message)
            }
            KitchenError::Io { .. } => LarderError::document(message),
        }
    }
}

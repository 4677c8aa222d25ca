//! Recipe documents - the JSON form recipes are stored in
//!
//! ```json
//! {
//!   "title": "Whole Wheat Rustic Italian Bread",
//!   "servings": 2,
//!   "sections": [{
//!     "name": "Biga",
//!     "ingredients": [["bread flour", "10 oz", "2 cups"]],
//!     "steps": ["Stir until combined"]
//!   }]
//! }
//! ```
//!
//! Each ingredient is the item name followed by one or more measurements.
//! Measurements stay as text until [`RecipeDocument::resolve`] runs them
//! through a unit registry.

use std::fs;
use std::path::Path;
use serde::{Serialize, Deserialize};
use tracing::info;
use larder_units::UnitRegistry;

use crate::{Ingredient, KitchenError, Recipe, Section};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDocument {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    #[serde(default)]
    pub sections: Vec<SectionDocument>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionDocument {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<Vec<String>>,
    #[serde(default)]
    pub steps: Vec<String>,
}

impl RecipeDocument {
    pub fn from_json_str(json: &str) -> Result<Self, KitchenError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, KitchenError> {
        let json = fs::read_to_string(path).map_err(|source| KitchenError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        RecipeDocument::from_json_str(&json)
    }

    /// Parse every measurement, producing a recipe
    pub fn resolve(&self, registry: &UnitRegistry) -> Result<Recipe, KitchenError> {
        let sections = self
            .sections
            .iter()
            .map(|s| s.resolve(registry))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Recipe {
            title: self.title.clone(),
            servings: self.servings,
            sections,
        })
    }
}

impl SectionDocument {
    fn resolve(&self, registry: &UnitRegistry) -> Result<Section, KitchenError> {
        let ingredients = self
            .ingredients
            .iter()
            .map(|fields| match fields.split_first() {
                Some((item, texts)) if !item.trim().is_empty() => {
                    Ingredient::parse(registry, item, texts)
                }
                _ => Err(KitchenError::EmptyIngredient { section: self.name.clone() }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Section {
            name: self.name.clone(),
            ingredients,
            steps: self.steps.clone(),
        })
    }
}

/// Read and resolve a recipe file
pub fn load_recipe(path: impl AsRef<Path>, registry: &UnitRegistry) -> Result<Recipe, KitchenError> {
    let path = path.as_ref();
    let recipe = RecipeDocument::from_path(path)?.resolve(registry)?;
    info!(
        path = %path.display(),
        title = %recipe.title,
        sections = recipe.sections.len(),
        "loaded recipe"
    );
    Ok(recipe)
}

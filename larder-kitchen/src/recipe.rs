//! Recipes and their sections

use serde::{Serialize, Deserialize};
use larder_core::Number;

use crate::helpers::{servings_factor, validate_positive};
use crate::{Ingredient, KitchenError, ShoppingList};

/// A titled group of ingredients and steps, e.g. "Biga" or "Dough"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<String>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Section { name: name.into(), ingredients: Vec::new(), steps: Vec::new() }
    }

    pub fn with_ingredient(mut self, ingredient: Ingredient) -> Self {
        self.ingredients.push(ingredient);
        self
    }

    pub fn with_step(mut self, step: impl Into<String>) -> Self {
        self.steps.push(step.into());
        self
    }

    pub fn scale(&self, factor: &Number) -> Result<Section, KitchenError> {
        let ingredients = self
            .ingredients
            .iter()
            .map(|i| i.scale(factor))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Section {
            name: self.name.clone(),
            ingredients,
            steps: self.steps.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub title: String,
    pub servings: Option<u32>,
    pub sections: Vec<Section>,
}

impl Recipe {
    pub fn new(title: impl Into<String>) -> Self {
        Recipe { title: title.into(), servings: None, sections: Vec::new() }
    }

    pub fn with_servings(mut self, servings: u32) -> Self {
        self.servings = Some(servings);
        self
    }

    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Every ingredient in section order
    pub fn ingredients(&self) -> impl Iterator<Item = &Ingredient> {
        self.sections.iter().flat_map(|s| s.ingredients.iter())
    }

    /// Ingredients merged across sections.
    ///
    /// Order is first appearance; each entry keeps the first spelling of
    /// its name. Any failed merge fails the whole list.
    pub fn shopping_list(&self) -> Result<Vec<Ingredient>, KitchenError> {
        let mut list = ShoppingList::new();
        list.add_recipe(self)?;
        Ok(list.into_items())
    }

    /// Scale every measurement by `factor`; nothing is scaled unless all can be
    pub fn scale(&self, factor: &Number) -> Result<Recipe, KitchenError> {
        validate_positive(factor, "factor")?;

        let sections = self
            .sections
            .iter()
            .map(|s| s.scale(factor))
            .collect::<Result<Vec<_>, _>>()?;

        // A fractional serving count is dropped rather than rounded
        let servings = self.servings.and_then(|n| {
            let scaled = Number::from_i64(i64::from(n)).mul(factor);
            if !scaled.is_integer() {
                return None;
            }
            scaled.to_i64().and_then(|s| u32::try_from(s).ok())
        });

        Ok(Recipe { title: self.title.clone(), servings, sections })
    }

    /// Scale to serve `to` instead of the recipe's own serving count
    pub fn scale_servings(&self, to: u32) -> Result<Recipe, KitchenError> {
        let from = self.servings.ok_or_else(|| KitchenError::MissingServings {
            title: self.title.clone(),
        })?;
        let factor = servings_factor(from, to)?;

        let mut scaled = self.scale(&factor)?;
        scaled.servings = Some(to);
        Ok(scaled)
    }
}

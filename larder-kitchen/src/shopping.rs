//! Shopping lists - ingredients merged by name across recipes

use serde::Serialize;
use tracing::warn;
use larder_core::LarderError;
use larder_units::{System, UnitRegistry};

use crate::{Ingredient, KitchenError, Recipe};

/// Shopping list text, one line per entry, with any rendering warnings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedLines {
    pub lines: Vec<String>,
    pub warnings: Vec<LarderError>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShoppingList {
    items: Vec<Ingredient>,
}

impl ShoppingList {
    pub fn new() -> Self {
        ShoppingList::default()
    }

    /// Merge into an existing entry with the same normalized name, or append
    pub fn add_ingredient(&mut self, ingredient: &Ingredient) -> Result<(), KitchenError> {
        match self.items.iter().position(|have| have.same_item(ingredient)) {
            Some(index) => self.items[index].merge(ingredient),
            None => {
                self.items.push(ingredient.clone());
                Ok(())
            }
        }
    }

    pub fn add_recipe(&mut self, recipe: &Recipe) -> Result<(), KitchenError> {
        for ingredient in recipe.ingredients() {
            if let Err(e) = self.add_ingredient(ingredient) {
                warn!(recipe = %recipe.title, item = %ingredient.item, error = %e, "ingredient merge failed");
                return Err(e);
            }
        }
        Ok(())
    }

    pub fn from_recipes(recipes: &[Recipe]) -> Result<Self, KitchenError> {
        let mut list = ShoppingList::new();
        for recipe in recipes {
            list.add_recipe(recipe)?;
        }
        Ok(list)
    }

    pub fn items(&self) -> &[Ingredient] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Ingredient> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// One "<item>: <m1> or <m2>" line per entry
    pub fn render_lines(&self, registry: &UnitRegistry, system: System) -> RenderedLines {
        let mut out = RenderedLines { lines: Vec::with_capacity(self.items.len()), warnings: Vec::new() };
        for item in &self.items {
            let rendered = item.render(registry, system);
            out.lines.push(format!("{}: {}", item.item, rendered.text));
            out.warnings.extend(rendered.warnings);
        }
        out
    }
}

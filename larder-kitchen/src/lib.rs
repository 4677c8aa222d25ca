//! Larder Kitchen - Recipes and Shopping Lists
//!
//! Builds on larder-units to work with whole recipes:
//! - Ingredients carrying alternative measurements (weight and volume)
//! - Sections and recipes, loaded from JSON documents
//! - Shopping lists that merge the same ingredient across sections and recipes
//! - Recipe scaling by factor or by servings
//!
//! For single measurements (parse, add, render), use larder-units.

mod helpers;
mod ingredient;
mod recipe;
mod shopping;
mod document;
mod error;

pub use helpers::normalize_ingredient;
pub use ingredient::{Ingredient, Rendered};
pub use recipe::{Recipe, Section};
pub use shopping::{RenderedLines, ShoppingList};
pub use document::{RecipeDocument, SectionDocument, load_recipe};
pub use error::KitchenError;

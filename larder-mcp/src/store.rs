//! Recipe documents on disk, addressed by file stem

use std::fs;
use std::path::PathBuf;
use tracing::warn;
use larder_core::LarderError;
use larder_kitchen::{load_recipe, Recipe, RecipeDocument};
use larder_units::UnitRegistry;

const EXTENSION: &str = "json";

#[derive(Debug, Clone)]
pub struct RecipeStore {
    root: PathBuf,
}

#[derive(Debug, Clone)]
pub struct RecipeEntry {
    pub name: String,
    pub path: String,
    pub title: Option<String>,
}

impl RecipeStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        RecipeStore { root: root.into() }
    }

    /// All `*.json` documents, sorted by name. A missing directory is empty.
    pub fn list(&self) -> Vec<RecipeEntry> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %self.root.display(), error = %e, "cannot read recipe directory");
                return Vec::new();
            }
        };

        let mut recipes: Vec<RecipeEntry> = entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|e| e == EXTENSION))
            .filter_map(|path| {
                let name = path.file_stem()?.to_str()?.to_string();
                let title = RecipeDocument::from_path(&path).ok().map(|doc| doc.title);
                Some(RecipeEntry {
                    name,
                    path: path.to_string_lossy().to_string(),
                    title,
                })
            })
            .collect();

        recipes.sort_by(|a, b| a.name.cmp(&b.name));
        recipes
    }

    pub fn names(&self) -> Vec<String> {
        self.list().into_iter().map(|r| r.name).collect()
    }

    /// Path of a named document; names may not leave the data directory
    pub fn path_for(&self, name: &str) -> Result<PathBuf, LarderError> {
        let name = name.trim();
        if name.is_empty() || name.contains(['/', '\\']) || name.starts_with('.') {
            return Err(LarderError::invalid_argument(format!("Invalid recipe name: {:?}", name)));
        }
        Ok(self.root.join(format!("{}.{}", name, EXTENSION)))
    }

    /// Raw JSON text of a document
    pub fn read_raw(&self, name: &str) -> Result<String, LarderError> {
        let path = self.path_for(name)?;
        fs::read_to_string(&path).map_err(|_| self.not_found(name))
    }

    /// Load and resolve a document
    pub fn load(&self, name: &str, registry: &UnitRegistry) -> Result<Recipe, LarderError> {
        let path = self.path_for(name)?;
        if !path.is_file() {
            return Err(self.not_found(name));
        }
        load_recipe(&path, registry).map_err(|e| LarderError::from(e).in_recipe(name))
    }

    fn not_found(&self, name: &str) -> LarderError {
        LarderError::not_found(format!("recipe '{}'", name))
            .in_recipe(name)
            .with_suggestion(format!("Available recipes: {}", self.names().join(", ")))
    }
}

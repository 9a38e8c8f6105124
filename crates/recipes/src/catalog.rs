//! Priority-ordered recipe catalog.
//!
//! Declaration order is priority: when the stash holds inserts that could
//! satisfy two recipes, the earlier one is processed first.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use sockforge_core::{DomainError, DomainResult};

use crate::recipe::Recipe;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Recipe>", into = "Vec<Recipe>")]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    /// Build a catalog, keeping the given order as priority order.
    pub fn new(recipes: Vec<Recipe>) -> DomainResult<Self> {
        let mut seen = HashSet::new();
        for recipe in &recipes {
            recipe.validate()?;
            if !seen.insert(recipe.name()) {
                return Err(DomainError::conflict(format!(
                    "duplicate recipe name '{}'",
                    recipe.name()
                )));
            }
        }
        Ok(Self { recipes })
    }

    /// The built-in runeword catalog.
    pub fn standard() -> Self {
        Self {
            recipes: vec![
                Recipe::builtin("TirTir", &["TirRune", "TirRune"], &["Helm"], 2),
                Recipe::builtin("Stealth", &["TalRune", "EthRune"], &["Armor"], 2),
                Recipe::builtin("Lore", &["OrtRune", "SolRune"], &["Helm"], 2),
                Recipe::builtin("Ancients Pledge", &["RalRune", "OrtRune", "TalRune"], &["Shield"], 3),
                Recipe::builtin("Smoke", &["NefRune", "LumRune"], &["Armor"], 2),
                Recipe::builtin(
                    "Spirit sword",
                    &["TalRune", "ThulRune", "OrtRune", "AmnRune"],
                    &["Sword"],
                    4,
                ),
                Recipe::builtin(
                    "Spirit shield",
                    &["TalRune", "ThulRune", "OrtRune", "AmnRune"],
                    &["Shield", "Auric Shields"],
                    4,
                ),
                Recipe::builtin(
                    "Insight",
                    &["RalRune", "TirRune", "TalRune", "SolRune"],
                    &["Polearm"],
                    4,
                ),
                Recipe::builtin("Leaf", &["TirRune", "RalRune"], &["Staff"], 2),
            ],
        }
    }

    /// Parse a catalog from a JSON array of recipes.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        serde_json::from_str(json).map_err(|e| DomainError::validation(format!("recipe catalog: {e}")))
    }

    /// Recipes in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &Recipe> {
        self.recipes.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.recipes.iter().map(Recipe::name)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

impl Default for RecipeCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<Recipe>> for RecipeCatalog {
    type Error = DomainError;

    fn try_from(recipes: Vec<Recipe>) -> Result<Self, Self::Error> {
        Self::new(recipes)
    }
}

impl From<RecipeCatalog> for Vec<Recipe> {
    fn from(catalog: RecipeCatalog) -> Self {
        catalog.recipes
    }
}

impl<'a> IntoIterator for &'a RecipeCatalog {
    type Item = &'a Recipe;
    type IntoIter = std::slice::Iter<'a, Recipe>;

    fn into_iter(self) -> Self::IntoIter {
        self.recipes.iter()
    }
}

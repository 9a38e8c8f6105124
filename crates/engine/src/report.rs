//! Outcome of one socketing pass.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use sockforge_core::{PassId, UnitId};

/// Per-recipe state within a pass.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecipeState {
    /// Still being retried against fresh snapshots.
    Attempting,
    /// A match attempt failed (or the per-pass bound was hit); not retried
    /// again in this pass.
    Exhausted,
}

/// One successful application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedRecipe {
    pub base: UnitId,
    /// Insert ids in application order.
    pub inserts: Vec<UnitId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeOutcome {
    pub recipe: String,
    pub state: RecipeState,
    pub applications: Vec<AppliedRecipe>,
}

impl RecipeOutcome {
    pub fn attempting(recipe: impl Into<String>) -> Self {
        Self {
            recipe: recipe.into(),
            state: RecipeState::Attempting,
            applications: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassReport {
    pub pass_id: PassId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub character: Option<String>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// One entry per enabled catalog recipe, in priority order.
    pub outcomes: Vec<RecipeOutcome>,
}

impl PassReport {
    pub fn total_applications(&self) -> usize {
        self.outcomes.iter().map(|o| o.applications.len()).sum()
    }

    pub fn outcome(&self, recipe: &str) -> Option<&RecipeOutcome> {
        self.outcomes.iter().find(|o| o.recipe == recipe)
    }

    /// Recipe names in the order their applications happened.
    pub fn applied_recipes(&self) -> impl Iterator<Item = &str> {
        self.outcomes
            .iter()
            .flat_map(|o| o.applications.iter().map(move |_| o.recipe.as_str()))
    }
}

//! The processing loop: attempts every enabled recipe, in catalog priority
//! order, until it can no longer be matched.
//!
//! ```text
//! for each enabled recipe (catalog order):
//!   Attempting:
//!     fresh stash snapshot
//!       → find base → find inserts (base excluded)
//!       → relocate base + inserts to the inventory
//!       → re-resolve base by unit id, fresh inventory snapshot
//!       → apply recipe → stash leftovers
//!     (any miss) → Exhausted
//! ```
//!
//! A snapshot is never reused after a mutating step; matchers cannot detect
//! staleness themselves. An exhausted recipe is not revisited within the
//! same pass, even if later stashing would satisfy it again.

use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use sockforge_core::{Entity, PassId};
use sockforge_items::{Item, StorageLocation};
use sockforge_recipes::{Recipe, RecipeCatalog, find_base, find_inserts};

use crate::applicator::{DEFAULT_SETTLE_DELAY, RecipeApplicator};
use crate::error::SocketingError;
use crate::ports::GameSession;
use crate::report::{AppliedRecipe, PassReport, RecipeOutcome, RecipeState};

/// Recipe names enabled for a character, matched exactly against the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnabledRecipes(Vec<String>);

impl EnabledRecipes {
    pub fn new<I>(names: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    /// Enabled names that the catalog does not define.
    pub fn unknown_in<'a>(&'a self, catalog: &'a RecipeCatalog) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .map(String::as_str)
            .filter(move |n| !catalog.contains(n))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Tunables for a pass.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SocketingOptions {
    pub settle_delay: Duration,
    /// Upper bound on applications of a single recipe in one pass.
    pub max_applications_per_recipe: usize,
}

impl Default for SocketingOptions {
    fn default() -> Self {
        Self {
            settle_delay: DEFAULT_SETTLE_DELAY,
            max_applications_per_recipe: 64,
        }
    }
}

/// One invocation of the processing loop over an injected catalog.
#[derive(Debug, Clone)]
pub struct SocketingPass<'c> {
    catalog: &'c RecipeCatalog,
    applicator: RecipeApplicator,
    max_applications: usize,
    character: Option<String>,
}

impl<'c> SocketingPass<'c> {
    pub fn new(catalog: &'c RecipeCatalog) -> Self {
        Self::with_options(catalog, SocketingOptions::default())
    }

    pub fn with_options(catalog: &'c RecipeCatalog, options: SocketingOptions) -> Self {
        Self {
            catalog,
            applicator: RecipeApplicator::new(options.settle_delay),
            max_applications: options.max_applications_per_recipe,
            character: None,
        }
    }

    /// Label the pass (span and report) with the character it runs for.
    pub fn for_character(mut self, name: impl Into<String>) -> Self {
        self.character = Some(name.into());
        self
    }

    /// Run every enabled recipe to exhaustion.
    ///
    /// The first execution failure aborts the remaining recipes and is
    /// returned unchanged.
    pub fn run<G>(&self, session: &mut G, enabled: &EnabledRecipes) -> Result<PassReport, SocketingError>
    where
        G: GameSession,
    {
        let pass_id = PassId::new();
        let span = tracing::info_span!(
            "socket_pass",
            pass_id = %pass_id,
            character = tracing::field::Empty
        );
        if let Some(character) = &self.character {
            span.record("character", character.as_str());
        }
        let _span = span.entered();
        let started_at = Utc::now();

        for unknown in enabled.unknown_in(self.catalog) {
            warn!("enabled socket recipe '{}' is not in the catalog; ignoring", unknown);
        }

        let mut outcomes = Vec::new();

        for recipe in self.catalog.iter().filter(|r| enabled.contains(r.name())) {
            debug!("socket recipe '{}' is enabled, processing", recipe.name());

            let mut outcome = RecipeOutcome::attempting(recipe.name());
            while outcome.state == RecipeState::Attempting {
                if outcome.applications.len() >= self.max_applications {
                    warn!(
                        "socket recipe '{}' hit the limit of {} applications in one pass",
                        recipe.name(),
                        self.max_applications
                    );
                    outcome.state = RecipeState::Exhausted;
                    break;
                }

                match self.attempt(session, recipe)? {
                    Some(applied) => outcome.applications.push(applied),
                    None => outcome.state = RecipeState::Exhausted,
                }
            }

            outcomes.push(outcome);
        }

        let report = PassReport {
            pass_id,
            character: self.character.clone(),
            started_at,
            finished_at: Utc::now(),
            outcomes,
        };

        info!(
            "socket pass finished: {} application(s) across {} enabled recipe(s)",
            report.total_applications(),
            report.outcomes.len()
        );

        Ok(report)
    }

    /// Single match-and-apply attempt. `Ok(None)` is a match miss.
    fn attempt<G>(&self, session: &mut G, recipe: &Recipe) -> Result<Option<AppliedRecipe>, SocketingError>
    where
        G: GameSession,
    {
        let stash = session.items_in(&StorageLocation::STASH_CLASS);

        let Some(base) = find_base(&stash, recipe) else {
            debug!("no eligible base for '{}'", recipe.name());
            return Ok(None);
        };
        let base_id = base.id();

        let Some(inserts) = find_inserts(stash.iter().filter(|i| i.id() != base_id), recipe) else {
            debug!("not enough inserts for '{}'", recipe.name());
            return Ok(None);
        };
        let inserts: Vec<Item> = inserts.into_iter().cloned().collect();

        info!(
            "applying socket recipe '{}' to {} ({})",
            recipe.name(),
            base.name,
            base_id
        );

        session.take_from_stash(std::slice::from_ref(base))?;
        session.take_from_stash(&inserts)?;

        let base = session
            .find_by_id(base_id)
            .filter(|b| b.location == StorageLocation::Inventory)
            .ok_or(SocketingError::BaseNotRelocated(base_id))?;
        let working = session.items_in(&[StorageLocation::Inventory]);

        let applied = self.applicator.apply(session, recipe, &base, &working)?;
        session.stash_inventory()?;

        Ok(Some(AppliedRecipe {
            base: base_id,
            inserts: applied,
        }))
    }
}

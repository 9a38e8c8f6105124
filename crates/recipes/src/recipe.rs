use serde::{Deserialize, Serialize};

use sockforge_core::{DomainError, DomainResult};

/// A named socket recipe: ordered inserts applied to a qualifying base.
///
/// Immutable once built. `inserts` order is the order they must be socketed
/// in; duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecipeDef", into = "RecipeDef")]
pub struct Recipe {
    name: String,
    inserts: Vec<String>,
    base_types: Vec<String>,
    sockets: u8,
}

/// Wire form of a recipe, validated on the way in.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RecipeDef {
    name: String,
    inserts: Vec<String>,
    base_types: Vec<String>,
    sockets: u8,
}

impl Recipe {
    pub fn new<I, B>(name: impl Into<String>, inserts: I, base_types: B, sockets: u8) -> DomainResult<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
        B: IntoIterator,
        B::Item: Into<String>,
    {
        let recipe = Self {
            name: name.into(),
            inserts: inserts.into_iter().map(Into::into).collect(),
            base_types: base_types.into_iter().map(Into::into).collect(),
            sockets,
        };
        recipe.validate()?;
        Ok(recipe)
    }

    /// Built-in definitions that are known-valid; covered by catalog tests.
    pub(crate) fn builtin(name: &str, inserts: &[&str], base_types: &[&str], sockets: u8) -> Self {
        Self {
            name: name.to_string(),
            inserts: inserts.iter().map(|s| s.to_string()).collect(),
            base_types: base_types.iter().map(|s| s.to_string()).collect(),
            sockets,
        }
    }

    pub(crate) fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("recipe name cannot be empty"));
        }
        if self.inserts.is_empty() {
            return Err(DomainError::validation(format!(
                "recipe '{}' has no inserts",
                self.name
            )));
        }
        if self.inserts.iter().any(|i| i.trim().is_empty()) {
            return Err(DomainError::validation(format!(
                "recipe '{}' has an empty insert name",
                self.name
            )));
        }
        if self.base_types.is_empty() {
            return Err(DomainError::validation(format!(
                "recipe '{}' accepts no base types",
                self.name
            )));
        }
        if self.sockets == 0 {
            return Err(DomainError::validation(format!(
                "recipe '{}' must require at least one socket",
                self.name
            )));
        }
        if self.inserts.len() != usize::from(self.sockets) {
            return Err(DomainError::invariant(format!(
                "recipe '{}' lists {} inserts for {} sockets",
                self.name,
                self.inserts.len(),
                self.sockets
            )));
        }
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Inserts in canonical application order.
    pub fn inserts(&self) -> &[String] {
        &self.inserts
    }

    pub fn base_types(&self) -> &[String] {
        &self.base_types
    }

    pub fn sockets(&self) -> u8 {
        self.sockets
    }

    pub fn accepts_base_type(&self, type_name: &str) -> bool {
        self.base_types.iter().any(|t| t == type_name)
    }
}

impl TryFrom<RecipeDef> for Recipe {
    type Error = DomainError;

    fn try_from(def: RecipeDef) -> Result<Self, Self::Error> {
        Recipe::new(def.name, def.inserts, def.base_types, def.sockets)
    }
}

impl From<Recipe> for RecipeDef {
    fn from(r: Recipe) -> Self {
        Self {
            name: r.name,
            inserts: r.inserts,
            base_types: r.base_types,
            sockets: r.sockets,
        }
    }
}

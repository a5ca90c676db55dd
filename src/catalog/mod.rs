//! Module Catalog - the static set of learning modules
//!
//! Pure data, no logic: each module carries applicability tags consumed by
//! the path builder and localized content sections consumed by the lesson
//! plan generator. The catalog is read-only at runtime.

mod data;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::types::Localized;

/// Applicability tags for one module.
///
/// Every dimension is a plain tag list; the literal tag "all" marks a module
/// as broadly applicable on that dimension (scored with a smaller weight
/// than an exact match).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleTags {
    #[serde(default)]
    pub industries: Vec<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub levels: Vec<String>,
    #[serde(default)]
    pub age_groups: Vec<String>,
    #[serde(default)]
    pub learner_types: Vec<String>,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub formats: Vec<String>,
}

/// One catalog entry: an atomic content unit with theory, a quiz, and a mission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    /// Unique module id, e.g. "foundation-ai-map"
    pub id: String,
    /// Estimated duration in minutes
    pub duration_min: u32,
    /// Experience points the module is worth (also the ranking tie-breaker)
    pub xp: u64,
    #[serde(default)]
    pub tags: ModuleTags,
    pub title: Localized<String>,
    pub summary: Localized<String>,
    /// Localized content sections; the first three feed generic lesson steps
    #[serde(default)]
    pub sections: Localized<Vec<String>>,
}

static CATALOG: Lazy<Vec<Module>> = Lazy::new(data::build_catalog);

/// The full static catalog
pub fn all_modules() -> &'static [Module] {
    &CATALOG
}

/// Look up a single catalog module by id
pub fn module_by_id(id: &str) -> Option<&'static Module> {
    CATALOG.iter().find(|module| module.id == id)
}

//! Adaptive Path Builder
//!
//! Scores and orders the module catalog against a learner profile to produce
//! a bounded, ordered curriculum. Pure and side-effect free: the same
//! profile + catalog snapshot always yields the same path.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Module;
use crate::types::{LearnerProfile, LearnerType};

/// Foundation modules every path starts from, in fixed order
pub const FOUNDATION_MODULE_IDS: [&str; 8] = [
    "foundation-ai-map",
    "foundation-account-setup",
    "foundation-prompt-blueprint",
    "foundation-prompt-iteration",
    "foundation-data-safety",
    "foundation-image-prompting",
    "foundation-video-prompting",
    "foundation-code-with-ai",
];

/// Base set for individual learners: foundations plus fact-checking
pub const UNIVERSAL_CORE_IDS: [&str; 9] = [
    "foundation-ai-map",
    "foundation-account-setup",
    "foundation-prompt-blueprint",
    "foundation-prompt-iteration",
    "foundation-data-safety",
    "foundation-image-prompting",
    "foundation-video-prompting",
    "foundation-code-with-ai",
    "core-fact-check",
];

/// Base set for company learners: the universal core plus team payments
pub const COMPANY_CORE_IDS: [&str; 10] = [
    "foundation-ai-map",
    "foundation-account-setup",
    "foundation-prompt-blueprint",
    "foundation-prompt-iteration",
    "foundation-data-safety",
    "foundation-image-prompting",
    "foundation-video-prompting",
    "foundation-code-with-ai",
    "core-fact-check",
    "business-payments-russia",
];

/// Top-up pool used when ranking leaves the path under its size limit
pub const RECOMMENDED_IDS: [&str; 4] = [
    "modality-image-gen",
    "modality-video-gen",
    "core-ai-literacy",
    "core-prompt-framework",
];

/// The capstone is guaranteed to be present in every built path
pub const CAPSTONE_MODULE_ID: &str = "certification-capstone";

/// Highest day bucket a curriculum entry can land in
const MAX_DAY: u32 = 6;

/// A catalog module placed into a built curriculum
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurriculumEntry {
    #[serde(flatten)]
    pub module: Module,
    /// 1-based position in the path
    pub order: u32,
    /// Derived day bucket: min(6, (order - 1) / 3 + 1)
    pub day: u32,
}

/// Totals over a built path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathSummary {
    pub total_duration_min: u32,
    pub total_xp: u64,
}

/// Default path length when the caller does not override it
pub fn default_max_modules(profile: &LearnerProfile) -> usize {
    match profile.learner_type {
        LearnerType::Company => 16,
        LearnerType::Individual => 14,
    }
}

fn score_by_tag(values: &[String], target: &str, exact: u32, wildcard: u32) -> u32 {
    if target.is_empty() {
        return 0;
    }
    if values.iter().any(|value| value == target) {
        return exact;
    }
    if values.iter().any(|value| value == "all") {
        return wildcard;
    }
    0
}

/// Relevance score of one module for one profile.
///
/// Table-driven per tag dimension: an exact match earns the full weight, a
/// module tagged "all" earns the smaller wildcard weight. Goals sum per
/// selected goal. The hybrid format preference is a flat non-additive bonus
/// when any of hybrid/text/voice is tagged.
pub fn score_module(module: &Module, profile: &LearnerProfile) -> u32 {
    let tags = &module.tags;

    let dimensions: [(&[String], &str, u32, u32); 5] = [
        (&tags.industries, profile.industry.as_str(), 8, 3),
        (&tags.roles, profile.role.as_str(), 7, 3),
        (&tags.levels, profile.level.as_str(), 4, 2),
        (&tags.age_groups, profile.age_group.as_str(), 4, 1),
        (&tags.learner_types, profile.learner_type.as_str(), 4, 0),
    ];

    let mut score: u32 = dimensions
        .iter()
        .map(|(values, target, exact, wildcard)| score_by_tag(values, target, *exact, *wildcard))
        .sum();

    for goal in &profile.goals {
        score += score_by_tag(&tags.goals, goal, 3, 1);
    }

    if profile.format == "hybrid" {
        let any_format = ["hybrid", "text", "voice"]
            .iter()
            .any(|format| score_by_tag(&tags.formats, format, 1, 0) > 0);
        if any_format {
            score += 2;
        }
    } else {
        score += score_by_tag(&tags.formats, profile.format.as_str(), 3, 1);
    }

    score
}

/// Build the ordered, bounded curriculum for one profile.
///
/// The base set for the learner type is always included first, in its fixed
/// order. Remaining catalog modules are ranked by relevance score (ties
/// broken by higher XP value), appended up to `max_modules`, topped up from
/// the recommended pool, and the capstone is guaranteed last: appended when
/// there is room, otherwise substituted into the final slot.
pub fn build_adaptive_path(
    profile: &LearnerProfile,
    catalog: &[Module],
    max_modules: usize,
) -> Vec<CurriculumEntry> {
    let base_ids: &[&str] = match profile.learner_type {
        LearnerType::Company => &COMPANY_CORE_IDS,
        LearnerType::Individual => &UNIVERSAL_CORE_IDS,
    };

    let mut selected: Vec<&Module> = base_ids
        .iter()
        .filter_map(|id| catalog.iter().find(|module| module.id == *id))
        .collect();

    let mut ranked: Vec<(&Module, u32)> = catalog
        .iter()
        .filter(|module| !base_ids.contains(&module.id.as_str()))
        .map(|module| (module, score_module(module, profile)))
        .filter(|(_, score)| *score > 0)
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.xp.cmp(&a.0.xp)));

    for (module, score) in &ranked {
        if selected.len() >= max_modules {
            break;
        }
        if selected.iter().any(|picked| picked.id == module.id) {
            continue;
        }
        debug!(module = %module.id, score, "ranked module selected");
        selected.push(module);
    }

    for id in RECOMMENDED_IDS {
        if selected.len() >= max_modules {
            break;
        }
        if selected.iter().any(|picked| picked.id == id) {
            continue;
        }
        if let Some(module) = catalog.iter().find(|module| module.id == id) {
            selected.push(module);
        }
    }

    let has_capstone = selected
        .iter()
        .any(|picked| picked.id == CAPSTONE_MODULE_ID);
    if !has_capstone {
        if let Some(capstone) = catalog.iter().find(|module| module.id == CAPSTONE_MODULE_ID) {
            if selected.len() >= max_modules {
                // Path is full: the capstone displaces whatever holds the
                // last slot. Base-set modules are inserted first, so only a
                // ranked or recommended module can live there in practice.
                if let Some(last) = selected.last_mut() {
                    *last = capstone;
                }
            } else {
                selected.push(capstone);
            }
        }
    }

    selected
        .into_iter()
        .enumerate()
        .map(|(index, module)| CurriculumEntry {
            module: module.clone(),
            order: index as u32 + 1,
            day: MAX_DAY.min(index as u32 / 3 + 1),
        })
        .collect()
}

/// Total duration and XP value of a built path
pub fn summarize_path(path: &[CurriculumEntry]) -> PathSummary {
    PathSummary {
        total_duration_min: path.iter().map(|entry| entry.module.duration_min).sum(),
        total_xp: path.iter().map(|entry| entry.module.xp).sum(),
    }
}

/// Find a curriculum entry by module id
pub fn module_in_path<'a>(path: &'a [CurriculumEntry], module_id: &str) -> Option<&'a CurriculumEntry> {
    path.iter().find(|entry| entry.module.id == module_id)
}

/// The entry after the given module, if any
pub fn next_module<'a>(path: &'a [CurriculumEntry], module_id: &str) -> Option<&'a CurriculumEntry> {
    let index = path.iter().position(|entry| entry.module.id == module_id)?;
    path.get(index + 1)
}

/// The entry before the given module, if any
pub fn prev_module<'a>(path: &'a [CurriculumEntry], module_id: &str) -> Option<&'a CurriculumEntry> {
    let index = path.iter().position(|entry| entry.module.id == module_id)?;
    index.checked_sub(1).and_then(|prev| path.get(prev))
}

//! Proficiency diagnostic
//!
//! Nine self-assessment questions, each answered 0..=3, turn into a percent
//! score, a proficiency level, and the module the learner should start from.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::Lang;

/// Question ids, in presentation order
pub const DIAGNOSTIC_QUESTION_IDS: [&str; 9] = [
    "ai_frequency",
    "prompt_skill",
    "fact_check",
    "tool_stack",
    "tools_used",
    "account_setup",
    "payments_skill",
    "business_goal",
    "team_readiness",
];

/// Maximum points per question
const MAX_ANSWER: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProficiencyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ProficiencyLevel {
    pub fn id(&self) -> &'static str {
        match self {
            ProficiencyLevel::Beginner => "beginner",
            ProficiencyLevel::Intermediate => "intermediate",
            ProficiencyLevel::Advanced => "advanced",
        }
    }

    pub fn label(&self, lang: Lang) -> &'static str {
        match (self, lang) {
            (ProficiencyLevel::Beginner, Lang::Ru) => "Новичок",
            (ProficiencyLevel::Beginner, Lang::En) => "Beginner",
            (ProficiencyLevel::Intermediate, Lang::Ru) => "Средний уровень",
            (ProficiencyLevel::Intermediate, Lang::En) => "Intermediate",
            (ProficiencyLevel::Advanced, Lang::Ru) => "Продвинутый",
            (ProficiencyLevel::Advanced, Lang::En) => "Advanced",
        }
    }
}

/// Diagnostic outcome fed into the learner profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticResult {
    pub score_percent: u32,
    pub level: ProficiencyLevel,
    /// First module the path should open with
    pub start_module_id: String,
    pub summary: String,
}

/// Score the diagnostic answers.
///
/// Unknown question ids are ignored; missing answers count as zero; values
/// above 3 are clamped. This keeps the scoring stable against older or
/// partially filled questionnaires.
pub fn evaluate_diagnostic(lang: Lang, answers: &HashMap<String, u8>) -> DiagnosticResult {
    let raw: u32 = DIAGNOSTIC_QUESTION_IDS
        .iter()
        .map(|id| {
            answers
                .get(*id)
                .map(|value| (*value).min(MAX_ANSWER) as u32)
                .unwrap_or(0)
        })
        .sum();
    let max = DIAGNOSTIC_QUESTION_IDS.len() as u32 * MAX_ANSWER as u32;
    let score_percent = ((raw as f64 / max as f64) * 100.0).round() as u32;

    let (level, start_module_id) = if score_percent >= 80 {
        (ProficiencyLevel::Advanced, "foundation-prompt-iteration")
    } else if score_percent >= 55 {
        (ProficiencyLevel::Intermediate, "foundation-ai-map")
    } else {
        (ProficiencyLevel::Beginner, "foundation-ai-map")
    };

    let summary = match lang {
        Lang::Ru => format!(
            "Твой уровень: {} ({score_percent}%). Стартуем с подходящего модуля без лишней теории.",
            level.label(lang)
        ),
        Lang::En => format!(
            "Your level: {} ({score_percent}%). We start from the right module without extra theory.",
            level.label(lang)
        ),
    };

    DiagnosticResult {
        score_percent,
        level,
        start_module_id: start_module_id.to_string(),
        summary,
    }
}

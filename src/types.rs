//! Shared core types: interface language, localized content, learner profile

use serde::{Deserialize, Serialize};

/// Interface/content language for lessons and feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Ru,
    En,
}

impl Lang {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::Ru => "ru",
            Lang::En => "en",
        }
    }

    /// Parse a language code, falling back to Russian for anything unknown
    pub fn from_code(code: &str) -> Self {
        match code {
            "en" => Lang::En,
            _ => Lang::Ru,
        }
    }
}

impl Default for Lang {
    fn default() -> Self {
        Lang::Ru
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A value authored in both supported languages
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Localized<T> {
    pub ru: T,
    pub en: T,
}

impl<T> Localized<T> {
    pub fn new(ru: T, en: T) -> Self {
        Self { ru, en }
    }

    pub fn get(&self, lang: Lang) -> &T {
        match lang {
            Lang::Ru => &self.ru,
            Lang::En => &self.en,
        }
    }
}

/// Whether the learner goes through the course alone or rolls it out to a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearnerType {
    Individual,
    Company,
}

impl LearnerType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LearnerType::Individual => "individual",
            LearnerType::Company => "company",
        }
    }
}

impl Default for LearnerType {
    fn default() -> Self {
        LearnerType::Individual
    }
}

/// Learner profile produced by onboarding + diagnostic.
///
/// Immutable once the diagnostic completes; re-running onboarding replaces
/// the whole record and resets progress for the new curriculum.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearnerProfile {
    #[serde(default)]
    pub learner_type: LearnerType,
    /// Age bucket tag ("young", "adult", ...)
    #[serde(default = "default_age_group")]
    pub age_group: String,
    /// Industry tag ("education", "marketing", ...)
    #[serde(default = "default_industry")]
    pub industry: String,
    /// Role tag ("teacher", "manager", ...)
    #[serde(default = "default_role")]
    pub role: String,
    /// Proficiency level id from the diagnostic ("beginner" | "intermediate" | "advanced")
    #[serde(default = "default_level")]
    pub level: String,
    /// Preferred lesson format ("text" | "voice" | "hybrid")
    #[serde(default = "default_format")]
    pub format: String,
    /// Selected learning goals, at most three
    #[serde(default)]
    pub goals: Vec<String>,
    /// Seat count for company learners
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_size: Option<u32>,
    /// First module suggested by the diagnostic
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_start_module_id: Option<String>,
}

fn default_age_group() -> String {
    "young".to_string()
}

fn default_industry() -> String {
    "general".to_string()
}

fn default_role() -> String {
    "specialist".to_string()
}

fn default_level() -> String {
    "beginner".to_string()
}

fn default_format() -> String {
    "hybrid".to_string()
}

impl Default for LearnerProfile {
    fn default() -> Self {
        Self {
            learner_type: LearnerType::default(),
            age_group: default_age_group(),
            industry: default_industry(),
            role: default_role(),
            level: default_level(),
            format: default_format(),
            goals: Vec::new(),
            company_size: None,
            recommended_start_module_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lang_falls_back_to_russian() {
        assert_eq!(Lang::from_code("en"), Lang::En);
        assert_eq!(Lang::from_code("ru"), Lang::Ru);
        assert_eq!(Lang::from_code("de"), Lang::Ru);
        assert_eq!(Lang::En.as_str(), "en");
    }

    #[test]
    fn profile_deserializes_with_defaults() {
        let profile: LearnerProfile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile.learner_type, LearnerType::Individual);
        assert_eq!(profile.level, "beginner");
        assert_eq!(profile.format, "hybrid");
        assert!(profile.goals.is_empty());
    }
}

//! Configuration management
//!
//! Reward tuning, quiz thresholds, and mission review service settings.
//! Loaded from a TOML file; every field has a sensible default so a missing
//! or partial config never blocks the engine.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Reward values and gamification thresholds
    #[serde(default)]
    pub rewards: RewardConfig,
    /// Mission review service settings
    #[serde(default)]
    pub review: ReviewConfig,
}

/// Reward values and thresholds used by the progress engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewardConfig {
    /// XP required per learner level
    #[serde(default = "default_level_xp")]
    pub level_xp: u64,
    /// XP for the first pass of a theory step
    #[serde(default = "default_step_xp")]
    pub step_xp: u64,
    /// Block quiz pass threshold in percent
    #[serde(default = "default_quiz_pass_score")]
    pub quiz_pass_score: u32,
    /// One-time XP bonus for passing the block quiz
    #[serde(default = "default_quiz_bonus_xp")]
    pub quiz_bonus_xp: u64,
    /// One-time gem bonus for passing the block quiz
    #[serde(default = "default_quiz_bonus_gems")]
    pub quiz_bonus_gems: u64,
    /// One-time XP bonus for a passing mission verdict
    #[serde(default = "default_mission_bonus_xp")]
    pub mission_bonus_xp: u64,
    /// One-time gem bonus for a passing mission verdict
    #[serde(default = "default_mission_bonus_gems")]
    pub mission_bonus_gems: u64,
    /// One-time XP bonus for completing a module
    #[serde(default = "default_module_bonus_xp")]
    pub module_bonus_xp: u64,
    /// One-time gem bonus for completing a module
    #[serde(default = "default_module_bonus_gems")]
    pub module_bonus_gems: u64,
    /// Upper bound of the heart budget
    #[serde(default = "default_max_hearts")]
    pub max_hearts: u8,
    /// Minimum character length of a mission note
    #[serde(default = "default_min_note_chars")]
    pub min_note_chars: usize,
    /// Minimum character length of a free-text step reply
    #[serde(default = "default_min_reply_chars")]
    pub min_reply_chars: usize,
}

fn default_level_xp() -> u64 {
    280
}

fn default_step_xp() -> u64 {
    18
}

fn default_quiz_pass_score() -> u32 {
    70
}

fn default_quiz_bonus_xp() -> u64 {
    32
}

fn default_quiz_bonus_gems() -> u64 {
    3
}

fn default_mission_bonus_xp() -> u64 {
    40
}

fn default_mission_bonus_gems() -> u64 {
    5
}

fn default_module_bonus_xp() -> u64 {
    64
}

fn default_module_bonus_gems() -> u64 {
    10
}

fn default_max_hearts() -> u8 {
    5
}

fn default_min_note_chars() -> usize {
    20
}

fn default_min_reply_chars() -> usize {
    30
}

impl Default for RewardConfig {
    fn default() -> Self {
        Self {
            level_xp: default_level_xp(),
            step_xp: default_step_xp(),
            quiz_pass_score: default_quiz_pass_score(),
            quiz_bonus_xp: default_quiz_bonus_xp(),
            quiz_bonus_gems: default_quiz_bonus_gems(),
            mission_bonus_xp: default_mission_bonus_xp(),
            mission_bonus_gems: default_mission_bonus_gems(),
            module_bonus_xp: default_module_bonus_xp(),
            module_bonus_gems: default_module_bonus_gems(),
            max_hearts: default_max_hearts(),
            min_note_chars: default_min_note_chars(),
            min_reply_chars: default_min_reply_chars(),
        }
    }
}

/// Mission review service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewConfig {
    /// Base URL of the review API, e.g. "https://api.example.com"
    #[serde(default)]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_review_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_review_timeout_secs() -> u64 {
    45
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_secs: default_review_timeout_secs(),
        }
    }
}

/// Get the configuration directory (~/.config/academy)
pub fn config_dir() -> Result<PathBuf> {
    let dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("academy");
    Ok(dir)
}

/// Get the data directory (~/.local/share/academy)
pub fn data_dir() -> Result<PathBuf> {
    let dir = dirs::data_dir()
        .context("Could not determine data directory")?
        .join("academy");
    Ok(dir)
}

impl Config {
    /// Default config file path
    pub fn default_path() -> Result<PathBuf> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// Load configuration from the default path, falling back to defaults
    /// when the file does not exist
    pub fn load() -> Result<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }
}

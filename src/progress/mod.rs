//! Progress Engine
//!
//! [`ProgressRecord`] is the single persisted learner state. Every field is
//! optional on disk and defaults safely, so records written by older builds
//! keep loading. All mutation goes through [`engine::ProgressEngine`], which
//! takes a record by reference and returns a new one, leaving the caller's
//! copy untouched on rejection.

pub mod engine;

pub use engine::{
    CompleteOutcome, EngineError, MissionOutcome, ProgressEngine, QuizOutcome, Rejection,
    StepOutcome,
};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::review::MissionVerdict;

/// Lesson rendering preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Text,
    Voice,
}

/// Best-so-far state of a module's block quiz
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockQuizState {
    /// Sticky: once true, a worse retake never clears it
    pub passed: bool,
    /// Best score percent across attempts
    pub score: u32,
    pub total: usize,
    pub correct: usize,
    /// Latest attempt's picks, question index to option index
    pub answers: BTreeMap<usize, usize>,
}

/// Persisted learner progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgressRecord {
    /// Module ids completed, in completion order
    pub completed: Vec<String>,
    pub xp: u64,
    pub gems: u64,
    pub hearts: u8,
    pub streak: u32,
    pub last_active_date: Option<NaiveDate>,
    pub mode: DisplayMode,
    pub current_module_id: Option<String>,
    /// Last viewed step index per module
    pub segments: HashMap<String, usize>,
    /// Per-module step pass flags, keyed by step index
    pub steps: HashMap<String, BTreeMap<usize, bool>>,
    /// Per-module step reward flags; set once so retries never double-pay
    pub step_xp: HashMap<String, BTreeMap<usize, bool>>,
    pub block_quiz: HashMap<String, BlockQuizState>,
    /// One-shot quiz reward flags per module
    pub quiz_reward: HashMap<String, bool>,
    /// Latest accepted mission note per module
    pub practice: HashMap<String, String>,
    /// Latest mission verdict per module; overwritten on every attempt
    pub mission: HashMap<String, MissionVerdict>,
    /// One-shot mission reward flags per module
    pub mission_reward: HashMap<String, bool>,
}

impl Default for ProgressRecord {
    fn default() -> Self {
        Self {
            completed: Vec::new(),
            xp: 0,
            gems: 0,
            hearts: 5,
            streak: 0,
            last_active_date: None,
            mode: DisplayMode::default(),
            current_module_id: None,
            segments: HashMap::new(),
            steps: HashMap::new(),
            step_xp: HashMap::new(),
            block_quiz: HashMap::new(),
            quiz_reward: HashMap::new(),
            practice: HashMap::new(),
            mission: HashMap::new(),
            mission_reward: HashMap::new(),
        }
    }
}

impl ProgressRecord {
    pub fn step_passed(&self, module_id: &str, step_index: usize) -> bool {
        self.steps
            .get(module_id)
            .and_then(|flags| flags.get(&step_index))
            .copied()
            .unwrap_or(false)
    }

    /// Passed steps for a module, clamped to the plan's step count
    pub fn count_passed_steps(&self, module_id: &str, total_steps: usize) -> usize {
        let passed = self
            .steps
            .get(module_id)
            .map(|flags| flags.values().filter(|v| **v).count())
            .unwrap_or(0);
        passed.min(total_steps)
    }

    pub fn quiz_passed(&self, module_id: &str) -> bool {
        self.block_quiz
            .get(module_id)
            .map(|state| state.passed)
            .unwrap_or(false)
    }

    pub fn mission_passed(&self, module_id: &str) -> bool {
        self.mission
            .get(module_id)
            .map(|verdict| verdict.passed)
            .unwrap_or(false)
    }

    pub fn is_completed(&self, module_id: &str) -> bool {
        self.completed.iter().any(|id| id == module_id)
    }

    /// 1-based level derived from accumulated XP
    pub fn level(&self, level_xp: u64) -> u64 {
        if level_xp == 0 {
            return 1;
        }
        (self.xp / level_xp + 1).max(1)
    }

    /// Clamp fields a hand-edited or corrupted record could push out of range
    pub fn sanitized(mut self, max_hearts: u8) -> Self {
        if self.hearts > max_hearts {
            self.hearts = max_hearts;
        }
        self
    }
}

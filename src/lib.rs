//! Academy - Personalized Micro-Learning Core
//!
//! Gamified AI-skill learning engine with:
//! - Adaptive curriculum built from a learner profile
//! - Deterministic lesson plans with quizzes and practice missions
//! - XP / gems / hearts / streak progress tracking
//! - Screenshot-verified missions via an external review service
//! - Durable, corruption-tolerant persistence
//!
//! # Example
//!
//! ```ignore
//! use academy::catalog::all_modules;
//! use academy::path::{build_adaptive_path, default_max_modules};
//! use academy::types::LearnerProfile;
//!
//! let profile = LearnerProfile::default();
//! let path = build_adaptive_path(&profile, all_modules(), default_max_modules(&profile));
//! println!("{} modules planned", path.len());
//! ```

// Core modules (order matters for cross-module dependencies)
pub mod types;
pub mod config;
pub mod catalog; // Must come before path/lesson since both read the catalog
pub mod path;
pub mod lesson;
pub mod review; // Must come before progress since the engine calls the reviewer
pub mod progress;

// Feature modules
pub mod diagnostic;
pub mod storage;

// Re-export commonly used types for convenience
pub use catalog::{all_modules, module_by_id, Module};

pub use config::{Config, RewardConfig, ReviewConfig};

pub use path::{
    build_adaptive_path, default_max_modules, summarize_path, CurriculumEntry, PathSummary,
};

pub use lesson::{build_lesson_plan, build_prompt_template, LessonPlan, Mission, Step};

pub use progress::{
    engine::{unlocked_module_ids, resolve_current_module},
    ProgressEngine, ProgressRecord,
};

pub use review::{EvidenceFile, HttpReviewer, MissionReviewer, MissionVerdict};

pub use types::{Lang, LearnerProfile, LearnerType};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get the library info
pub fn info() -> String {
    format!("{} v{} - Personalized Micro-Learning Core", NAME, VERSION)
}

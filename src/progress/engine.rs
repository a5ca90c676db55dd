//! State transitions over [`ProgressRecord`].
//!
//! Every transition validates first, then clones the record and applies the
//! change, so a rejected attempt leaves the stored state untouched. Rewards
//! are guarded by one-shot flags: retries improve scores but never pay twice.

use chrono::{Local, NaiveDate};
use std::collections::{BTreeMap, HashSet};
use thiserror::Error;
use tracing::{debug, info};

use super::ProgressRecord;
use crate::config::RewardConfig;
use crate::lesson::{LessonPlan, Mission};
use crate::path::CurriculumEntry;
use crate::review::{EvidenceFile, MissionReviewer, MissionVerdict, ReviewError, ReviewRequest};
use crate::types::{Lang, LearnerProfile};

/// Steps per small gem bonus while working through theory
const STEPS_PER_GEM: usize = 3;

/// A transition refused on its own preconditions
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("finish all theory steps before the block quiz")]
    TheoryIncomplete,
    #[error("this module has no quiz questions")]
    NoQuizQuestions,
    #[error("answer every quiz question before submitting")]
    MissingAnswers,
    #[error("mission evidence is required")]
    MissingEvidence,
    #[error("mission note must be at least {min} characters")]
    NoteTooShort { min: usize },
    #[error("module requirements are not met yet")]
    ModuleRequirementsUnmet,
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error(transparent)]
    Validation(#[from] Rejection),
    #[error(transparent)]
    Review(#[from] ReviewError),
}

#[derive(Debug, Clone)]
pub struct StepOutcome {
    pub record: ProgressRecord,
    /// Whether this call paid the step XP for the first time
    pub newly_rewarded: bool,
    pub already_passed: bool,
}

#[derive(Debug, Clone)]
pub struct QuizOutcome {
    pub record: ProgressRecord,
    /// Whether this attempt itself reached the pass bar
    pub passed: bool,
    pub score: u32,
    pub best_score: u32,
    pub correct: usize,
    pub total: usize,
    pub newly_rewarded: bool,
}

#[derive(Debug, Clone)]
pub struct MissionOutcome {
    pub record: ProgressRecord,
    pub verdict: MissionVerdict,
    pub newly_rewarded: bool,
}

#[derive(Debug, Clone)]
pub struct CompleteOutcome {
    pub record: ProgressRecord,
    pub newly_completed: bool,
    pub next_module_id: Option<String>,
}

/// Applies learning transitions under one reward policy
#[derive(Debug, Clone, Default)]
pub struct ProgressEngine {
    config: RewardConfig,
}

impl ProgressEngine {
    pub fn new(config: RewardConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RewardConfig {
        &self.config
    }

    /// Daily streak bookkeeping: same day is a no-op, consecutive days
    /// extend, a gap resets to one. Always stamps today.
    pub fn apply_streak(&self, record: &mut ProgressRecord, today: NaiveDate) {
        match record.last_active_date {
            Some(last) if last == today => {}
            Some(last) if last.succ_opt() == Some(today) => {
                record.streak += 1;
            }
            _ => {
                record.streak = 1;
            }
        }
        record.last_active_date = Some(today);
    }

    pub fn mark_step_done(
        &self,
        record: &ProgressRecord,
        module_id: &str,
        step_index: usize,
    ) -> StepOutcome {
        self.mark_step_done_on(record, module_id, step_index, Local::now().date_naive())
    }

    pub fn mark_step_done_on(
        &self,
        record: &ProgressRecord,
        module_id: &str,
        step_index: usize,
        today: NaiveDate,
    ) -> StepOutcome {
        let already_passed = record.step_passed(module_id, step_index);
        let mut next = record.clone();
        self.apply_streak(&mut next, today);

        next.steps
            .entry(module_id.to_string())
            .or_default()
            .insert(step_index, true);

        let rewarded = next
            .step_xp
            .get(module_id)
            .and_then(|flags| flags.get(&step_index))
            .copied()
            .unwrap_or(false);

        let mut newly_rewarded = false;
        if !rewarded {
            next.step_xp
                .entry(module_id.to_string())
                .or_default()
                .insert(step_index, true);
            next.xp += self.config.step_xp;
            let passed_total = next
                .steps
                .get(module_id)
                .map(|flags| flags.values().filter(|v| **v).count())
                .unwrap_or(0);
            if passed_total % STEPS_PER_GEM == 0 {
                next.gems += 1;
            }
            newly_rewarded = true;
            debug!(module_id, step_index, xp = next.xp, "step reward granted");
        }

        // A fresh pass keeps the learner playable even after earlier losses.
        if !already_passed && next.hearts == 0 {
            next.hearts = 1;
        }

        StepOutcome {
            record: next,
            newly_rewarded,
            already_passed,
        }
    }

    pub fn submit_block_quiz(
        &self,
        record: &ProgressRecord,
        module_id: &str,
        plan: &LessonPlan,
        answers: &BTreeMap<usize, usize>,
    ) -> Result<QuizOutcome, Rejection> {
        self.submit_block_quiz_on(record, module_id, plan, answers, Local::now().date_naive())
    }

    pub fn submit_block_quiz_on(
        &self,
        record: &ProgressRecord,
        module_id: &str,
        plan: &LessonPlan,
        answers: &BTreeMap<usize, usize>,
        today: NaiveDate,
    ) -> Result<QuizOutcome, Rejection> {
        if record.count_passed_steps(module_id, plan.steps.len()) < plan.steps.len() {
            return Err(Rejection::TheoryIncomplete);
        }
        let questions = plan.quiz_questions();
        if questions.is_empty() {
            return Err(Rejection::NoQuizQuestions);
        }
        if (0..questions.len()).any(|index| !answers.contains_key(&index)) {
            return Err(Rejection::MissingAnswers);
        }

        let total = questions.len();
        let correct = questions
            .iter()
            .enumerate()
            .filter(|(index, step)| {
                step.quiz
                    .as_ref()
                    .map(|quiz| answers.get(index) == Some(&quiz.correct_index))
                    .unwrap_or(false)
            })
            .count();
        let score = ((correct as f64 / total as f64) * 100.0).round() as u32;
        let passed = score >= self.config.quiz_pass_score;

        let mut next = record.clone();
        self.apply_streak(&mut next, today);

        let previous = next.block_quiz.get(module_id).cloned().unwrap_or_default();
        let was_passed = previous.passed;
        let best_score = previous.score.max(score);
        let final_passed = passed || was_passed;

        let reward_given = next.quiz_reward.get(module_id).copied().unwrap_or(false);
        let mut newly_rewarded = false;
        if passed && !reward_given {
            next.xp += self.config.quiz_bonus_xp;
            next.gems += self.config.quiz_bonus_gems;
            next.quiz_reward.insert(module_id.to_string(), true);
            newly_rewarded = true;
        }

        if !passed && !was_passed {
            next.hearts = next.hearts.saturating_sub(1);
        }

        next.block_quiz.insert(
            module_id.to_string(),
            super::BlockQuizState {
                passed: final_passed,
                score: best_score,
                total,
                correct,
                answers: answers.clone(),
            },
        );

        info!(module_id, score, passed, "block quiz submitted");
        Ok(QuizOutcome {
            record: next,
            passed,
            score,
            best_score,
            correct,
            total,
            newly_rewarded,
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn verify_mission(
        &self,
        record: &ProgressRecord,
        module_id: &str,
        module_title: &str,
        mission: &Mission,
        note: &str,
        evidence: Option<EvidenceFile>,
        lang: Lang,
        reviewer: &dyn MissionReviewer,
    ) -> Result<MissionOutcome, EngineError> {
        self.verify_mission_on(
            record,
            module_id,
            module_title,
            mission,
            note,
            evidence,
            lang,
            reviewer,
            Local::now().date_naive(),
        )
        .await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn verify_mission_on(
        &self,
        record: &ProgressRecord,
        module_id: &str,
        module_title: &str,
        mission: &Mission,
        note: &str,
        evidence: Option<EvidenceFile>,
        lang: Lang,
        reviewer: &dyn MissionReviewer,
        today: NaiveDate,
    ) -> Result<MissionOutcome, EngineError> {
        let evidence = evidence.ok_or(Rejection::MissingEvidence)?;
        let note = note.trim();
        let min = self.config.min_note_chars;
        if note.chars().count() < min {
            return Err(Rejection::NoteTooShort { min }.into());
        }

        let verdict = reviewer
            .verify(ReviewRequest {
                language: lang,
                module_title: module_title.to_string(),
                mission_title: mission.title.clone(),
                learner_note: note.to_string(),
                required_checks: mission.checkpoints.clone(),
                evidence,
            })
            .await?;

        let mut next = record.clone();
        self.apply_streak(&mut next, today);
        next.practice.insert(module_id.to_string(), note.to_string());
        next.mission.insert(module_id.to_string(), verdict.clone());

        let mut newly_rewarded = false;
        if verdict.passed {
            let reward_given = next.mission_reward.get(module_id).copied().unwrap_or(false);
            if !reward_given {
                next.xp += self.config.mission_bonus_xp;
                next.gems += self.config.mission_bonus_gems;
                next.mission_reward.insert(module_id.to_string(), true);
                newly_rewarded = true;
            }
        } else {
            next.hearts = next.hearts.saturating_sub(1);
        }

        info!(
            module_id,
            passed = verdict.passed,
            score = verdict.score,
            "mission reviewed"
        );
        Ok(MissionOutcome {
            record: next,
            verdict,
            newly_rewarded,
        })
    }

    pub fn complete_module(
        &self,
        record: &ProgressRecord,
        path: &[CurriculumEntry],
        module_id: &str,
        total_steps: usize,
    ) -> Result<CompleteOutcome, Rejection> {
        self.complete_module_on(record, path, module_id, total_steps, Local::now().date_naive())
    }

    pub fn complete_module_on(
        &self,
        record: &ProgressRecord,
        path: &[CurriculumEntry],
        module_id: &str,
        total_steps: usize,
        today: NaiveDate,
    ) -> Result<CompleteOutcome, Rejection> {
        let theory_done =
            total_steps > 0 && record.count_passed_steps(module_id, total_steps) >= total_steps;
        if !theory_done || !record.quiz_passed(module_id) || !record.mission_passed(module_id) {
            return Err(Rejection::ModuleRequirementsUnmet);
        }

        let mut next = record.clone();
        self.apply_streak(&mut next, today);

        let newly_completed = !next.is_completed(module_id);
        if newly_completed {
            next.completed.push(module_id.to_string());
            next.xp += self.config.module_bonus_xp;
            next.gems += self.config.module_bonus_gems;
            next.hearts = next.hearts.saturating_add(1).min(self.config.max_hearts);
            info!(module_id, xp = next.xp, "module completed");
        }

        let next_module_id = path
            .iter()
            .position(|entry| entry.module.id == module_id)
            .and_then(|pos| path.get(pos + 1))
            .map(|entry| entry.module.id.clone());

        Ok(CompleteOutcome {
            record: next,
            newly_completed,
            next_module_id,
        })
    }

    pub fn restore_hearts(&self, record: &ProgressRecord) -> ProgressRecord {
        let mut next = record.clone();
        next.hearts = self.config.max_hearts;
        next
    }

    pub fn lose_heart(&self, record: &ProgressRecord) -> ProgressRecord {
        let mut next = record.clone();
        next.hearts = next.hearts.saturating_sub(1);
        next
    }

    /// Remember where the learner is, without streak or reward effects
    pub fn track_position(
        &self,
        record: &ProgressRecord,
        module_id: &str,
        step_index: usize,
    ) -> ProgressRecord {
        let mut next = record.clone();
        next.current_module_id = Some(module_id.to_string());
        next.segments.insert(module_id.to_string(), step_index);
        next
    }
}

/// Modules the learner may open: everything completed plus the first
/// not-yet-completed entry in path order
pub fn unlocked_module_ids(path: &[CurriculumEntry], record: &ProgressRecord) -> HashSet<String> {
    let mut unlocked = HashSet::new();
    for entry in path {
        let id = entry.module.id.clone();
        let completed = record.is_completed(&id);
        unlocked.insert(id);
        if !completed {
            break;
        }
    }
    unlocked
}

/// Pick the module the learn view should open
pub fn resolve_current_module<'a>(
    path: &'a [CurriculumEntry],
    record: &ProgressRecord,
    profile: &LearnerProfile,
    requested: Option<&str>,
) -> Option<&'a CurriculumEntry> {
    let find = |id: &str| path.iter().find(|entry| entry.module.id == id);

    if let Some(entry) = requested.and_then(find) {
        return Some(entry);
    }
    if let Some(entry) = record.current_module_id.as_deref().and_then(find) {
        return Some(entry);
    }
    if record.completed.is_empty() {
        if let Some(entry) = profile
            .recommended_start_module_id
            .as_deref()
            .and_then(find)
        {
            return Some(entry);
        }
    }
    path.iter()
        .find(|entry| !record.is_completed(&entry.module.id))
        .or_else(|| path.first())
}

//! Full learner journey scenarios across the progress engine

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::NaiveDate;

use academy::catalog::module_by_id;
use academy::lesson::build_lesson_plan;
use academy::path::build_adaptive_path;
use academy::progress::{
    engine::unlocked_module_ids, EngineError, ProgressEngine, ProgressRecord, Rejection,
};
use academy::review::{EvidenceFile, MissionReviewer, MissionVerdict, ReviewError, ReviewRequest};
use academy::types::{Lang, LearnerProfile};
use academy::catalog::all_modules;

/// Scripted reviewer: returns queued verdicts in order
struct FakeReviewer {
    verdicts: std::sync::Mutex<Vec<Result<MissionVerdict, ReviewError>>>,
    requests: std::sync::Mutex<Vec<ReviewRequest>>,
}

impl FakeReviewer {
    fn new(verdicts: Vec<Result<MissionVerdict, ReviewError>>) -> Self {
        Self {
            verdicts: std::sync::Mutex::new(verdicts),
            requests: std::sync::Mutex::new(Vec::new()),
        }
    }

    fn passing(score: u32) -> MissionVerdict {
        MissionVerdict {
            passed: true,
            score,
            summary: "All checkpoints confirmed".to_string(),
            ..MissionVerdict::default()
        }
    }

    fn failing(score: u32) -> MissionVerdict {
        MissionVerdict {
            passed: false,
            score,
            summary: "Output not visible".to_string(),
            missing: vec!["AI output is visible".to_string()],
            next_action: "Retake the screenshot".to_string(),
            ..MissionVerdict::default()
        }
    }
}

#[async_trait]
impl MissionReviewer for FakeReviewer {
    async fn verify(&self, request: ReviewRequest) -> Result<MissionVerdict, ReviewError> {
        self.requests.lock().unwrap().push(request);
        self.verdicts.lock().unwrap().remove(0)
    }
}

fn evidence() -> EvidenceFile {
    EvidenceFile {
        file_name: "proof.png".to_string(),
        content_type: "image/png".to_string(),
        bytes: vec![1, 2, 3],
    }
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 27).unwrap()
}

fn pass_all_steps(
    engine: &ProgressEngine,
    record: ProgressRecord,
    module_id: &str,
    steps: usize,
) -> ProgressRecord {
    (0..steps).fold(record, |acc, index| {
        engine.mark_step_done_on(&acc, module_id, index, today()).record
    })
}

#[test]
fn step_rewards_are_idempotent() {
    let engine = ProgressEngine::default();
    let record = ProgressRecord::default();

    let after = pass_all_steps(&engine, record, "core-fact-check", 3);
    assert_eq!(after.xp, 3 * 18);
    assert_eq!(after.gems, 1);

    // Re-doing every step changes nothing
    let again = pass_all_steps(&engine, after.clone(), "core-fact-check", 3);
    assert_eq!(again.xp, after.xp);
    assert_eq!(again.gems, after.gems);
    assert_eq!(again.count_passed_steps("core-fact-check", 3), 3);
}

#[test]
fn quiz_requires_theory_first_and_keeps_best_score() {
    let engine = ProgressEngine::default();
    let module = module_by_id("core-fact-check").unwrap();
    let plan = build_lesson_plan(module, Lang::En, &LearnerProfile::default());
    let record = ProgressRecord::default();

    // Theory not done yet
    let premature = engine.submit_block_quiz_on(
        &record,
        &module.id,
        &plan,
        &BTreeMap::new(),
        today(),
    );
    assert_eq!(premature.unwrap_err(), Rejection::TheoryIncomplete);

    let ready = pass_all_steps(&engine, record, &module.id, plan.steps.len());
    let hearts_before = ready.hearts;

    // 2 of 3 correct: 67%, below the 70% bar
    let questions = plan.quiz_questions();
    let mut answers: BTreeMap<usize, usize> = questions
        .iter()
        .enumerate()
        .map(|(index, step)| (index, step.quiz.as_ref().unwrap().correct_index))
        .collect();
    answers.insert(0, 99);

    let failed = engine
        .submit_block_quiz_on(&ready, &module.id, &plan, &answers, today())
        .unwrap();
    assert!(!failed.passed);
    assert_eq!(failed.score, 67);
    assert!(!failed.newly_rewarded);
    assert_eq!(failed.record.hearts, hearts_before - 1);
    assert_eq!(failed.record.block_quiz[&module.id].score, 67);
    assert!(!failed.record.quiz_passed(&module.id));

    // All correct: passes, pays the bonus once
    answers.insert(0, questions[0].quiz.as_ref().unwrap().correct_index);
    let passed = engine
        .submit_block_quiz_on(&failed.record, &module.id, &plan, &answers, today())
        .unwrap();
    assert!(passed.passed);
    assert_eq!(passed.score, 100);
    assert!(passed.newly_rewarded);
    assert_eq!(passed.record.xp, failed.record.xp + 32);
    assert_eq!(passed.record.gems, failed.record.gems + 3);

    // A worse retake keeps the pass flag and the best score
    answers.insert(0, 99);
    let retake = engine
        .submit_block_quiz_on(&passed.record, &module.id, &plan, &answers, today())
        .unwrap();
    assert!(!retake.passed);
    assert_eq!(retake.best_score, 100);
    assert!(retake.record.quiz_passed(&module.id));
    assert_eq!(retake.record.block_quiz[&module.id].score, 100);
    // No reward twice, no heart loss once already passed
    assert_eq!(retake.record.xp, passed.record.xp);
    assert_eq!(retake.record.hearts, passed.record.hearts);
}

#[tokio::test]
async fn mission_fail_then_pass_pays_once_and_overwrites_verdict() {
    let engine = ProgressEngine::default();
    let module = module_by_id("core-fact-check").unwrap();
    let plan = build_lesson_plan(module, Lang::En, &LearnerProfile::default());
    let record = ProgressRecord::default();
    let note = "I verified three claims from the model output against primary sources.";

    let reviewer = FakeReviewer::new(vec![
        Ok(FakeReviewer::failing(40)),
        Ok(FakeReviewer::passing(90)),
        Ok(FakeReviewer::passing(95)),
    ]);

    let failed = engine
        .verify_mission_on(
            &record,
            &module.id,
            module.title.get(Lang::En),
            &plan.mission,
            note,
            Some(evidence()),
            Lang::En,
            &reviewer,
            today(),
        )
        .await
        .unwrap();
    assert!(!failed.verdict.passed);
    assert_eq!(failed.record.hearts, 4);
    assert_eq!(failed.record.xp, 0);
    assert!(!failed.record.mission_passed(&module.id));

    let passed = engine
        .verify_mission_on(
            &failed.record,
            &module.id,
            module.title.get(Lang::En),
            &plan.mission,
            note,
            Some(evidence()),
            Lang::En,
            &reviewer,
            today(),
        )
        .await
        .unwrap();
    assert!(passed.verdict.passed);
    assert!(passed.newly_rewarded);
    assert_eq!(passed.record.xp, 40);
    assert_eq!(passed.record.gems, 5);
    assert!(passed.record.mission_passed(&module.id));

    // A second passing review overwrites the verdict but never pays again
    let repeat = engine
        .verify_mission_on(
            &passed.record,
            &module.id,
            module.title.get(Lang::En),
            &plan.mission,
            note,
            Some(evidence()),
            Lang::En,
            &reviewer,
            today(),
        )
        .await
        .unwrap();
    assert!(!repeat.newly_rewarded);
    assert_eq!(repeat.record.xp, 40);
    assert_eq!(repeat.record.mission[&module.id].score, 95);

    // The reviewer saw the mission checkpoints every time
    let requests = reviewer.requests.lock().unwrap();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0].required_checks, plan.mission.checkpoints);
}

#[tokio::test]
async fn mission_validation_happens_before_the_reviewer_is_called() {
    let engine = ProgressEngine::default();
    let module = module_by_id("core-fact-check").unwrap();
    let plan = build_lesson_plan(module, Lang::En, &LearnerProfile::default());
    let record = ProgressRecord::default();
    let reviewer = FakeReviewer::new(vec![]);

    let no_evidence = engine
        .verify_mission_on(
            &record,
            &module.id,
            "Fact-checking",
            &plan.mission,
            "A note that is long enough to pass the length check easily.",
            None,
            Lang::En,
            &reviewer,
            today(),
        )
        .await;
    assert!(matches!(
        no_evidence.unwrap_err(),
        EngineError::Validation(Rejection::MissingEvidence)
    ));

    let short_note = engine
        .verify_mission_on(
            &record,
            &module.id,
            "Fact-checking",
            &plan.mission,
            "too short",
            Some(evidence()),
            Lang::En,
            &reviewer,
            today(),
        )
        .await;
    assert!(matches!(
        short_note.unwrap_err(),
        EngineError::Validation(Rejection::NoteTooShort { min: 20 })
    ));

    // The scripted reviewer was never consulted
    assert!(reviewer.requests.lock().unwrap().is_empty());
    assert!(record.mission.is_empty());
}

#[tokio::test]
async fn reviewer_outage_leaves_the_record_untouched() {
    let engine = ProgressEngine::default();
    let module = module_by_id("core-fact-check").unwrap();
    let plan = build_lesson_plan(module, Lang::En, &LearnerProfile::default());
    let record = ProgressRecord::default();
    let reviewer = FakeReviewer::new(vec![Err(ReviewError::Service(
        "model overloaded".to_string(),
    ))]);

    let result = engine
        .verify_mission_on(
            &record,
            &module.id,
            "Fact-checking",
            &plan.mission,
            "I verified the claims against two independent sources today.",
            Some(evidence()),
            Lang::En,
            &reviewer,
            today(),
        )
        .await;
    assert!(matches!(result.unwrap_err(), EngineError::Review(_)));
    assert_eq!(record.hearts, 5);
    assert!(record.mission.is_empty());
    assert!(record.practice.is_empty());
}

#[tokio::test]
async fn completing_a_module_unlocks_the_next_and_pays_once() {
    let engine = ProgressEngine::default();
    let profile = LearnerProfile::default();
    let path = build_adaptive_path(&profile, all_modules(), 14);
    let first = &path[0].module;
    let plan = build_lesson_plan(first, Lang::En, &profile);

    let record = ProgressRecord::default();

    // Not ready yet
    let premature = engine.complete_module_on(&record, &path, &first.id, plan.steps.len(), today());
    assert_eq!(premature.unwrap_err(), Rejection::ModuleRequirementsUnmet);

    // Theory
    let record = pass_all_steps(&engine, record, &first.id, plan.steps.len());

    // Quiz
    let answers: BTreeMap<usize, usize> = plan
        .quiz_questions()
        .iter()
        .enumerate()
        .map(|(index, step)| (index, step.quiz.as_ref().unwrap().correct_index))
        .collect();
    let record = engine
        .submit_block_quiz_on(&record, &first.id, &plan, &answers, today())
        .unwrap()
        .record;

    // Mission
    let reviewer = FakeReviewer::new(vec![Ok(FakeReviewer::passing(92))]);
    let record = engine
        .verify_mission_on(
            &record,
            &first.id,
            first.title.get(Lang::En),
            &plan.mission,
            "I completed the practical task and captured screenshot evidence.",
            Some(evidence()),
            Lang::En,
            &reviewer,
            today(),
        )
        .await
        .unwrap()
        .record;

    // Drain some hearts so the completion bonus is observable
    let record = engine.lose_heart(&engine.lose_heart(&record));
    let hearts_before = record.hearts;
    let xp_before = record.xp;

    let done = engine
        .complete_module_on(&record, &path, &first.id, plan.steps.len(), today())
        .unwrap();
    assert!(done.newly_completed);
    assert_eq!(done.record.xp, xp_before + 64);
    assert_eq!(done.record.hearts, hearts_before + 1);
    assert_eq!(done.next_module_id.as_deref(), Some(path[1].module.id.as_str()));
    assert!(done.record.is_completed(&first.id));

    // Unlocks cover everything completed plus the next frontier module
    let unlocked = unlocked_module_ids(&path, &done.record);
    assert!(unlocked.contains(&path[0].module.id));
    assert!(unlocked.contains(&path[1].module.id));
    assert!(!unlocked.contains(&path[2].module.id));

    // Completing again: no duplicate entry, no double pay, no extra heart
    let again = engine
        .complete_module_on(&done.record, &path, &first.id, plan.steps.len(), today())
        .unwrap();
    assert!(!again.newly_completed);
    assert_eq!(again.record.xp, done.record.xp);
    assert_eq!(again.record.hearts, done.record.hearts);
    assert_eq!(
        again
            .record
            .completed
            .iter()
            .filter(|id| *id == &first.id)
            .count(),
        1
    );
}

#[test]
fn hearts_never_leave_their_range_under_repeated_failures() {
    let engine = ProgressEngine::default();
    let module = module_by_id("core-fact-check").unwrap();
    let plan = build_lesson_plan(module, Lang::En, &LearnerProfile::default());

    let mut record = pass_all_steps(
        &engine,
        ProgressRecord::default(),
        &module.id,
        plan.steps.len(),
    );

    let wrong: BTreeMap<usize, usize> = (0..plan.quiz_questions().len())
        .map(|index| (index, 99))
        .collect();
    for _ in 0..10 {
        record = engine
            .submit_block_quiz_on(&record, &module.id, &plan, &wrong, today())
            .unwrap()
            .record;
        assert!(record.hearts <= 5);
    }
    assert_eq!(record.hearts, 0);

    let restored = engine.restore_hearts(&record);
    assert_eq!(restored.hearts, 5);
}

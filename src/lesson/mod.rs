//! Lesson Plan Generator
//!
//! Pure and deterministic: `(module, language, profile)` always yields the
//! same plan. A small number of specially authored modules get hand-written
//! plans; every other module gets a generic plan derived from its content
//! sections. Plans are regenerated on every view and never persisted.

mod answers;
mod generic;
mod keywords;
mod presets;

pub use answers::{evaluate_reply, evaluate_step_quiz, QuizCheck, ReplyEvaluation};

use serde::{Deserialize, Serialize};

use crate::catalog::Module;
use crate::types::{Lang, LearnerProfile};
use keywords::collect_keywords;

/// Single-choice mini quiz attached to a theory step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub question: String,
    pub options: Vec<String>,
    pub correct_index: usize,
    pub explain: String,
}

/// One theory step of a lesson
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    pub id: String,
    pub title: String,
    pub teaching: String,
    pub example: String,
    /// What the learner is asked to do after reading
    pub action: String,
    pub answer_hint: String,
    pub answer_example: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz: Option<Quiz>,
    /// Free-text scoring keywords; unused when a structured quiz exists
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// The practical, evidence-verified task of a module
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mission {
    pub title: String,
    pub description: String,
    pub instructions: Vec<String>,
    /// Review contract: what must be visible in the evidence
    pub checkpoints: Vec<String>,
    pub note_hint: String,
}

/// Derived, non-persisted plan for one module view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LessonPlan {
    pub intro_script: String,
    pub steps: Vec<Step>,
    pub mission: Mission,
}

impl LessonPlan {
    /// An empty plan, used when a module cannot be resolved
    pub fn empty() -> Self {
        Self {
            intro_script: String::new(),
            steps: Vec::new(),
            mission: Mission::default(),
        }
    }

    /// The steps that carry a structured quiz, in step order
    pub fn quiz_questions(&self) -> Vec<&Step> {
        self.steps
            .iter()
            .filter(|step| {
                step.quiz
                    .as_ref()
                    .map(|quiz| !quiz.options.is_empty())
                    .unwrap_or(false)
            })
            .collect()
    }
}

/// Everything needed to author one step; keywords are derived on build
pub(crate) struct StepSpec {
    pub id: String,
    pub title: String,
    pub teaching: String,
    pub example: String,
    pub action: String,
    pub answer_hint: String,
    pub answer_example: String,
    pub quiz_question: String,
    pub quiz_options: Vec<String>,
    pub quiz_correct: usize,
    pub quiz_explain: String,
    /// Extra phrases folded into keyword derivation
    pub must_include: Vec<String>,
    pub lang: Lang,
}

impl StepSpec {
    pub(crate) fn into_step(self) -> Step {
        let keyword_source = format!(
            "{} {} {}",
            self.teaching,
            self.action,
            self.must_include.join(" ")
        );
        Step {
            id: self.id,
            title: self.title,
            teaching: self.teaching,
            example: self.example,
            action: self.action,
            answer_hint: self.answer_hint,
            answer_example: self.answer_example,
            quiz: Some(Quiz {
                question: self.quiz_question,
                options: self.quiz_options,
                correct_index: self.quiz_correct,
                explain: self.quiz_explain,
            }),
            keywords: collect_keywords(&keyword_source, self.lang),
        }
    }
}

/// Generate the lesson plan for one module
pub fn build_lesson_plan(module: &Module, lang: Lang, profile: &LearnerProfile) -> LessonPlan {
    match module.id.as_str() {
        "foundation-ai-map" => presets::ai_map(lang),
        "foundation-account-setup" => presets::account_setup(lang),
        _ => generic::generic_plan(module, lang, profile),
    }
}

/// Build the ready-to-copy structured prompt for a module, personalized by
/// the learner's role and industry
pub fn build_prompt_template(module: &Module, lang: Lang, profile: &LearnerProfile) -> String {
    let title = module.title.get(lang);
    let role = if profile.role.is_empty() {
        match lang {
            Lang::Ru => "специалист",
            Lang::En => "specialist",
        }
    } else {
        profile.role.as_str()
    };
    let industry = if profile.industry.is_empty() {
        match lang {
            Lang::Ru => "универсально",
            Lang::En => "general",
        }
    } else {
        profile.industry.as_str()
    };

    match lang {
        Lang::Ru => [
            format!("Задача: {title}"),
            format!("Роль: Ты эксперт по направлению {role}."),
            format!(
                "Контекст: Отрасль {industry}, уровень пользователя {}.",
                profile.level
            ),
            "Цель: Дай результат, который можно применить сегодня без лишней теории.".to_string(),
            "Формат ответа: 1) короткий план, 2) готовый пример, 3) чеклист проверки.".to_string(),
            "Ограничения: без персональных данных, без непроверенных фактов, без воды.".to_string(),
            "Если данных не хватает, сначала задай до 3 уточняющих вопросов.".to_string(),
        ]
        .join("\n"),
        Lang::En => [
            format!("Task: {title}"),
            format!("Role: You are an expert for {role}."),
            format!(
                "Context: Industry {industry}, learner level {}.",
                profile.level
            ),
            "Goal: Deliver something practical that can be used today.".to_string(),
            "Output: 1) short plan, 2) ready-to-use example, 3) quality checklist.".to_string(),
            "Constraints: no personal data, no unverified claims, no fluff.".to_string(),
            "If context is missing, ask up to 3 clarifying questions first.".to_string(),
        ]
        .join("\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::module_by_id;

    #[test]
    fn preset_modules_get_hand_authored_plans() {
        let profile = LearnerProfile::default();
        let module = module_by_id("foundation-ai-map").unwrap();
        let plan = build_lesson_plan(module, Lang::En, &profile);

        assert_eq!(plan.steps.len(), 3);
        assert!(!plan.intro_script.is_empty());
        assert_eq!(plan.quiz_questions().len(), 3);
        assert_eq!(plan.mission.instructions.len(), 5);
        assert!(!plan.mission.checkpoints.is_empty());
    }

    #[test]
    fn other_modules_get_generic_plans() {
        let profile = LearnerProfile::default();
        let module = module_by_id("core-fact-check").unwrap();

        let plan_en = build_lesson_plan(module, Lang::En, &profile);
        assert_eq!(plan_en.steps.len(), 3);
        assert!(plan_en.intro_script.contains(module.title.get(Lang::En)));

        let plan_ru = build_lesson_plan(module, Lang::Ru, &profile);
        assert_eq!(plan_ru.steps.len(), 3);
        assert!(plan_ru.intro_script.contains(module.title.get(Lang::Ru)));
    }

    #[test]
    fn plans_are_deterministic() {
        let profile = LearnerProfile::default();
        let module = module_by_id("core-prompt-framework").unwrap();
        let first = build_lesson_plan(module, Lang::En, &profile);
        let second = build_lesson_plan(module, Lang::En, &profile);
        assert_eq!(first, second);
    }

    #[test]
    fn prompt_template_carries_role_and_industry() {
        let profile = LearnerProfile {
            role: "teacher".to_string(),
            industry: "education".to_string(),
            ..LearnerProfile::default()
        };
        let module = module_by_id("foundation-prompt-blueprint").unwrap();
        let template = build_prompt_template(module, Lang::En, &profile);
        assert!(template.contains("teacher"));
        assert!(template.contains("education"));
        assert!(template.contains(module.title.get(Lang::En)));
    }
}

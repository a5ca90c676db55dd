//! Generic plan derivation for modules without a hand-authored lesson.
//!
//! Theory steps come straight from the module's content sections, so the
//! catalog stays the single source of truth for teaching text.

use super::{LessonPlan, Mission, StepSpec};
use crate::catalog::Module;
use crate::types::{Lang, LearnerProfile};
use crate::lesson::keywords::clip;

/// Teaching text bound per derived step, in characters
const TEACHING_CLIP_CHARS: usize = 320;

/// Content sections turned into theory steps
const MAX_GENERIC_STEPS: usize = 3;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

pub(super) fn generic_plan(module: &Module, lang: Lang, profile: &LearnerProfile) -> LessonPlan {
    let title = module.title.get(lang);
    let role = if profile.role.is_empty() {
        match lang {
            Lang::Ru => "специалист",
            Lang::En => "specialist",
        }
    } else {
        profile.role.as_str()
    };

    // Fall back to the primary language when a translation is missing.
    let mut sections: &[String] = module.sections.get(lang);
    if sections.is_empty() {
        sections = module.sections.get(Lang::Ru);
    }

    let steps = sections
        .iter()
        .take(MAX_GENERIC_STEPS)
        .enumerate()
        .map(|(index, section)| {
            let number = index + 1;
            match lang {
                Lang::Ru => StepSpec {
                    id: format!("{}-s{}", module.id, number),
                    title: format!("Шаг {number}: ключевая идея"),
                    teaching: clip(section, TEACHING_CLIP_CHARS),
                    example: format!(
                        "Пример для роли {role}: примени эту идею в одной рабочей задаче сегодня."
                    ),
                    action: "Опиши, как применишь эту идею в своей задаче.".to_string(),
                    answer_hint: "Шаблон: 'Я сделаю ... чтобы получить ...'".to_string(),
                    answer_example: "Я сделаю короткий тест этой идеи на реальной задаче, чтобы получить измеримый результат.".to_string(),
                    quiz_question: "Как правильно закрепить этот шаг?".to_string(),
                    quiz_options: strings(&[
                        "Пропустить практику",
                        "Сразу применить идею к реальной задаче",
                        "Оставить без проверки",
                    ]),
                    quiz_correct: 1,
                    quiz_explain: "Верно: закрепление идет только через практику.".to_string(),
                    must_include: strings(&["сделаю", "задача", "получить"]),
                    lang,
                },
                Lang::En => StepSpec {
                    id: format!("{}-s{}", module.id, number),
                    title: format!("Step {number}: key idea"),
                    teaching: clip(section, TEACHING_CLIP_CHARS),
                    example: format!(
                        "Example for role {role}: apply this idea to one real task today."
                    ),
                    action: "Describe how you will apply this idea to your task.".to_string(),
                    answer_hint: "Template: 'I will ... to get ...'".to_string(),
                    answer_example: "I will run a quick test of this idea on a real task to get a measurable result.".to_string(),
                    quiz_question: "How do you lock in this step?".to_string(),
                    quiz_options: strings(&[
                        "Skip practice",
                        "Apply it to a real task immediately",
                        "Leave it unchecked",
                    ]),
                    quiz_correct: 1,
                    quiz_explain: "Correct: only practice locks in the idea.".to_string(),
                    must_include: strings(&["will", "task", "result"]),
                    lang,
                },
            }
            .into_step()
        })
        .collect();

    let (intro_script, mission) = match lang {
        Lang::Ru => (
            format!(
                "Модуль '{title}'. Кратко разберем главное и сразу перейдем к практике с проверкой результата."
            ),
            Mission {
                title: format!("Практика: {title}"),
                description: "Выполни практическое задание по теме модуля в реальном AI-сервисе и приложи скриншот подтверждения.".to_string(),
                instructions: strings(&[
                    "Открой AI-сервис и начни новый чат.",
                    "Сформулируй запрос по теме модуля: цель, формат, ограничения.",
                    "Получи результат и оцени его качество.",
                    "Доработай запрос минимум один раз.",
                    "Сделай скриншот с запросом и финальным результатом.",
                ]),
                checkpoints: strings(&[
                    "Виден запрос пользователя",
                    "Виден результат AI",
                    "Есть комментарий ученика",
                ]),
                note_hint: "Опиши 2-3 предложениями, что сделал и какой результат получил.".to_string(),
            },
        ),
        Lang::En => (
            format!(
                "Module '{title}'. We keep theory short and move straight to verified practice."
            ),
            Mission {
                title: format!("Practice: {title}"),
                description: "Complete a practical task on this module topic in a real AI service and upload screenshot evidence.".to_string(),
                instructions: strings(&[
                    "Open an AI service and start a new chat.",
                    "Write a prompt for this module topic: goal, format, constraints.",
                    "Get the output and judge its quality.",
                    "Refine the prompt at least once.",
                    "Take a screenshot with prompt and final output.",
                ]),
                checkpoints: strings(&[
                    "Learner prompt is visible",
                    "AI output is visible",
                    "Learner note is provided",
                ]),
                note_hint: "Describe in 2-3 sentences what you did and what result you got.".to_string(),
            },
        ),
    };

    LessonPlan {
        intro_script,
        steps,
        mission,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::module_by_id;

    #[test]
    fn steps_follow_module_sections() {
        let module = module_by_id("core-fact-check").unwrap();
        let plan = generic_plan(module, Lang::En, &LearnerProfile::default());
        assert_eq!(plan.steps.len(), 3);
        for (index, step) in plan.steps.iter().enumerate() {
            assert_eq!(step.id, format!("core-fact-check-s{}", index + 1));
            assert!(!step.teaching.is_empty());
            assert!(step.quiz.is_some());
            assert!(!step.keywords.is_empty());
        }
    }

    #[test]
    fn example_line_carries_the_learner_role() {
        let module = module_by_id("automation-daily-workflows").unwrap();
        let profile = LearnerProfile {
            role: "manager".to_string(),
            ..LearnerProfile::default()
        };
        let plan = generic_plan(module, Lang::En, &profile);
        assert!(plan.steps[0].example.contains("manager"));
    }

    #[test]
    fn mission_names_the_module() {
        let module = module_by_id("quality-control-loop").unwrap();
        let plan = generic_plan(module, Lang::Ru, &LearnerProfile::default());
        let title = module.title.get(Lang::Ru);
        assert!(plan.mission.title.contains(title));
        assert_eq!(plan.mission.instructions.len(), 5);
        assert_eq!(plan.mission.checkpoints.len(), 3);
    }
}

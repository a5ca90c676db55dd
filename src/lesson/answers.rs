//! Scoring of learner responses to theory steps.
//!
//! Two paths exist: a structured single-choice quiz, and a free-text reply
//! checked for an action verb plus step keywords. The free-text path is the
//! fallback for steps without a quiz.

use once_cell::sync::Lazy;
use regex::Regex;

use super::Step;
use crate::types::Lang;

/// Keyword matches required for a free-text reply to pass
const MIN_KEYWORD_HITS: usize = 1;

static ACTION_VERBS_RU: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        "сделаю|применю|проверю|создам|запущу|использую|настрою|сравню|сохраню|выберу|соберу|напишу|пройду|зарегистрируюсь",
    )
    .expect("static pattern")
});

static ACTION_VERBS_EN: Lazy<Regex> = Lazy::new(|| {
    Regex::new("i will|apply|check|create|build|run|use|compare|save|choose|write|configure|register")
        .expect("static pattern")
});

fn action_verbs(lang: Lang) -> &'static Regex {
    match lang {
        Lang::Ru => &ACTION_VERBS_RU,
        Lang::En => &ACTION_VERBS_EN,
    }
}

/// Outcome of scoring a free-text step reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyEvaluation {
    pub ok: bool,
    pub feedback: String,
    /// Whether this attempt should cost a heart
    pub lose_heart: bool,
}

/// Score a free-text reply against the step's intent markers
pub fn evaluate_reply(step: &Step, reply: &str, lang: Lang, min_chars: usize) -> ReplyEvaluation {
    let cleaned = reply.trim().to_lowercase();

    if cleaned.chars().count() < min_chars {
        return ReplyEvaluation {
            ok: false,
            feedback: match lang {
                Lang::Ru => format!(
                    "Ответ слишком короткий. Напиши минимум {min_chars} символов по шаблону шага."
                ),
                Lang::En => format!(
                    "The reply is too short. Write at least {min_chars} characters using the step template."
                ),
            },
            lose_heart: true,
        };
    }

    let has_action = action_verbs(lang).is_match(&cleaned);
    let keyword_hits = step
        .keywords
        .iter()
        .filter(|keyword| cleaned.contains(keyword.as_str()))
        .count();

    if has_action && keyword_hits >= MIN_KEYWORD_HITS {
        ReplyEvaluation {
            ok: true,
            feedback: match lang {
                Lang::Ru => "Принято. Ответ конкретный и по теме шага. Идем дальше.".to_string(),
                Lang::En => "Accepted. The answer is specific and on-topic. Moving on.".to_string(),
            },
            lose_heart: false,
        }
    } else {
        ReplyEvaluation {
            ok: false,
            feedback: match lang {
                Lang::Ru => "Пока не принято: добавь конкретное действие и термины из шага. Посмотри пример ответа и попробуй еще раз.".to_string(),
                Lang::En => "Not accepted yet: add a concrete action and terms from this step. Check the answer example and retry.".to_string(),
            },
            lose_heart: true,
        }
    }
}

/// Outcome of checking one structured quiz answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizCheck {
    pub ok: bool,
    pub feedback: String,
}

/// Check the learner's pick against a step's structured quiz
pub fn evaluate_step_quiz(step: &Step, selected: Option<usize>, lang: Lang) -> QuizCheck {
    let Some(quiz) = step.quiz.as_ref().filter(|quiz| !quiz.options.is_empty()) else {
        return QuizCheck {
            ok: true,
            feedback: String::new(),
        };
    };

    let Some(index) = selected else {
        return QuizCheck {
            ok: false,
            feedback: match lang {
                Lang::Ru => "Выбери один вариант ответа.".to_string(),
                Lang::En => "Choose one option.".to_string(),
            },
        };
    };

    if index == quiz.correct_index {
        QuizCheck {
            ok: true,
            feedback: if quiz.explain.is_empty() {
                match lang {
                    Lang::Ru => "Верно.".to_string(),
                    Lang::En => "Correct.".to_string(),
                }
            } else {
                quiz.explain.clone()
            },
        }
    } else {
        QuizCheck {
            ok: false,
            feedback: match lang {
                Lang::Ru => "Неверно. Перечитай шаг и попробуй снова.".to_string(),
                Lang::En => "Incorrect. Re-read the step and try again.".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lesson::Quiz;

    fn step_with_keywords(keywords: &[&str]) -> Step {
        Step {
            id: "test-1".to_string(),
            title: "t".to_string(),
            teaching: "t".to_string(),
            example: "e".to_string(),
            action: "a".to_string(),
            answer_hint: "h".to_string(),
            answer_example: "x".to_string(),
            quiz: None,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    #[test]
    fn short_replies_are_rejected_with_heart_loss() {
        let step = step_with_keywords(&["prompt"]);
        let verdict = evaluate_reply(&step, "too short", Lang::En, 30);
        assert!(!verdict.ok);
        assert!(verdict.lose_heart);
        assert!(verdict.feedback.contains("30"));
    }

    #[test]
    fn action_plus_keyword_passes() {
        let step = step_with_keywords(&["prompt", "structure"]);
        let verdict = evaluate_reply(
            &step,
            "I will apply a structured prompt to my daily reporting task.",
            Lang::En,
            30,
        );
        assert!(verdict.ok);
        assert!(!verdict.lose_heart);
    }

    #[test]
    fn long_reply_without_action_verb_fails() {
        let step = step_with_keywords(&["prompt"]);
        let verdict = evaluate_reply(
            &step,
            "This is a very long reflection about a prompt but nothing actionable here at all honestly.",
            Lang::En,
            30,
        );
        // "actionable" does not match the verb list; "about" neither
        assert!(!verdict.ok);
        assert!(verdict.lose_heart);
    }

    #[test]
    fn russian_action_verbs_are_recognized() {
        let step = step_with_keywords(&["запрос"]);
        let verdict = evaluate_reply(
            &step,
            "Я сделаю структурный запрос для своей рабочей задачи уже сегодня.",
            Lang::Ru,
            30,
        );
        assert!(verdict.ok);
    }

    #[test]
    fn quiz_check_handles_missing_quiz_and_wrong_picks() {
        let mut step = step_with_keywords(&[]);
        assert!(evaluate_step_quiz(&step, None, Lang::En).ok);

        step.quiz = Some(Quiz {
            question: "q".to_string(),
            options: vec!["a".to_string(), "b".to_string()],
            correct_index: 1,
            explain: "because".to_string(),
        });
        let missing = evaluate_step_quiz(&step, None, Lang::En);
        assert!(!missing.ok);

        let wrong = evaluate_step_quiz(&step, Some(0), Lang::En);
        assert!(!wrong.ok);

        let right = evaluate_step_quiz(&step, Some(1), Lang::En);
        assert!(right.ok);
        assert_eq!(right.feedback, "because");
    }
}

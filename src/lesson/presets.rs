//! Hand-authored lesson plans for the specially curated foundation modules.
//!
//! These two modules open the curriculum for most learners, so their plans
//! are fully written out per language instead of being derived from catalog
//! sections.

use super::{LessonPlan, Mission, StepSpec};
use crate::types::Lang;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

pub(super) fn ai_map(lang: Lang) -> LessonPlan {
    match lang {
        Lang::Ru => LessonPlan {
            intro_script: "Привет. Я твой AI-наставник. Сейчас без сложных слов разберем, какие бывают AI, где какой использовать, и сразу сделаем первую практику. После каждого шага ты пишешь короткий ответ по шаблону, а я проверяю.".to_string(),
            steps: vec![
                StepSpec {
                    id: "ai-map-1".to_string(),
                    title: "Что такое AI простыми словами".to_string(),
                    teaching: "AI - это инструмент, который помогает быстрее думать, писать, создавать и проверять результат. Он не заменяет тебя, а ускоряет работу, если ты даешь ему понятную задачу.".to_string(),
                    example: "Пример: вместо 40 минут на черновик письма ты можешь получить базовый вариант за 2 минуты и доработать его вручную.".to_string(),
                    action: "Напиши, какую одну задачу ты хочешь ускорить с помощью AI уже сегодня.".to_string(),
                    answer_hint: "Шаблон ответа: 'Я понял(а), что ... Для меня это полезно в ... Сейчас сделаю ...'".to_string(),
                    answer_example: "Я понял, что AI ускоряет черновую работу. Для меня это полезно в написании писем клиентам. Сейчас сделаю шаблон ответа на частые вопросы.".to_string(),
                    quiz_question: "Главная роль AI в обучении на старте?".to_string(),
                    quiz_options: strings(&[
                        "Полностью заменить человека",
                        "Ускорить работу и повысить качество при проверке человеком",
                        "Работать без цели и контекста",
                    ]),
                    quiz_correct: 1,
                    quiz_explain: "Верно: AI дает ускорение, но финальное решение и ответственность за человеком.".to_string(),
                    must_include: strings(&["задачу", "сделаю", "полезно"]),
                    lang,
                }
                .into_step(),
                StepSpec {
                    id: "ai-map-2".to_string(),
                    title: "Какие бывают AI и когда какой нужен".to_string(),
                    teaching: "Текстовый AI - для писем, идей, анализа и кода. Графический AI - для картинок и дизайна. Видео AI - для роликов и сцен. Голосовой AI - для озвучки и расшифровки.".to_string(),
                    example: "Пример выбора: нужно объяснить тему ученику - берешь текстовый AI. Нужно сделать обложку урока - графический AI.".to_string(),
                    action: "Выбери один тип AI под свою задачу и объясни почему.".to_string(),
                    answer_hint: "Шаблон: 'Для задачи ... я выберу ... AI, потому что ...'".to_string(),
                    answer_example: "Для задачи подготовки поста я выберу текстовый AI, потому что мне нужен быстрый черновик и структура.".to_string(),
                    quiz_question: "Какой AI подходит для создания обложки презентации?".to_string(),
                    quiz_options: strings(&["Текстовый", "Графический", "Голосовой"]),
                    quiz_correct: 1,
                    quiz_explain: "Верно: визуальные материалы делает графический AI.".to_string(),
                    must_include: strings(&["выберу", "потому", "задача"]),
                    lang,
                }
                .into_step(),
                StepSpec {
                    id: "ai-map-3".to_string(),
                    title: "Как выбрать AI-инструмент без ошибок".to_string(),
                    teaching: "Правильная последовательность: 1) цель, 2) формат результата, 3) ограничения по качеству, времени и безопасности. Если пропустить шаги, ответ будет размытым.".to_string(),
                    example: "Пример формулировки: 'Цель - сделать план урока. Формат - таблица. Ограничение - до 5 пунктов, без непроверенных фактов'.".to_string(),
                    action: "Составь мини-запрос по этой формуле под свою задачу.".to_string(),
                    answer_hint: "Шаблон: 'Цель: ... Формат: ... Ограничения: ...'".to_string(),
                    answer_example: "Цель: сделать описание курса. Формат: список из 5 блоков. Ограничения: простой язык, без сложных терминов.".to_string(),
                    quiz_question: "Что должно быть первым в хорошем запросе?".to_string(),
                    quiz_options: strings(&["Случайный длинный текст", "Цель задачи", "Только стиль ответа"]),
                    quiz_correct: 1,
                    quiz_explain: "Верно: сначала всегда цель, иначе модель угадывает, что тебе нужно.".to_string(),
                    must_include: strings(&["цель", "формат", "ограничения"]),
                    lang,
                }
                .into_step(),
            ],
            mission: Mission {
                title: "Практика: первый рабочий результат в AI".to_string(),
                description: "Задача: зайди в любой AI-сервис, запусти новый чат, отправь свой структурный запрос и получи ответ. Сделай скриншот экрана, где видно сервис, запрос и результат.".to_string(),
                instructions: strings(&[
                    "Открой браузер и зайди в выбранный AI-сервис.",
                    "Нажми кнопку 'Новый чат' или 'New chat'.",
                    "Вставь свой запрос по формуле: цель -> формат -> ограничения.",
                    "Нажми отправить и дождись ответа.",
                    "Сделай скриншот, где видно сервис, запрос и ответ.",
                ]),
                checkpoints: strings(&[
                    "Виден интерфейс AI-сервиса",
                    "Виден твой запрос (цель/формат/ограничения)",
                    "Виден полученный ответ",
                    "Есть короткий комментарий: что получилось",
                ]),
                note_hint: "Опиши 2-3 предложениями: какой сервис использовал, какой запрос отправил, какой получил результат.".to_string(),
            },
        },
        Lang::En => LessonPlan {
            intro_script: "Hi. I am your AI coach. In this lesson we keep it simple: AI types, when to use each one, and one real practice right away. After every step, answer briefly using the template and I will check it.".to_string(),
            steps: vec![
                StepSpec {
                    id: "ai-map-1".to_string(),
                    title: "What AI means in plain language".to_string(),
                    teaching: "AI is a tool that helps you think, write, create, and review faster. It does not replace you. It speeds up execution when you provide a clear task.".to_string(),
                    example: "Example: instead of 40 minutes for a draft email, you can get version 1 in 2 minutes and refine it.".to_string(),
                    action: "Write one task you want to speed up with AI today.".to_string(),
                    answer_hint: "Template: 'I understood that ... This helps me in ... Now I will ...'".to_string(),
                    answer_example: "I understood that AI speeds up first drafts. This helps me with client replies. Now I will build a reusable response template.".to_string(),
                    quiz_question: "Main AI role for a beginner?".to_string(),
                    quiz_options: strings(&[
                        "Fully replace the human",
                        "Speed up work with human quality control",
                        "Work without context",
                    ]),
                    quiz_correct: 1,
                    quiz_explain: "Correct: AI accelerates work, while final responsibility remains with the human.".to_string(),
                    must_include: strings(&["task", "will", "help"]),
                    lang,
                }
                .into_step(),
                StepSpec {
                    id: "ai-map-2".to_string(),
                    title: "AI types and when to use them".to_string(),
                    teaching: "Text AI is for writing, analysis, and code. Image AI is for visuals and design. Video AI is for scenes and clips. Voice AI is for speech and transcription.".to_string(),
                    example: "Example: explain a topic -> text AI. Create lesson cover -> image AI.".to_string(),
                    action: "Pick one AI type for your current task and explain why.".to_string(),
                    answer_hint: "Template: 'For task ... I choose ... AI because ...'".to_string(),
                    answer_example: "For content drafting I choose text AI because I need structure and speed.".to_string(),
                    quiz_question: "Which AI is best for a presentation cover image?".to_string(),
                    quiz_options: strings(&["Text AI", "Image AI", "Voice AI"]),
                    quiz_correct: 1,
                    quiz_explain: "Correct: visual output requires image AI.".to_string(),
                    must_include: strings(&["choose", "because", "task"]),
                    lang,
                }
                .into_step(),
                StepSpec {
                    id: "ai-map-3".to_string(),
                    title: "How to choose a tool without mistakes".to_string(),
                    teaching: "Use this sequence: 1) goal, 2) output format, 3) constraints for quality, time, and safety. If you skip these, output becomes generic.".to_string(),
                    example: "Example request: 'Goal: lesson plan. Format: table. Constraints: max 5 points, no unverified facts'.".to_string(),
                    action: "Write a mini-request using that formula for your own task.".to_string(),
                    answer_hint: "Template: 'Goal: ... Format: ... Constraints: ...'".to_string(),
                    answer_example: "Goal: outline course module. Format: 5-point list. Constraints: plain language, no fake facts.".to_string(),
                    quiz_question: "What should come first in a strong request?".to_string(),
                    quiz_options: strings(&["Random long text", "Task goal", "Style only"]),
                    quiz_correct: 1,
                    quiz_explain: "Correct: goal first, then everything else.".to_string(),
                    must_include: strings(&["goal", "format", "constraints"]),
                    lang,
                }
                .into_step(),
            ],
            mission: Mission {
                title: "Practice: first real AI result".to_string(),
                description: "Open any AI service, start a new chat, send your structured request, and get an output. Upload a screenshot where service, prompt, and output are visible.".to_string(),
                instructions: strings(&[
                    "Open your chosen AI service in browser.",
                    "Click 'New chat'.",
                    "Paste your prompt with goal, format, and constraints.",
                    "Send it and wait for output.",
                    "Take one screenshot with service, prompt, and output visible.",
                ]),
                checkpoints: strings(&[
                    "AI service interface is visible",
                    "Your prompt is visible",
                    "Generated output is visible",
                    "Short learner comment is provided",
                ]),
                note_hint: "Add 2-3 sentences: which service you used, what prompt you sent, what result you got.".to_string(),
            },
        },
    }
}

pub(super) fn account_setup(lang: Lang) -> LessonPlan {
    match lang {
        Lang::Ru => LessonPlan {
            intro_script: "Сейчас настроим старт правильно: выбор сервиса, регистрация, безопасность и первый запрос. В конце ты приложишь скриншот как подтверждение практики.".to_string(),
            steps: vec![
                StepSpec {
                    id: "acc-1".to_string(),
                    title: "Выбор сервиса под задачу".to_string(),
                    teaching: "Не нужно регистрироваться во всех сервисах сразу. Выбери 1 текстовый и 1 визуальный инструмент под текущие задачи.".to_string(),
                    example: "Если цель - писать тексты и делать план урока, начинай с одного текстового сервиса.".to_string(),
                    action: "Напиши, какие 1-2 сервиса выберешь и под какие задачи.".to_string(),
                    answer_hint: "Шаблон: 'Выбираю ... для ... и ... для ...'".to_string(),
                    answer_example: "Выбираю текстовый сервис для писем и планов. И графический сервис для обложек к урокам.".to_string(),
                    quiz_question: "Лучший подход на старте?".to_string(),
                    quiz_options: strings(&[
                        "Сразу 10 сервисов",
                        "1-2 сервиса под конкретные задачи",
                        "Сначала оплатить всё, потом разбираться",
                    ]),
                    quiz_correct: 1,
                    quiz_explain: "Верно: сначала узкий и понятный стек, потом расширение.".to_string(),
                    must_include: strings(&["выбираю", "для", "задач"]),
                    lang,
                }
                .into_step(),
                StepSpec {
                    id: "acc-2".to_string(),
                    title: "Регистрация и безопасность".to_string(),
                    teaching: "После регистрации сразу включай защиту: сложный пароль и двухфакторная авторизация. Рабочие доступы лучше хранить отдельно от личных.".to_string(),
                    example: "Мини-чеклист: рабочая почта, 2FA, сохраненный способ восстановления доступа.".to_string(),
                    action: "Опиши, какие 2 шага безопасности ты включишь сразу после регистрации.".to_string(),
                    answer_hint: "Шаблон: 'Сразу включу ... и ...'".to_string(),
                    answer_example: "Сразу включу сложный пароль и двухфакторную авторизацию через приложение.".to_string(),
                    quiz_question: "Что обязательно включить после регистрации?".to_string(),
                    quiz_options: strings(&[
                        "Только красивый ник",
                        "2FA и надежный пароль",
                        "Ничего не настраивать",
                    ]),
                    quiz_correct: 1,
                    quiz_explain: "Верно: защита аккаунта обязательна с первого дня.".to_string(),
                    must_include: strings(&["включу", "пароль", "двухфактор"]),
                    lang,
                }
                .into_step(),
                StepSpec {
                    id: "acc-3".to_string(),
                    title: "Первый запуск и проверка результата".to_string(),
                    teaching: "Сразу после входа создай новый чат и отправь простой структурный запрос. Проверь, что ответ полезен, конкретен и без явных ошибок.".to_string(),
                    example: "Пример запроса: 'Роль: помощник преподавателя. Цель: план урока на 20 минут. Формат: 5 пунктов. Ограничение: простой язык'.".to_string(),
                    action: "Напиши, какой первый запрос отправишь после регистрации.".to_string(),
                    answer_hint: "Шаблон: 'Роль: ... Цель: ... Формат: ... Ограничение: ...'".to_string(),
                    answer_example: "Роль: помощник по контенту. Цель: сделать структуру поста. Формат: 5 пунктов. Ограничение: без сложных терминов.".to_string(),
                    quiz_question: "Что проверяем в первом ответе AI?".to_string(),
                    quiz_options: strings(&[
                        "Только длину текста",
                        "Пользу, конкретику и отсутствие грубых ошибок",
                        "Ничего не проверяем",
                    ]),
                    quiz_correct: 1,
                    quiz_explain: "Верно: важна практическая применимость и качество.".to_string(),
                    must_include: strings(&["роль", "цель", "формат"]),
                    lang,
                }
                .into_step(),
            ],
            mission: Mission {
                title: "Практика: регистрация и первый запрос".to_string(),
                description: "Зарегистрируйся в AI-сервисе (или зайди в уже созданный), включи базовую безопасность, отправь первый структурный запрос и получи ответ. Приложи скриншот как подтверждение.".to_string(),
                instructions: strings(&[
                    "Зайди на сайт AI-сервиса и нажми 'Регистрация' / 'Sign up'.",
                    "Подтверди почту и войди в аккаунт.",
                    "Перейди в настройки и включи 2FA/двухфакторную авторизацию.",
                    "Открой новый чат, отправь структурный запрос.",
                    "Сделай скриншот результата и загрузи в миссию.",
                ]),
                checkpoints: strings(&[
                    "Виден AI-сервис и активная сессия",
                    "Виден структурный запрос",
                    "Виден ответ сервиса",
                    "В комментарии описаны шаги безопасности",
                ]),
                note_hint: "Опиши: где зарегистрировался, что включил по безопасности, какой запрос отправил.".to_string(),
            },
        },
        Lang::En => LessonPlan {
            intro_script: "Now we set up the basics correctly: pick services, register safely, and run your first practical request. At the end you upload screenshot proof.".to_string(),
            steps: vec![
                StepSpec {
                    id: "acc-1".to_string(),
                    title: "Choose services by task".to_string(),
                    teaching: "Do not sign up for everything. Start with 1 text service and 1 visual service for your current goals.".to_string(),
                    example: "If you need writing and planning, begin with one text AI service.".to_string(),
                    action: "Write which 1-2 services you will use and for which tasks.".to_string(),
                    answer_hint: "Template: 'I choose ... for ... and ... for ...'".to_string(),
                    answer_example: "I choose a text service for emails and plans, and an image service for lesson covers.".to_string(),
                    quiz_question: "Best beginner setup?".to_string(),
                    quiz_options: strings(&[
                        "Register in 10 services",
                        "Start with 1-2 services for real tasks",
                        "Pay for all tools first",
                    ]),
                    quiz_correct: 1,
                    quiz_explain: "Correct: start focused, then expand.".to_string(),
                    must_include: strings(&["choose", "for", "tasks"]),
                    lang,
                }
                .into_step(),
                StepSpec {
                    id: "acc-2".to_string(),
                    title: "Signup and security".to_string(),
                    teaching: "After signup, enable security immediately: strong password and two-factor authentication. Keep work access separate from personal.".to_string(),
                    example: "Checklist: work email, 2FA enabled, account recovery path saved.".to_string(),
                    action: "Describe two security steps you will apply right after signup.".to_string(),
                    answer_hint: "Template: 'I will enable ... and ...'".to_string(),
                    answer_example: "I will enable a strong password and two-factor authentication.".to_string(),
                    quiz_question: "What is mandatory after signup?".to_string(),
                    quiz_options: strings(&[
                        "Only profile nickname",
                        "2FA and strong password",
                        "No setup needed",
                    ]),
                    quiz_correct: 1,
                    quiz_explain: "Correct: baseline security is mandatory.".to_string(),
                    must_include: strings(&["enable", "password", "two"]),
                    lang,
                }
                .into_step(),
                StepSpec {
                    id: "acc-3".to_string(),
                    title: "First run and quality check".to_string(),
                    teaching: "Open a new chat and send one structured request. Check output for usefulness, specificity, and obvious errors.".to_string(),
                    example: "Role: teaching assistant. Goal: 20-minute lesson plan. Format: 5 bullets. Constraint: plain language.".to_string(),
                    action: "Write your first structured request you will send.".to_string(),
                    answer_hint: "Template: 'Role: ... Goal: ... Format: ... Constraint: ...'".to_string(),
                    answer_example: "Role: content assistant. Goal: post outline. Format: 5 bullets. Constraint: no jargon.".to_string(),
                    quiz_question: "What do we verify in first AI output?".to_string(),
                    quiz_options: strings(&[
                        "Only output length",
                        "Usefulness, specificity, and major errors",
                        "Nothing",
                    ]),
                    quiz_correct: 1,
                    quiz_explain: "Correct: practical usefulness and quality come first.".to_string(),
                    must_include: strings(&["role", "goal", "format"]),
                    lang,
                }
                .into_step(),
            ],
            mission: Mission {
                title: "Practice: signup and first prompt".to_string(),
                description: "Sign up (or log in), configure security basics, send your first structured prompt, and upload screenshot evidence.".to_string(),
                instructions: strings(&[
                    "Open AI service website and click Sign up.",
                    "Verify email and log in.",
                    "Open settings and enable 2FA.",
                    "Start a new chat and send structured prompt.",
                    "Take screenshot and upload it as evidence.",
                ]),
                checkpoints: strings(&[
                    "AI service interface is visible",
                    "Structured prompt is visible",
                    "Model output is visible",
                    "Learner note includes security actions",
                ]),
                note_hint: "Describe: where you signed up, what security setup you enabled, what prompt you used.".to_string(),
            },
        },
    }
}

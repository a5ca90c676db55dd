//! Static catalog data.
//!
//! Authored in both languages. Foundation modules are tagged "all" on most
//! dimensions so they survive ranking for any profile; elective modules carry
//! narrow tags and compete on relevance score.

use super::{Module, ModuleTags};
use crate::types::Localized;

fn list(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn loc(ru: &str, en: &str) -> Localized<String> {
    Localized::new(ru.to_string(), en.to_string())
}

fn sections(ru: &[&str], en: &[&str]) -> Localized<Vec<String>> {
    Localized::new(list(ru), list(en))
}

#[allow(clippy::too_many_arguments)]
fn tags(
    industries: &[&str],
    roles: &[&str],
    levels: &[&str],
    age_groups: &[&str],
    learner_types: &[&str],
    goals: &[&str],
    formats: &[&str],
) -> ModuleTags {
    ModuleTags {
        industries: list(industries),
        roles: list(roles),
        levels: list(levels),
        age_groups: list(age_groups),
        learner_types: list(learner_types),
        goals: list(goals),
        formats: list(formats),
    }
}

/// Tags for a foundation module: applicable everywhere, differentiated by goals
fn foundation_tags(goals: &[&str]) -> ModuleTags {
    tags(
        &["all"],
        &["all"],
        &["all"],
        &["all"],
        &["all"],
        goals,
        &["all"],
    )
}

fn module(
    id: &str,
    duration_min: u32,
    xp: u64,
    tags: ModuleTags,
    title: Localized<String>,
    summary: Localized<String>,
    sections: Localized<Vec<String>>,
) -> Module {
    Module {
        id: id.to_string(),
        duration_min,
        xp,
        tags,
        title,
        summary,
        sections,
    }
}

pub(super) fn build_catalog() -> Vec<Module> {
    vec![
        module(
            "foundation-ai-map",
            12,
            60,
            foundation_tags(&["start", "productivity"]),
            loc("Карта AI-инструментов", "The AI tool map"),
            loc(
                "Какие бывают AI и какой выбрать под задачу.",
                "What kinds of AI exist and which one fits your task.",
            ),
            sections(
                &[
                    "AI - это инструмент, который ускоряет работу, когда задача сформулирована понятно.",
                    "Текстовый AI подходит для писем и анализа, графический - для картинок, видео AI - для роликов, голосовой - для озвучки.",
                    "Выбор инструмента начинается с цели, формата результата и ограничений.",
                ],
                &[
                    "AI is a tool that speeds up work when the task is stated clearly.",
                    "Text AI covers writing and analysis, image AI covers visuals, video AI covers clips, voice AI covers speech.",
                    "Tool choice starts with the goal, the output format, and the constraints.",
                ],
            ),
        ),
        module(
            "foundation-account-setup",
            15,
            60,
            foundation_tags(&["start"]),
            loc("Старт и настройка аккаунтов", "Accounts and safe setup"),
            loc(
                "Регистрация, безопасность и первый рабочий запрос.",
                "Signup, security basics, and your first working prompt.",
            ),
            sections(
                &[
                    "Начинай с одного текстового и одного визуального сервиса под реальные задачи.",
                    "Сразу после регистрации включай сложный пароль и двухфакторную авторизацию.",
                    "Первый запрос проверяй на пользу, конкретику и явные ошибки.",
                ],
                &[
                    "Start with one text service and one visual service for real tasks.",
                    "Right after signup enable a strong password and two-factor authentication.",
                    "Check your first output for usefulness, specificity, and obvious errors.",
                ],
            ),
        ),
        module(
            "foundation-prompt-blueprint",
            14,
            70,
            foundation_tags(&["productivity", "quality"]),
            loc("Структура сильного запроса", "The prompt blueprint"),
            loc(
                "Цель, формат и ограничения в каждом запросе.",
                "Goal, format, and constraints in every prompt.",
            ),
            sections(
                &[
                    "Сильный запрос всегда называет цель, формат результата и ограничения.",
                    "Роль и контекст задают модели угол зрения: для кого результат и в какой ситуации.",
                    "Если данных не хватает, проси модель сначала задать уточняющие вопросы.",
                ],
                &[
                    "A strong prompt always states the goal, the output format, and the constraints.",
                    "Role and context give the model a point of view: who the result is for and in what situation.",
                    "When context is missing, ask the model to raise clarifying questions first.",
                ],
            ),
        ),
        module(
            "foundation-prompt-iteration",
            14,
            70,
            foundation_tags(&["quality", "productivity"]),
            loc("Итерации и доработка ответа", "Iterating on model output"),
            loc(
                "Как дожимать ответ до рабочего качества.",
                "How to push a draft to working quality.",
            ),
            sections(
                &[
                    "Первый ответ модели - черновик; качество появляется на второй и третьей итерации.",
                    "Уточняй по одному параметру за раз: тон, структуру, длину или примеры.",
                    "Сохраняй удачные формулировки запросов как шаблоны для повторных задач.",
                ],
                &[
                    "The first model answer is a draft; quality shows up on the second and third iteration.",
                    "Refine one parameter at a time: tone, structure, length, or examples.",
                    "Save prompts that worked as templates for recurring tasks.",
                ],
            ),
        ),
        module(
            "foundation-data-safety",
            10,
            60,
            foundation_tags(&["start", "quality"]),
            loc("Безопасность данных", "Data safety"),
            loc(
                "Что нельзя отправлять в AI и как работать с чувствительным.",
                "What never goes into a prompt and how to handle sensitive data.",
            ),
            sections(
                &[
                    "Персональные данные, пароли и коммерческую тайну в запросы не вставляют.",
                    "Чувствительные фрагменты заменяй на обезличенные плейсхолдеры перед отправкой.",
                    "Для рабочих данных проверяй политику сервиса: хранение, обучение на данных, регион.",
                ],
                &[
                    "Personal data, passwords, and trade secrets never go into prompts.",
                    "Replace sensitive fragments with anonymized placeholders before sending.",
                    "For work data check the service policy: retention, training on your data, region.",
                ],
            ),
        ),
        module(
            "foundation-image-prompting",
            12,
            65,
            foundation_tags(&["creativity", "productivity"]),
            loc("Промпты для изображений", "Prompting for images"),
            loc(
                "Как описывать картинку, чтобы получить нужную.",
                "How to describe a picture so you get the one you need.",
            ),
            sections(
                &[
                    "Описывай объект, стиль, свет и композицию отдельными фразами.",
                    "Референсы и примеры стиля работают лучше длинных прилагательных.",
                    "Негативные указания убирают типовые дефекты: лишние пальцы, искаженный текст.",
                ],
                &[
                    "Describe subject, style, light, and composition as separate phrases.",
                    "References and style examples beat long chains of adjectives.",
                    "Negative instructions remove typical defects: extra fingers, broken text.",
                ],
            ),
        ),
        module(
            "foundation-video-prompting",
            12,
            65,
            foundation_tags(&["creativity"]),
            loc("Промпты для видео", "Prompting for video"),
            loc(
                "Сцены, движение камеры и ритм в видео-запросах.",
                "Scenes, camera movement, and pacing in video prompts.",
            ),
            sections(
                &[
                    "Видео-запрос описывает сцену, действие и движение камеры по секундам.",
                    "Короткие сцены по 5-8 секунд склеиваются в ролик надежнее одной длинной.",
                    "Единый стиль между сценами задается повторением ключевых описаний.",
                ],
                &[
                    "A video prompt describes the scene, the action, and the camera movement second by second.",
                    "Short 5-8 second scenes cut together more reliably than one long take.",
                    "A consistent style across scenes comes from repeating the key descriptors.",
                ],
            ),
        ),
        module(
            "foundation-code-with-ai",
            16,
            75,
            foundation_tags(&["productivity", "automation"]),
            loc("Код вместе с AI", "Coding with AI"),
            loc(
                "Скрипты и автоматизация без глубоких знаний программирования.",
                "Scripts and automation without deep programming knowledge.",
            ),
            sections(
                &[
                    "Проси код с комментариями и инструкцией по запуску, а не просто сниппет.",
                    "Ошибки вставляй в чат целиком: модель чинит по тексту трейсбека.",
                    "Начинай с маленьких скриптов для рутины: переименование файлов, сводные таблицы.",
                ],
                &[
                    "Ask for code with comments and run instructions, not just a snippet.",
                    "Paste errors into the chat verbatim: the model fixes from the traceback text.",
                    "Start with small scripts for routine work: renaming files, summary tables.",
                ],
            ),
        ),
        module(
            "core-fact-check",
            10,
            70,
            foundation_tags(&["quality"]),
            loc("Факт-чекинг ответов", "Fact-checking AI output"),
            loc(
                "Протокол проверки цифр и утверждений перед использованием.",
                "A protocol for verifying numbers and claims before use.",
            ),
            sections(
                &[
                    "Любая цифра, дата или цитата из AI проверяется по первоисточнику.",
                    "Проси модель указывать источники и помечать места, где она не уверена.",
                    "Рабочий результат уходит дальше только после чеклиста проверки.",
                ],
                &[
                    "Every number, date, or quote from AI gets verified against a primary source.",
                    "Ask the model to cite sources and flag the places where it is unsure.",
                    "Work output ships only after the verification checklist.",
                ],
            ),
        ),
        module(
            "business-payments-russia",
            12,
            55,
            tags(
                &["all"],
                &["manager", "founder", "all"],
                &["all"],
                &["all"],
                &["company"],
                &["team", "start"],
                &["all"],
            ),
            loc("Оплата AI-сервисов для команды", "Paying for AI services as a team"),
            loc(
                "Доступы, бюджеты и контроль расходов на AI в компании.",
                "Access, budgets, and spend control for company AI use.",
            ),
            sections(
                &[
                    "Корпоративные доступы оформляются на рабочие аккаунты с назначенным владельцем.",
                    "Лимиты расходов и список оплаченных сервисов фиксируются в одном документе.",
                    "Продление и отмена подписок проверяются ежемесячно, чтобы не платить за неиспользуемое.",
                ],
                &[
                    "Company access is registered on work accounts with a named owner.",
                    "Spend limits and the list of paid services live in a single document.",
                    "Renewals and cancellations are reviewed monthly so unused seats stop billing.",
                ],
            ),
        ),
        module(
            "core-ai-literacy",
            10,
            50,
            foundation_tags(&["start"]),
            loc("AI-грамотность", "AI literacy"),
            loc(
                "Как модели работают и где проходят их границы.",
                "How models work and where their limits are.",
            ),
            sections(
                &[
                    "Модель предсказывает текст, а не знает факты: уверенный тон не равен правде.",
                    "Галлюцинации - нормальное свойство, поэтому проверка встроена в процесс.",
                    "Свежие события модель может не знать: уточняй дату среза знаний.",
                ],
                &[
                    "A model predicts text rather than knowing facts: a confident tone is not truth.",
                    "Hallucinations are a normal property, so verification is built into the process.",
                    "Recent events may be missing: check the knowledge cutoff date.",
                ],
            ),
        ),
        module(
            "core-prompt-framework",
            12,
            90,
            foundation_tags(&["productivity", "quality"]),
            loc("Рабочий фреймворк промптов", "A working prompt framework"),
            loc(
                "Единый шаблон запроса под повторяющиеся задачи.",
                "One reusable request template for recurring tasks.",
            ),
            sections(
                &[
                    "Фреймворк: роль, цель, контекст, формат, ограничения, критерии качества.",
                    "Шаблоны под типовые задачи сокращают время запроса с минут до секунд.",
                    "Критерии качества в запросе позволяют просить модель проверить саму себя.",
                ],
                &[
                    "The framework: role, goal, context, format, constraints, quality criteria.",
                    "Templates for routine tasks cut prompting time from minutes to seconds.",
                    "Quality criteria inside the prompt let you ask the model to self-check.",
                ],
            ),
        ),
        module(
            "modality-image-gen",
            14,
            80,
            tags(
                &["all"],
                &["all"],
                &["all"],
                &["all"],
                &["all"],
                &["creativity", "productivity"],
                &["all"],
            ),
            loc("Генерация изображений в работе", "Image generation at work"),
            loc(
                "Обложки, иллюстрации и визуалы под рабочие задачи.",
                "Covers, illustrations, and visuals for real work.",
            ),
            sections(
                &[
                    "Рабочий визуал начинается с назначения: где и зачем он будет использоваться.",
                    "Серия из 4-6 вариантов с одним запросом дает материал для выбора.",
                    "Финальную картинку доводи точечными правками, а не новым запросом с нуля.",
                ],
                &[
                    "A work visual starts from its purpose: where and why it will be used.",
                    "A batch of 4-6 variants from one prompt gives you material to choose from.",
                    "Polish the final image with targeted edits rather than a fresh prompt.",
                ],
            ),
        ),
        module(
            "modality-video-gen",
            16,
            85,
            tags(
                &["all"],
                &["all"],
                &["intermediate", "advanced", "all"],
                &["all"],
                &["all"],
                &["creativity"],
                &["all"],
            ),
            loc("Генерация видео в работе", "Video generation at work"),
            loc(
                "Короткие ролики для презентаций и соцсетей.",
                "Short clips for presentations and social posts.",
            ),
            sections(
                &[
                    "Ролик собирается из сценария: список сцен с длительностью и текстом.",
                    "Озвучка и субтитры делаются отдельными инструментами после картинки.",
                    "Для соцсетей работает вертикальный формат и первые три секунды с крючком.",
                ],
                &[
                    "A clip is assembled from a script: a list of scenes with duration and text.",
                    "Voiceover and subtitles come from separate tools after the visuals.",
                    "For social feeds use vertical format and a hook in the first three seconds.",
                ],
            ),
        ),
        module(
            "role-marketing-content",
            14,
            95,
            tags(
                &["marketing"],
                &["marketer", "smm"],
                &["all"],
                &["all"],
                &["all"],
                &["productivity", "creativity"],
                &["all"],
            ),
            loc("AI для маркетингового контента", "AI for marketing content"),
            loc(
                "Посты, лендинги и рассылки с AI-конвейером.",
                "Posts, landing pages, and emails on an AI pipeline.",
            ),
            sections(
                &[
                    "Контент-конвейер: идея, черновик от AI, редактура человеком, проверка фактов.",
                    "Тон бренда фиксируется примерами в запросе, а не описанием прилагательными.",
                    "A/B-варианты заголовков модель выдает пачкой за один запрос.",
                ],
                &[
                    "The content pipeline: idea, AI draft, human edit, fact check.",
                    "Brand tone is pinned with examples in the prompt, not with adjectives.",
                    "The model produces A/B headline variants in one batch request.",
                ],
            ),
        ),
        module(
            "role-sales-outreach",
            13,
            90,
            tags(
                &["sales"],
                &["manager", "sales"],
                &["all"],
                &["all"],
                &["all"],
                &["income", "productivity"],
                &["all"],
            ),
            loc("AI для продаж и переписки", "AI for sales outreach"),
            loc(
                "Персонализированные письма и ответы на возражения.",
                "Personalized outreach and objection handling.",
            ),
            sections(
                &[
                    "Персонализация письма строится на трех фактах о клиенте из открытых источников.",
                    "Банк возражений с ответами собирается один раз и дополняется после каждой сделки.",
                    "Короткое письмо с одним целевым действием работает лучше длинной презентации.",
                ],
                &[
                    "Personalization builds on three client facts from open sources.",
                    "An objection bank with answers is built once and grows after every deal.",
                    "A short email with one call to action beats a long pitch.",
                ],
            ),
        ),
        module(
            "role-education-lessons",
            14,
            85,
            tags(
                &["education"],
                &["teacher"],
                &["all"],
                &["all"],
                &["all"],
                &["quality", "productivity"],
                &["all"],
            ),
            loc("AI для планов уроков", "AI for lesson planning"),
            loc(
                "Планы занятий, задания и проверка работ с AI.",
                "Class plans, assignments, and grading support with AI.",
            ),
            sections(
                &[
                    "План урока запрашивается с возрастом учеников, длительностью и целью занятия.",
                    "Задания разных уровней сложности модель строит из одного базового упражнения.",
                    "Проверка работ с AI остается черновой: итоговая оценка за преподавателем.",
                ],
                &[
                    "Request a lesson plan with student age, duration, and the class goal.",
                    "The model builds multi-level assignments from one base exercise.",
                    "AI-assisted grading stays a draft: the final mark belongs to the teacher.",
                ],
            ),
        ),
        module(
            "role-hr-screening",
            12,
            80,
            tags(
                &["hr"],
                &["hr", "recruiter"],
                &["all"],
                &["all"],
                &["all"],
                &["productivity"],
                &["all"],
            ),
            loc("AI для найма", "AI for hiring"),
            loc(
                "Описания вакансий и структурированный скрининг.",
                "Job descriptions and structured screening.",
            ),
            sections(
                &[
                    "Описание вакансии собирается из задач роли, а не из списка требований.",
                    "Скрининговые вопросы модель строит по ключевым навыкам из описания.",
                    "Решение по кандидату принимает человек: AI готовит материалы, не вердикт.",
                ],
                &[
                    "A job description is built from the role's tasks, not a list of requirements.",
                    "The model derives screening questions from the key skills in the description.",
                    "A human makes the hiring decision: AI prepares materials, not the verdict.",
                ],
            ),
        ),
        module(
            "industry-finance-analytics",
            15,
            100,
            tags(
                &["finance"],
                &["analyst", "manager"],
                &["intermediate", "advanced"],
                &["all"],
                &["all"],
                &["quality"],
                &["all"],
            ),
            loc("AI для финансовой аналитики", "AI for finance analytics"),
            loc(
                "Сводки, отчеты и проверка расчетов.",
                "Summaries, reports, and calculation checks.",
            ),
            sections(
                &[
                    "Таблицы передаются модели с описанием колонок и единиц измерения.",
                    "Каждый расчет AI дублируется формулой, которую можно проверить вручную.",
                    "Выводы отчета сверяются с исходными данными до отправки руководству.",
                ],
                &[
                    "Hand tables to the model with column descriptions and units.",
                    "Every AI calculation is mirrored by a formula you can verify by hand.",
                    "Report conclusions are reconciled with the raw data before they go upstream.",
                ],
            ),
        ),
        module(
            "automation-daily-workflows",
            16,
            110,
            tags(
                &["all"],
                &["all"],
                &["intermediate", "advanced"],
                &["all"],
                &["all"],
                &["automation", "productivity"],
                &["all"],
            ),
            loc("Автоматизация рутины", "Automating daily workflows"),
            loc(
                "Связки инструментов и сценарии без ручных шагов.",
                "Tool chains and scenarios without manual steps.",
            ),
            sections(
                &[
                    "Кандидат на автоматизацию - задача, повторяющаяся чаще раза в неделю.",
                    "Сценарий описывается по шагам: триггер, действия, результат, проверка.",
                    "Автоматизация запускается на копии данных, пока не пройдет неделю без ошибок.",
                ],
                &[
                    "An automation candidate is any task repeated more than once a week.",
                    "Describe the scenario step by step: trigger, actions, result, check.",
                    "Run the automation on a data copy until it survives a week without errors.",
                ],
            ),
        ),
        module(
            "team-ai-rollout",
            18,
            105,
            tags(
                &["all"],
                &["manager", "founder"],
                &["all"],
                &["all"],
                &["company"],
                &["team"],
                &["all"],
            ),
            loc("Внедрение AI в команде", "Rolling out AI to a team"),
            loc(
                "Стандарты, обучение и метрики внедрения.",
                "Standards, training, and rollout metrics.",
            ),
            sections(
                &[
                    "Внедрение начинается с двух-трех пилотных сценариев, а не со всей компании.",
                    "Единый стандарт использования фиксирует, что можно отправлять в AI, а что нет.",
                    "Метрика внедрения - сэкономленные часы на сценарий, а не количество аккаунтов.",
                ],
                &[
                    "A rollout starts with two or three pilot scenarios, not the whole company.",
                    "A shared usage standard states what may and may not go into AI tools.",
                    "The rollout metric is hours saved per scenario, not the number of seats.",
                ],
            ),
        ),
        module(
            "quality-control-loop",
            11,
            75,
            tags(
                &["all"],
                &["all"],
                &["all"],
                &["all"],
                &["all"],
                &["quality"],
                &["all"],
            ),
            loc("Контур контроля качества", "The quality control loop"),
            loc(
                "Чеклисты и самопроверка модели перед сдачей результата.",
                "Checklists and model self-review before you ship.",
            ),
            sections(
                &[
                    "Чеклист качества пишется до запроса: что именно считается готовым результатом.",
                    "Вторым запросом модель проверяет собственный ответ по твоему чеклисту.",
                    "Ошибки, найденные на проверке, добавляются в чеклист следующих задач.",
                ],
                &[
                    "Write the quality checklist before the prompt: what counts as done.",
                    "In a second request the model reviews its own answer against your checklist.",
                    "Errors caught in review are added to the checklist for future tasks.",
                ],
            ),
        ),
        module(
            "certification-capstone",
            25,
            120,
            // Deliberately untagged: the capstone never competes in ranking,
            // the path builder guarantees its presence explicitly.
            ModuleTags::default(),
            loc("Финальный проект", "Certification capstone"),
            loc(
                "Сквозной проект: от запроса до проверенного результата.",
                "An end-to-end project: from prompt to verified result.",
            ),
            sections(
                &[
                    "Финальный проект собирает весь маршрут: выбор инструмента, запрос, итерации, проверка.",
                    "Результат оформляется как рабочий артефакт, который можно показать коллегам.",
                    "Защита проекта - скриншоты процесса и короткий разбор принятых решений.",
                ],
                &[
                    "The capstone ties the whole path together: tool choice, prompt, iterations, verification.",
                    "The result is packaged as a work artifact you can show to colleagues.",
                    "The defense is process screenshots plus a short walkthrough of your decisions.",
                ],
            ),
        ),
    ]
}

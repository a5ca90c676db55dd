//! End-to-end curriculum building scenarios

use academy::catalog::all_modules;
use academy::path::{
    build_adaptive_path, default_max_modules, summarize_path, CAPSTONE_MODULE_ID,
    COMPANY_CORE_IDS, UNIVERSAL_CORE_IDS,
};
use academy::types::{LearnerProfile, LearnerType};

fn individual_profile() -> LearnerProfile {
    LearnerProfile {
        goals: vec!["productivity".to_string(), "quality".to_string()],
        ..LearnerProfile::default()
    }
}

#[test]
fn individual_path_fills_to_its_default_length() {
    let profile = individual_profile();
    let max = default_max_modules(&profile);
    assert_eq!(max, 14);

    let path = build_adaptive_path(&profile, all_modules(), max);
    assert_eq!(path.len(), 14);

    // Base set first, in fixed order
    for (index, id) in UNIVERSAL_CORE_IDS.iter().enumerate() {
        assert_eq!(path[index].module.id, *id);
    }
    // Capstone closes the path
    assert_eq!(path.last().unwrap().module.id, CAPSTONE_MODULE_ID);
}

#[test]
fn company_path_is_longer_and_carries_company_modules() {
    let profile = LearnerProfile {
        learner_type: LearnerType::Company,
        goals: vec!["team".to_string()],
        company_size: Some(40),
        ..LearnerProfile::default()
    };
    let max = default_max_modules(&profile);
    assert_eq!(max, 16);

    let path = build_adaptive_path(&profile, all_modules(), max);
    for (index, id) in COMPANY_CORE_IDS.iter().enumerate() {
        assert_eq!(path[index].module.id, *id);
    }
    assert!(path
        .iter()
        .any(|entry| entry.module.id == "business-payments-russia"));
    assert!(path.iter().any(|entry| entry.module.id == "team-ai-rollout"));
    assert_eq!(path.last().unwrap().module.id, CAPSTONE_MODULE_ID);
}

#[test]
fn same_inputs_build_identical_paths() {
    let profile = individual_profile();
    let first = build_adaptive_path(&profile, all_modules(), 14);
    let second = build_adaptive_path(&profile, all_modules(), 14);

    let first_ids: Vec<_> = first.iter().map(|entry| &entry.module.id).collect();
    let second_ids: Vec<_> = second.iter().map(|entry| &entry.module.id).collect();
    assert_eq!(first_ids, second_ids);
}

#[test]
fn day_buckets_group_three_modules_and_cap_at_six() {
    let profile = individual_profile();
    let path = build_adaptive_path(&profile, all_modules(), 14);

    assert_eq!(path[0].day, 1);
    assert_eq!(path[2].day, 1);
    assert_eq!(path[3].day, 2);
    for entry in &path {
        assert!(entry.day >= 1 && entry.day <= 6);
        assert_eq!(entry.day, 6u32.min((entry.order - 1) / 3 + 1));
    }
}

#[test]
fn different_profiles_rank_different_electives() {
    let marketer = LearnerProfile {
        industry: "marketing".to_string(),
        role: "marketer".to_string(),
        ..LearnerProfile::default()
    };
    let educator = LearnerProfile {
        industry: "education".to_string(),
        role: "teacher".to_string(),
        ..LearnerProfile::default()
    };

    let marketer_path = build_adaptive_path(&marketer, all_modules(), 14);
    let educator_path = build_adaptive_path(&educator, all_modules(), 14);

    assert!(marketer_path
        .iter()
        .any(|entry| entry.module.id == "role-marketing-content"));
    assert!(educator_path
        .iter()
        .any(|entry| entry.module.id == "role-education-lessons"));

    let pos = |path: &[academy::CurriculumEntry], id: &str| {
        path.iter().position(|entry| entry.module.id == id)
    };
    // Each profile ranks its own role module ahead of the other's, when present
    if let (Some(m), Some(e)) = (
        pos(&marketer_path, "role-marketing-content"),
        pos(&marketer_path, "role-education-lessons"),
    ) {
        assert!(m < e);
    }
    if let (Some(e), Some(m)) = (
        pos(&educator_path, "role-education-lessons"),
        pos(&educator_path, "role-marketing-content"),
    ) {
        assert!(e < m);
    }
}

#[test]
fn summary_matches_the_selected_modules() {
    let profile = individual_profile();
    let path = build_adaptive_path(&profile, all_modules(), 14);
    let summary = summarize_path(&path);

    let duration: u32 = path.iter().map(|entry| entry.module.duration_min).sum();
    let xp: u64 = path.iter().map(|entry| entry.module.xp).sum();
    assert_eq!(summary.total_duration_min, duration);
    assert_eq!(summary.total_xp, xp);
}

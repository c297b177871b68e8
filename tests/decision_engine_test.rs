// ABOUTME: Integration tests for the progression decision cascade
// ABOUTME: Covers every rule, rule precedence, idempotence, and the advisory notes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod common;

use ironlog::intelligence::config::ClusterConfigs;
use ironlog::intelligence::{
    CoachingConfig, DecisionEngine, DecisionInput, DecisionRule, MesoPhase, PatternCategory,
    ProgressionConfig, Rulebook, WorkingSetClassifier,
};
use ironlog::models::{
    ExercisePlan, ProgressionAction, ProgressionDecision, SessionReadiness, SetRecord,
};

fn press() -> ProgressionConfig {
    Rulebook::new(ClusterConfigs::default()).progression_config(PatternCategory::Press, false)
}

fn spine_sensitive_hinge() -> ProgressionConfig {
    Rulebook::new(ClusterConfigs::default()).progression_config(PatternCategory::Hinge, true)
}

fn engine() -> DecisionEngine {
    DecisionEngine::from_config(&CoachingConfig::default())
}

fn sets(rows: &[(f64, u32, f64)]) -> Vec<SetRecord> {
    rows.iter()
        .map(|&(load, reps, rir)| SetRecord::new(load, reps).with_rir(rir))
        .collect()
}

fn plan(target_reps: u32, target_sets: u32) -> ExercisePlan {
    common::plan(target_reps, target_sets)
}

fn decide_with(
    records: &[SetRecord],
    plan: &ExercisePlan,
    config: &ProgressionConfig,
    phase: MesoPhase,
    readiness: Option<&SessionReadiness>,
) -> (DecisionRule, ProgressionDecision) {
    let classification = WorkingSetClassifier::classify(records);
    let input =
        DecisionInput::from_plan(&classification, config, phase, plan).with_readiness(readiness);
    engine().evaluate_traced(&input)
}

fn decide(
    records: &[SetRecord],
    plan: &ExercisePlan,
    phase: MesoPhase,
) -> (DecisionRule, ProgressionDecision) {
    decide_with(records, plan, &press(), phase, None)
}

fn has_note(decision: &ProgressionDecision, needle: &str) -> bool {
    decision.notes.iter().any(|note| note.contains(needle))
}

#[test]
fn no_growth_sets_reports_no_data() {
    common::init_test_logging();
    let (rule, decision) = decide(&[], &plan(8, 3), MesoPhase::Early);

    assert_eq!(rule, DecisionRule::NoData);
    assert_eq!(decision.action, ProgressionAction::HoldLoad);
    assert_eq!(decision.next_load, 0.0);
    assert_eq!(decision.next_sets, 3);
    assert!(has_note(&decision, "No prior data"));
    assert!(has_note(&decision, "6-10 reps"));
}

#[test]
fn rebaseline_fires_before_rir_rules() {
    // Opened at 126, finished at 106: ~15.9% drop, heaviest first, lightest last
    for rir in [0.0, 2.0, 5.0] {
        let records = sets(&[(126.0, 8, rir), (106.0, 8, rir)]);
        let (rule, decision) = decide(&records, &plan(8, 3), MesoPhase::Early);

        assert_eq!(rule, DecisionRule::Rebaseline, "rir {rir}");
        assert_eq!(decision.action, ProgressionAction::ReduceLoad);
        assert_eq!(decision.next_load, 106.0);
        assert!(has_note(&decision, "re-baselining at 106.0"));
    }
}

#[test]
fn rebaseline_ignores_missing_rir() {
    let records = vec![SetRecord::new(126.0, 8), SetRecord::new(106.0, 8)];
    let (rule, decision) = decide(&records, &plan(8, 3), MesoPhase::Early);

    assert_eq!(rule, DecisionRule::Rebaseline);
    assert_eq!(decision.next_load, 106.0);
}

#[test]
fn rebaseline_needs_heaviest_first_and_lightest_last() {
    // Lightest set in the middle: not an in-session downshift
    let records = sets(&[(126.0, 8, 2.0), (100.0, 8, 2.0), (110.0, 8, 2.0)]);
    let (rule, _) = decide(&records, &plan(8, 3), MesoPhase::Early);
    assert_ne!(rule, DecisionRule::Rebaseline);

    // Small drop below the threshold
    let records = sets(&[(100.0, 8, 2.0), (95.0, 8, 2.0)]);
    let (rule, _) = decide(&records, &plan(8, 3), MesoPhase::Early);
    assert_ne!(rule, DecisionRule::Rebaseline);
}

#[test]
fn clean_top_of_range_increases_by_load_step() {
    let records = sets(&[(185.0, 8, 2.0), (185.0, 8, 2.0), (185.0, 8, 2.0)]);
    let (rule, decision) = decide(&records, &plan(8, 3), MesoPhase::Early);

    assert_eq!(rule, DecisionRule::CleanTopOfRange);
    assert_eq!(decision.action, ProgressionAction::IncreaseLoad);
    assert_eq!(decision.next_load, 187.5);
    assert_eq!(decision.next_sets, 3);
}

#[test]
fn clean_top_of_range_uses_planned_per_set_reps() {
    let mut planned = plan(8, 3);
    planned.planned_reps_by_set = vec![10, 9, 8];
    planned.planned_loads_by_set = vec![100.0; 3];

    // Top planned reps is 10, so 8s are not a clean top-of-range day
    let records = sets(&[(100.0, 8, 2.0), (100.0, 8, 2.0), (100.0, 8, 2.0)]);
    let (rule, _) = decide(&records, &planned, MesoPhase::Early);
    assert_ne!(rule, DecisionRule::CleanTopOfRange);

    let records = sets(&[(100.0, 10, 2.0), (100.0, 10, 2.0), (100.0, 10, 2.0)]);
    let (rule, decision) = decide(&records, &planned, MesoPhase::Early);
    assert_eq!(rule, DecisionRule::CleanTopOfRange);
    assert_eq!(decision.next_load, 102.5);
}

#[test]
fn clean_day_with_spare_reserve_adds_a_set() {
    // Growth sets on target; diagnostic sets far from failure lift the overall average
    let records = sets(&[
        (150.0, 8, 2.0),
        (150.0, 8, 2.0),
        (150.0, 8, 2.0),
        (150.0, 8, 5.0),
        (150.0, 8, 5.0),
    ]);
    let (rule, decision) = decide(&records, &plan(8, 3), MesoPhase::Early);

    assert_eq!(rule, DecisionRule::CleanTopOfRange);
    assert_eq!(decision.next_load, 152.5);
    assert_eq!(decision.next_sets, 4);
    assert!(has_note(&decision, "add one set"));
    assert!(has_note(&decision, "well tolerated"));
}

#[test]
fn set_increase_respects_max_sets() {
    let records = sets(&[
        (150.0, 8, 2.0),
        (150.0, 8, 2.0),
        (150.0, 8, 2.0),
        (150.0, 8, 5.0),
        (150.0, 8, 5.0),
    ]);
    let (_, decision) = decide(&records, &plan(8, 5), MesoPhase::Early);
    assert_eq!(decision.next_sets, 5);
}

#[test]
fn failure_with_rep_crash_holds_load() {
    let records = sets(&[(100.0, 10, 0.0), (100.0, 10, 0.0), (100.0, 5, 0.0)]);
    let (rule, decision) = decide(&records, &plan(8, 3), MesoPhase::Early);

    assert_eq!(rule, DecisionRule::FailureCrash);
    assert_eq!(decision.action, ProgressionAction::HoldLoad);
    assert_eq!(decision.next_load, 100.0);
}

#[test]
fn under_target_reps_hold_load() {
    let records = sets(&[(100.0, 6, 2.0), (100.0, 6, 2.0), (100.0, 5, 2.0)]);
    let (rule, decision) = decide(&records, &plan(8, 3), MesoPhase::Early);

    assert_eq!(rule, DecisionRule::UnderTarget);
    assert_eq!(decision.action, ProgressionAction::HoldLoad);
    assert_eq!(decision.next_load, 100.0);
    assert!(has_note(&decision, "6 of 8"));
}

#[test]
fn low_rir_is_harder_than_planned() {
    let records = sets(&[(100.0, 8, 0.5), (100.0, 8, 0.5), (100.0, 8, 0.5)]);
    let (rule, decision) = decide(&records, &plan(8, 3), MesoPhase::Early);

    assert_eq!(rule, DecisionRule::HarderThanPlanned);
    assert_eq!(decision.action, ProgressionAction::HoldLoad);
}

#[test]
fn repeated_rest_pause_is_harder_than_planned() {
    let records = vec![
        SetRecord::new(100.0, 8).with_rir(2.0).with_rest_pause(),
        SetRecord::new(100.0, 8).with_rir(2.0).with_rest_pause(),
        SetRecord::new(100.0, 8).with_rir(2.0),
    ];
    let (rule, decision) = decide(&records, &plan(8, 3), MesoPhase::Early);

    assert_eq!(rule, DecisionRule::HarderThanPlanned);
    assert!(has_note(&decision, "rest-pause"));
}

#[test]
fn comfortable_overperformance_increases() {
    let records = sets(&[(80.0, 11, 3.0), (80.0, 10, 3.0), (80.0, 9, 3.0)]);
    let (rule, decision) = decide(&records, &plan(8, 3), MesoPhase::Early);

    assert_eq!(rule, DecisionRule::Overperformance);
    assert_eq!(decision.action, ProgressionAction::IncreaseLoad);
    assert_eq!(decision.next_load, 82.0);
}

#[test]
fn on_target_with_two_sets_repeats() {
    let records = sets(&[(100.0, 8, 2.0), (100.0, 8, 2.0)]);
    let (rule, decision) = decide(&records, &plan(8, 3), MesoPhase::Early);

    assert_eq!(rule, DecisionRule::OnTarget);
    assert_eq!(decision.action, ProgressionAction::HoldLoad);
    assert_eq!(decision.next_load, 100.0);
}

#[test]
fn leftover_cases_fall_to_catch_all() {
    let records = sets(&[(100.0, 8, 3.5), (100.0, 8, 3.5), (100.0, 8, 3.5)]);
    let (rule, decision) = decide(&records, &plan(8, 3), MesoPhase::Early);

    assert_eq!(rule, DecisionRule::CatchAll);
    assert_eq!(decision.action, ProgressionAction::HoldLoad);
    assert_eq!(decision.next_load, 100.0);
}

#[test]
fn missing_rir_is_conservative() {
    let records = vec![
        SetRecord::new(100.0, 8),
        SetRecord::new(100.0, 8),
        SetRecord::new(100.0, 8),
    ];
    let (rule, decision) = decide(&records, &plan(8, 3), MesoPhase::Early);

    assert_eq!(rule, DecisionRule::CatchAll);
    assert_eq!(decision.action, ProgressionAction::HoldLoad);
    assert!(has_note(&decision, "Log reps in reserve"));
}

#[test]
fn deload_phase_overrides_everything() {
    let records = sets(&[(100.0, 8, 2.0), (100.0, 8, 2.0), (100.0, 8, 2.0)]);
    let (rule, decision) = decide(&records, &plan(8, 4), MesoPhase::Deload);

    assert_eq!(rule, DecisionRule::Deload);
    assert_eq!(decision.action, ProgressionAction::Deload);
    assert_eq!(decision.next_load, 97.5);
    assert_eq!(decision.next_sets, 3);
}

#[test]
fn deload_keeps_minimum_sets_and_non_negative_load() {
    let records = sets(&[(1.0, 8, 2.0)]);
    let (_, decision) = decide(&records, &plan(8, 2), MesoPhase::Deload);

    assert_eq!(decision.next_load, 0.0);
    assert_eq!(decision.next_sets, 2);
}

#[test]
fn deload_caps_sets_at_the_maximum() {
    let records = sets(&[(100.0, 8, 2.0), (100.0, 8, 2.0), (100.0, 8, 2.0)]);
    let (rule, decision) = decide(&records, &plan(8, 1_000), MesoPhase::Deload);

    assert_eq!(rule, DecisionRule::Deload);
    assert_eq!(decision.next_sets, press().max_sets);
}

#[test]
fn extreme_planned_reps_do_not_overflow() {
    let mut planned = plan(8, 3);
    planned.planned_reps_by_set = vec![u32::MAX];
    let records = sets(&[(100.0, 8, 2.0)]);

    let (rule, decision) = decide(&records, &planned, MesoPhase::Early);

    assert_eq!(rule, DecisionRule::CatchAll);
    assert_eq!(decision.action, ProgressionAction::HoldLoad);
    assert_eq!(decision.next_load, 100.0);
}

#[test]
fn extreme_diagnostic_reps_do_not_overflow() {
    let records = sets(&[
        (100.0, 8, 2.0),
        (100.0, 8, 2.0),
        (100.0, 8, 2.0),
        (100.0, u32::MAX, 2.0),
        (100.0, 1, 2.0),
    ]);

    let (rule, decision) = decide(&records, &plan(8, 3), MesoPhase::Early);

    assert_eq!(rule, DecisionRule::CleanTopOfRange);
    assert!(!has_note(&decision, "Diagnostic"));
}

#[test]
fn stability_work_holds_when_controlled() {
    let records = sets(&[(60.0, 10, 3.0), (60.0, 10, 3.0), (60.0, 10, 3.0)]);
    let (rule, decision) = decide_with(
        &records,
        &plan(10, 3),
        &spine_sensitive_hinge(),
        MesoPhase::Early,
        None,
    );

    assert_eq!(rule, DecisionRule::LowBackStability);
    assert_eq!(decision.action, ProgressionAction::HoldLoad);
    assert_eq!(decision.next_load, 60.0);
}

#[test]
fn stability_work_reduces_when_struggling() {
    let config = spine_sensitive_hinge();

    let grinding = sets(&[(60.0, 10, 1.0), (60.0, 10, 1.0), (60.0, 10, 1.0)]);
    let (rule, decision) = decide_with(&grinding, &plan(10, 3), &config, MesoPhase::Early, None);
    assert_eq!(rule, DecisionRule::LowBackStability);
    assert_eq!(decision.action, ProgressionAction::ReduceLoad);
    assert_eq!(decision.next_load, 58.0);

    let short = sets(&[(60.0, 8, 3.0), (60.0, 8, 3.0), (60.0, 7, 3.0)]);
    let (_, decision) = decide_with(&short, &plan(10, 3), &config, MesoPhase::Early, None);
    assert_eq!(decision.action, ProgressionAction::ReduceLoad);
}

#[test]
fn stability_work_holds_when_decrease_is_disallowed() {
    let mut config = spine_sensitive_hinge();
    config.allow_load_decrease = false;

    let grinding = sets(&[(60.0, 10, 1.0), (60.0, 10, 1.0), (60.0, 10, 1.0)]);
    let (rule, decision) = decide_with(&grinding, &plan(10, 3), &config, MesoPhase::Early, None);
    assert_eq!(rule, DecisionRule::LowBackStability);
    assert_eq!(decision.action, ProgressionAction::HoldLoad);
    assert_eq!(decision.next_load, 60.0);
}

#[test]
fn stability_override_precedes_rebaseline() {
    let records = sets(&[(70.0, 10, 3.0), (60.0, 10, 3.0)]);
    let (rule, _) = decide_with(
        &records,
        &plan(10, 3),
        &spine_sensitive_hinge(),
        MesoPhase::Early,
        None,
    );
    assert_eq!(rule, DecisionRule::LowBackStability);
}

#[test]
fn phase_lowers_effective_rir() {
    // Mid: max(1.5, 2.0 - 0.3) = 1.7
    let records = sets(&[(100.0, 8, 1.7), (100.0, 8, 1.7), (100.0, 8, 1.7)]);
    let (rule, _) = decide(&records, &plan(8, 3), MesoPhase::Mid);
    assert_eq!(rule, DecisionRule::CleanTopOfRange);

    // Late: max(1.0, 2.0 - 1.0) = 1.0; 2.0 RIR is now too easy to count as on target
    let records = sets(&[(100.0, 8, 2.0), (100.0, 8, 2.0), (100.0, 8, 2.0)]);
    let (rule, _) = decide(&records, &plan(8, 3), MesoPhase::Late);
    assert_eq!(rule, DecisionRule::CatchAll);

    let records = sets(&[(100.0, 8, 1.0), (100.0, 8, 1.0), (100.0, 8, 1.0)]);
    let (rule, _) = decide(&records, &plan(8, 3), MesoPhase::Late);
    assert_eq!(rule, DecisionRule::CleanTopOfRange);
}

#[test]
fn planned_rir_replaces_cluster_base() {
    let mut planned = plan(8, 3);
    planned.target_rir = Some(3.0);

    let records = sets(&[(100.0, 8, 3.0), (100.0, 8, 3.0), (100.0, 8, 3.0)]);
    let (rule, _) = decide(&records, &planned, MesoPhase::Early);
    assert_eq!(rule, DecisionRule::CleanTopOfRange);
}

#[test]
fn weak_diagnostic_set_adds_note_without_veto() {
    let records = sets(&[
        (100.0, 8, 2.0),
        (100.0, 8, 2.0),
        (100.0, 8, 2.0),
        (100.0, 5, 2.0),
    ]);
    let (rule, decision) = decide(&records, &plan(8, 3), MesoPhase::Early);

    assert_eq!(rule, DecisionRule::CleanTopOfRange);
    assert_eq!(decision.action, ProgressionAction::IncreaseLoad);
    assert!(has_note(&decision, "occasional test only"));
}

#[test]
fn poor_readiness_annotates_increase_only() {
    let tired = SessionReadiness {
        sleep_hours: Some(5.0),
        soreness: Some(2),
        energy: Some(3),
    };
    let records = sets(&[(185.0, 8, 2.0), (185.0, 8, 2.0), (185.0, 8, 2.0)]);

    let (_, rested) = decide_with(&records, &plan(8, 3), &press(), MesoPhase::Early, None);
    let (_, advised) =
        decide_with(&records, &plan(8, 3), &press(), MesoPhase::Early, Some(&tired));

    assert_eq!(advised.action, rested.action);
    assert_eq!(advised.next_load, rested.next_load);
    assert_eq!(advised.next_sets, rested.next_sets);
    assert!(has_note(&advised, "Readiness was low today (5.0h sleep)"));
    assert!(!has_note(&rested, "Readiness"));

    let holding = sets(&[(100.0, 6, 2.0), (100.0, 6, 2.0), (100.0, 6, 2.0)]);
    let (_, hold) = decide_with(&holding, &plan(8, 3), &press(), MesoPhase::Early, Some(&tired));
    assert!(!has_note(&hold, "Readiness"));
}

#[test]
fn evaluation_is_idempotent() {
    let fixtures = [
        sets(&[(126.0, 8, 1.0), (106.0, 8, 1.0)]),
        sets(&[(185.0, 8, 2.0), (185.0, 8, 2.0), (185.0, 8, 2.0), (185.0, 6, 2.0)]),
        sets(&[(100.0, 10, 0.0), (100.0, 10, 0.0), (100.0, 5, 0.0)]),
        Vec::new(),
    ];
    for records in &fixtures {
        for phase in [MesoPhase::Early, MesoPhase::Mid, MesoPhase::Late, MesoPhase::Deload] {
            let first = decide(records, &plan(8, 3), phase);
            let second = decide(records, &plan(8, 3), phase);
            assert_eq!(first, second);
        }
    }
}

#[test]
fn evaluate_matches_traced_decision() {
    let records = sets(&[(185.0, 8, 2.0), (185.0, 8, 2.0), (185.0, 8, 2.0)]);
    let classification = WorkingSetClassifier::classify(&records);
    let config = press();
    let planned = plan(8, 3);
    let input = DecisionInput::from_plan(&classification, &config, MesoPhase::Early, &planned);

    let engine = engine();
    assert_eq!(engine.evaluate(&input), engine.evaluate_traced(&input).1);
}

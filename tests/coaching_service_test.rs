// ABOUTME: End-to-end tests for the save pipeline over the in-memory store
// ABOUTME: Verifies decisions, PR flags, carry-forward, write-back, and degraded store behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

mod common;

use common::{logged_item, plan, planned_item, pr, session, store_with, FlakyStore, Fault};
use ironlog::errors::ErrorCode;
use ironlog::intelligence::{CoachingConfig, DecisionRule, MesoPhase, PatternCategory};
use ironlog::models::{ProgressionAction, Session};
use ironlog::outcome::{PipelineStage, PropagationOutcome};
use ironlog::services::CoachingService;
use ironlog::store::{InMemoryStore, TrainingStore};
use std::sync::Arc;

const BENCH: &str = "barbell_bench_press";
const SQUAT: &str = "back_squat";
const ROW: &str = "barbell_row";

fn clean_bench_day() -> Session {
    session(
        0,
        1,
        vec![logged_item(
            BENCH,
            plan(8, 3),
            &[(185.0, 8, 2.0), (185.0, 8, 2.0), (185.0, 8, 2.0)],
        )],
    )
}

fn next_bench_day() -> Session {
    session(7, 2, vec![planned_item(BENCH, plan(0, 0))])
}

fn service_over(store: Arc<InMemoryStore>) -> CoachingService {
    CoachingService::new(store, &CoachingConfig::default())
}

#[test]
fn saving_a_clean_session_runs_the_whole_pipeline() {
    common::init_test_logging();
    let today = clean_bench_day();
    let next = next_bench_day();
    let store = Arc::new(store_with(&[today.clone(), next.clone()]));
    let service = service_over(store.clone());

    let outcome = service.save_logged_exercise(&today, BENCH).unwrap();

    assert_eq!(outcome.exercise_id, BENCH);
    assert_eq!(outcome.pattern, PatternCategory::Press);
    assert_eq!(outcome.phase, MesoPhase::Early);
    assert_eq!(outcome.rule, DecisionRule::CleanTopOfRange);
    assert_eq!(outcome.decision.action, ProgressionAction::IncreaseLoad);
    assert_eq!(outcome.decision.next_load, 187.5);
    assert!(outcome.is_personal_record);
    assert_eq!(outcome.personal_record.as_ref().unwrap().best_set_volume, 1480.0);
    assert_eq!(
        outcome.propagation,
        PropagationOutcome::Updated {
            session_id: next.id
        }
    );
    assert!(outcome.is_clean());

    // Durable state
    assert_eq!(store.commit_count(), 1);
    let stored_pr = store.fetch_pr(BENCH).unwrap().unwrap();
    assert_eq!(stored_pr.best_load, 185.0);
    assert_eq!(stored_pr.best_reps, 8);

    let stored_today = store.session(today.id).unwrap();
    let item = stored_today.item(BENCH).unwrap();
    assert!(item.is_personal_record);
    assert_eq!(item.decision.as_ref(), Some(&outcome.decision));
    assert_eq!(item.log.logged_sets_count(), 3);

    let stored_next = store.session(next.id).unwrap();
    let next_plan = &stored_next.item(BENCH).unwrap().plan;
    assert_eq!(next_plan.suggested_load, 187.5);
    assert_eq!(next_plan.target_sets, outcome.decision.next_sets);
}

#[test]
fn unknown_exercise_is_not_found() {
    let today = clean_bench_day();
    let store = Arc::new(store_with(&[today.clone()]));
    let service = service_over(store.clone());

    let err = service.save_logged_exercise(&today, SQUAT).unwrap_err();

    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert_eq!(store.commit_count(), 0);
}

#[test]
fn re_saving_the_same_session_is_idempotent() {
    let today = clean_bench_day();
    let next = next_bench_day();
    let store = Arc::new(store_with(&[today.clone(), next.clone()]));
    let service = service_over(store.clone());

    let first = service.save_logged_exercise(&today, BENCH).unwrap();
    let second = service.save_logged_exercise(&today, BENCH).unwrap();

    assert_eq!(first.decision, second.decision);
    assert_eq!(first.rule, second.rule);
    assert!(second.is_personal_record);
    assert_eq!(first.personal_record, second.personal_record);
    // The first save filled the future plan; the second leaves it alone
    assert_eq!(
        second.propagation,
        PropagationOutcome::PlanNotEmpty {
            session_id: next.id
        }
    );
    assert_eq!(
        store.session(next.id).unwrap().item(BENCH).unwrap().plan.suggested_load,
        187.5
    );
    assert_eq!(store.commit_count(), 2);
}

#[test]
fn weaker_session_does_not_replace_an_existing_record() {
    let today = clean_bench_day();
    let store = Arc::new(store_with(&[today.clone()]));
    store.upsert_pr(pr(BENCH, 200.0, 8, -7)).unwrap();
    let service = service_over(store.clone());

    let outcome = service.save_logged_exercise(&today, BENCH).unwrap();

    assert!(!outcome.is_personal_record);
    assert!(outcome.personal_record.is_none());
    assert_eq!(store.fetch_pr(BENCH).unwrap().unwrap().best_load, 200.0);
    assert!(!store.session(today.id).unwrap().item(BENCH).unwrap().is_personal_record);
}

#[test]
fn store_failures_become_warnings_and_keep_the_decision() {
    let today = clean_bench_day();
    let next = next_bench_day();

    let healthy = service_over(Arc::new(store_with(&[today.clone(), next.clone()])));
    let expected = healthy.save_logged_exercise(&today, BENCH).unwrap();

    let flaky = Arc::new(FlakyStore::new(store_with(&[today.clone(), next.clone()])));
    flaky.fail(Fault::UpsertPr);
    flaky.fail(Fault::Save);
    let service = CoachingService::new(flaky.clone(), &CoachingConfig::default());

    let outcome = service.save_logged_exercise(&today, BENCH).unwrap();

    assert_eq!(outcome.decision, expected.decision);
    assert_eq!(outcome.rule, expected.rule);
    assert!(outcome.is_personal_record);
    assert!(outcome.propagation.is_updated());

    let stages: Vec<PipelineStage> = outcome.warnings.iter().map(|w| w.stage).collect();
    assert_eq!(stages, vec![PipelineStage::PersonalRecord, PipelineStage::Save]);
    assert!(outcome.warnings.iter().all(|w| w.retryable));
    assert_eq!(flaky.inner.fetch_pr(BENCH).unwrap(), None);

    // Retrying once the store recovers completes the missing writes
    flaky.heal_all();
    let retried = service.save_logged_exercise(&today, BENCH).unwrap();
    assert!(retried.is_clean());
    assert_eq!(retried.decision, expected.decision);
    assert!(flaky.inner.fetch_pr(BENCH).unwrap().is_some());
}

#[test]
fn failed_item_writes_are_reported_per_stage() {
    let today = clean_bench_day();
    let next = next_bench_day();
    let flaky = Arc::new(FlakyStore::new(store_with(&[today.clone(), next.clone()])));
    flaky.fail(Fault::ModifyItem);
    let service = CoachingService::new(flaky.clone(), &CoachingConfig::default());

    let outcome = service.save_logged_exercise(&today, BENCH).unwrap();

    assert_eq!(outcome.decision.next_load, 187.5);
    assert_eq!(outcome.propagation, PropagationOutcome::Failed);
    let stages: Vec<PipelineStage> = outcome.warnings.iter().map(|w| w.stage).collect();
    assert_eq!(
        stages,
        vec![PipelineStage::Propagation, PipelineStage::ItemUpdate]
    );
    assert!(flaky.inner.session(next.id).unwrap().item(BENCH).unwrap().plan.is_empty());
}

#[test]
fn failed_record_lookup_still_evaluates() {
    let today = clean_bench_day();
    let flaky = Arc::new(FlakyStore::new(store_with(&[today.clone()])));
    flaky.inner.upsert_pr(pr(BENCH, 200.0, 8, -7)).unwrap();
    flaky.fail(Fault::FetchPr);
    let service = CoachingService::new(flaky.clone(), &CoachingConfig::default());

    let outcome = service.save_logged_exercise(&today, BENCH).unwrap();

    assert_eq!(outcome.rule, DecisionRule::CleanTopOfRange);
    assert_eq!(outcome.decision.next_load, 187.5);
    assert!(!outcome.is_personal_record);
    assert_eq!(outcome.propagation, PropagationOutcome::NoFutureOccurrence);
    let stages: Vec<PipelineStage> = outcome.warnings.iter().map(|w| w.stage).collect();
    assert_eq!(stages, vec![PipelineStage::PersonalRecord]);
    assert_eq!(flaky.inner.fetch_pr(BENCH).unwrap().unwrap().best_load, 200.0);
}

#[test]
fn evaluating_a_session_keeps_item_order_and_commits_once() {
    let today = session(
        0,
        1,
        vec![
            logged_item(
                BENCH,
                plan(8, 3),
                &[(185.0, 8, 2.0), (185.0, 8, 2.0), (185.0, 8, 2.0)],
            ),
            logged_item(
                SQUAT,
                plan(8, 3),
                &[(100.0, 6, 2.0), (100.0, 6, 2.0), (100.0, 5, 2.0)],
            ),
            planned_item(ROW, plan(10, 3)),
        ],
    );
    let next = session(
        7,
        2,
        vec![
            planned_item(BENCH, plan(0, 0)),
            planned_item(SQUAT, plan(0, 0)),
            planned_item(ROW, plan(0, 0)),
        ],
    );
    let store = Arc::new(store_with(&[today.clone(), next.clone()]));
    let service = service_over(store.clone());

    let report = service.evaluate_session(&today);

    assert_eq!(report.session_id, today.id);
    let ids: Vec<&str> = report
        .outcomes
        .iter()
        .map(|o| o.exercise_id.as_str())
        .collect();
    assert_eq!(ids, vec![BENCH, SQUAT, ROW]);

    let bench = &report.outcomes[0];
    assert_eq!(bench.decision.action, ProgressionAction::IncreaseLoad);

    let squat = &report.outcomes[1];
    assert_eq!(squat.pattern, PatternCategory::Squat);
    assert_eq!(squat.decision.action, ProgressionAction::HoldLoad);
    assert_eq!(squat.decision.next_load, 100.0);
    assert!(squat.propagation.is_updated());

    let row = &report.outcomes[2];
    assert_eq!(row.rule, DecisionRule::NoData);
    assert_eq!(row.decision.next_load, 0.0);
    assert_eq!(row.propagation, PropagationOutcome::NoLoad);
    assert!(!row.is_personal_record);

    assert_eq!(report.personal_record_count(), 2);
    assert_eq!(report.all_warnings().count(), 0);
    assert_eq!(store.commit_count(), 1);
}

#[test]
fn commit_failure_is_a_session_level_warning() {
    let today = clean_bench_day();
    let flaky = Arc::new(FlakyStore::new(store_with(&[today.clone()])));
    flaky.fail(Fault::Save);
    let service = CoachingService::new(flaky.clone(), &CoachingConfig::default());

    let report = service.evaluate_session(&today);

    assert!(report.outcomes.iter().all(|o| o.is_clean()));
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].stage, PipelineStage::Save);
    assert_eq!(report.warnings[0].code, ErrorCode::StorageError);
}

#[test]
fn session_report_serializes_with_tagged_propagation() {
    let today = clean_bench_day();
    let next = next_bench_day();
    let store = Arc::new(store_with(&[today.clone(), next]));
    let service = service_over(store);

    let report = service.evaluate_session(&today);
    let json = serde_json::to_value(&report).unwrap();

    let outcome = &json["outcomes"][0];
    assert_eq!(outcome["propagation"]["status"], "updated");
    assert_eq!(outcome["rule"], "clean_top_of_range");
    assert_eq!(outcome["decision"]["next_load"], 187.5);
}

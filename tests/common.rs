// ABOUTME: Shared test utilities for the Ironlog integration tests
// ABOUTME: Provides quiet logging, session builders, and a fault-injecting store wrapper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `ironlog`

use chrono::{DateTime, Duration, TimeZone, Utc};
use ironlog::errors::{StoreError, StoreResult};
use ironlog::models::{ExercisePlan, PrIndex, Session, SessionItem};
use ironlog::store::{InMemoryStore, ItemEdit, TrainingStore};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Once;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; tests stay quiet by default
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// A fixed morning `days` after the start of the test block
pub fn day(days: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 6, 7, 0, 0).unwrap() + Duration::days(days)
}

/// Plan with target reps and sets, nothing else filled in
pub fn plan(target_reps: u32, target_sets: u32) -> ExercisePlan {
    ExercisePlan {
        target_reps,
        target_sets,
        ..ExercisePlan::default()
    }
}

/// Plan with per-set loads, i.e. one a user or program already filled in
pub fn filled_plan(load: f64, reps: u32, sets: u32) -> ExercisePlan {
    ExercisePlan {
        target_reps: reps,
        target_sets: sets,
        target_rir: Some(2.0),
        suggested_load: load,
        planned_reps_by_set: vec![reps; sets as usize],
        planned_loads_by_set: vec![load; sets as usize],
    }
}

/// Item with a plan and `(load, reps, rir)` sets logged in order
pub fn logged_item(exercise_id: &str, plan: ExercisePlan, sets: &[(f64, u32, f64)]) -> SessionItem {
    let mut item = SessionItem::new(exercise_id);
    item.plan = plan;
    for &(load, reps, rir) in sets {
        item.log.push_set(load, reps, Some(rir), false);
    }
    item
}

/// Item with only a plan (a future occurrence)
pub fn planned_item(exercise_id: &str, plan: ExercisePlan) -> SessionItem {
    let mut item = SessionItem::new(exercise_id);
    item.plan = plan;
    item
}

/// Session on `days` with the given week number and items
pub fn session(days: i64, week_number: u32, items: Vec<SessionItem>) -> Session {
    let mut session = Session::new(day(days), week_number);
    session.items = items;
    session
}

/// Store seeded with sessions
pub fn store_with(sessions: &[Session]) -> InMemoryStore {
    let store = InMemoryStore::new();
    for session in sessions {
        store.insert_session(session.clone()).unwrap();
    }
    store
}

/// Stored personal record
pub fn pr(exercise_id: &str, load: f64, reps: u32, days: i64) -> PrIndex {
    PrIndex {
        exercise_id: exercise_id.to_owned(),
        best_set_volume: load * f64::from(reps),
        best_load: load,
        best_reps: reps,
        best_date: day(days),
    }
}

/// Store operations that can be made to fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    FetchSessions,
    FetchPr,
    UpsertPr,
    ModifyItem,
    Save,
}

/// Wraps an in-memory store and fails selected operations on demand
#[derive(Debug, Default)]
pub struct FlakyStore {
    pub inner: InMemoryStore,
    fetch_sessions: AtomicBool,
    fetch_pr: AtomicBool,
    upsert_pr: AtomicBool,
    modify_item: AtomicBool,
    save: AtomicBool,
}

impl FlakyStore {
    pub fn new(inner: InMemoryStore) -> Self {
        Self {
            inner,
            ..Self::default()
        }
    }

    fn flag(&self, fault: Fault) -> &AtomicBool {
        match fault {
            Fault::FetchSessions => &self.fetch_sessions,
            Fault::FetchPr => &self.fetch_pr,
            Fault::UpsertPr => &self.upsert_pr,
            Fault::ModifyItem => &self.modify_item,
            Fault::Save => &self.save,
        }
    }

    pub fn fail(&self, fault: Fault) {
        self.flag(fault).store(true, Ordering::SeqCst);
    }

    pub fn heal(&self, fault: Fault) {
        self.flag(fault).store(false, Ordering::SeqCst);
    }

    pub fn heal_all(&self) {
        for fault in [
            Fault::FetchSessions,
            Fault::FetchPr,
            Fault::UpsertPr,
            Fault::ModifyItem,
            Fault::Save,
        ] {
            self.heal(fault);
        }
    }

    fn check(&self, fault: Fault, operation: &'static str) -> StoreResult<()> {
        if self.flag(fault).load(Ordering::SeqCst) {
            Err(StoreError::unavailable(operation, "injected fault"))
        } else {
            Ok(())
        }
    }
}

impl TrainingStore for FlakyStore {
    fn fetch_sessions(&self) -> StoreResult<Vec<Session>> {
        self.check(Fault::FetchSessions, "fetch_sessions")?;
        self.inner.fetch_sessions()
    }

    fn fetch_pr(&self, exercise_id: &str) -> StoreResult<Option<PrIndex>> {
        self.check(Fault::FetchPr, "fetch_pr")?;
        self.inner.fetch_pr(exercise_id)
    }

    fn upsert_pr(&self, pr: PrIndex) -> StoreResult<()> {
        self.check(Fault::UpsertPr, "upsert_pr")?;
        self.inner.upsert_pr(pr)
    }

    fn modify_item(
        &self,
        session_id: Uuid,
        exercise_id: &str,
        edit: ItemEdit<'_>,
    ) -> StoreResult<bool> {
        self.check(Fault::ModifyItem, "modify_item")?;
        self.inner.modify_item(session_id, exercise_id, edit)
    }

    fn save(&self) -> StoreResult<()> {
        self.check(Fault::Save, "save")?;
        self.inner.save()
    }
}

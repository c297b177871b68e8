// ABOUTME: Scheduled training sessions and the per-exercise items they contain
// ABOUTME: Also carries optional session-level readiness inputs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use super::decision::ProgressionDecision;
use super::exercise::{ExerciseLog, ExercisePlan};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Self-reported readiness at the start of a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionReadiness {
    /// Hours slept the night before
    pub sleep_hours: Option<f64>,
    /// Muscle soreness, 1 (none) to 5 (severe)
    pub soreness: Option<u8>,
    /// Energy, 1 (exhausted) to 5 (excellent)
    pub energy: Option<u8>,
}

/// One exercise inside a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionItem {
    /// Exercise identity (catalog key such as `barbell_bench_press`)
    pub exercise_id: String,
    /// Optional display name used as a fallback for pattern inference
    #[serde(default)]
    pub display_name: Option<String>,
    /// Lifter flagged this movement as loading a sensitive spine
    #[serde(default)]
    pub spine_sensitive: bool,
    /// Prescribed targets
    #[serde(default)]
    pub plan: ExercisePlan,
    /// Logged outcome
    #[serde(default)]
    pub log: ExerciseLog,
    /// Set when this session produced a new personal record
    #[serde(default)]
    pub is_personal_record: bool,
    /// Last decision computed for this item
    #[serde(default)]
    pub decision: Option<ProgressionDecision>,
}

impl SessionItem {
    /// Create an item with an empty plan and log
    #[must_use]
    pub fn new(exercise_id: impl Into<String>) -> Self {
        Self {
            exercise_id: exercise_id.into(),
            display_name: None,
            spine_sensitive: false,
            plan: ExercisePlan::default(),
            log: ExerciseLog::default(),
            is_personal_record: false,
            decision: None,
        }
    }
}

/// A scheduled training session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Session identity
    pub id: Uuid,
    /// When the session is (or was) scheduled
    pub scheduled_at: DateTime<Utc>,
    /// Absolute week number within the current mesocycle block (1-based)
    pub week_number: u32,
    /// Optional readiness inputs
    #[serde(default)]
    pub readiness: Option<SessionReadiness>,
    /// Exercises in performance order
    #[serde(default)]
    pub items: Vec<SessionItem>,
}

impl Session {
    /// Create an empty session
    #[must_use]
    pub fn new(scheduled_at: DateTime<Utc>, week_number: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            scheduled_at,
            week_number,
            readiness: None,
            items: Vec::new(),
        }
    }

    /// Find the item for an exercise
    #[must_use]
    pub fn item(&self, exercise_id: &str) -> Option<&SessionItem> {
        self.items.iter().find(|item| item.exercise_id == exercise_id)
    }

    /// Find the item for an exercise, mutably
    pub fn item_mut(&mut self, exercise_id: &str) -> Option<&mut SessionItem> {
        self.items
            .iter_mut()
            .find(|item| item.exercise_id == exercise_id)
    }
}

// ABOUTME: Planned targets and logged outcomes for one exercise within a session
// ABOUTME: Provides the empty-plan predicate and carry-forward plan construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use super::decision::ProgressionDecision;
use serde::{Deserialize, Serialize};

/// What the program prescribes for an exercise in one session.
///
/// When `planned_reps_by_set` and `planned_loads_by_set` are both non-empty
/// they have the same length; when empty, `target_reps` and
/// `suggested_load` are the fallback.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExercisePlan {
    /// Target repetitions per set
    pub target_reps: u32,
    /// Target number of working sets
    pub target_sets: u32,
    /// Target reps in reserve; falls back to the cluster's base RIR when absent
    #[serde(default)]
    pub target_rir: Option<f64>,
    /// Suggested working load
    pub suggested_load: f64,
    /// Per-set planned repetitions
    #[serde(default)]
    pub planned_reps_by_set: Vec<u32>,
    /// Per-set planned loads
    #[serde(default)]
    pub planned_loads_by_set: Vec<f64>,
}

impl ExercisePlan {
    /// Highest planned rep count, falling back to `target_reps`
    #[must_use]
    pub fn planned_top_reps(&self) -> u32 {
        self.planned_reps_by_set
            .iter()
            .copied()
            .max()
            .unwrap_or(self.target_reps)
    }

    /// Per-set arrays agree in length whenever both are populated
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.planned_reps_by_set.is_empty()
            || self.planned_loads_by_set.is_empty()
            || self.planned_reps_by_set.len() == self.planned_loads_by_set.len()
    }

    /// A plan nobody has filled in yet: no per-set load and no suggested load
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.planned_loads_by_set.iter().all(|load| *load == 0.0) && self.suggested_load == 0.0
    }

    /// Build the plan for the next occurrence from this plan and a decision
    #[must_use]
    pub fn carried_forward(&self, decision: &ProgressionDecision) -> Self {
        let sets = decision.next_sets as usize;
        let pad = self
            .planned_reps_by_set
            .last()
            .copied()
            .unwrap_or(self.target_reps);

        let mut planned_reps_by_set = self.planned_reps_by_set.clone();
        planned_reps_by_set.resize(sets, pad);

        Self {
            target_reps: self.target_reps,
            target_sets: decision.next_sets,
            target_rir: self.target_rir,
            suggested_load: decision.next_load,
            planned_reps_by_set,
            planned_loads_by_set: vec![decision.next_load; sets],
        }
    }
}

/// What was actually performed, as index-aligned parallel arrays.
///
/// Arrays may differ in length while the user is mid-log; consumers truncate
/// to the shortest load/reps prefix and treat missing RIR/rest-pause entries
/// as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExerciseLog {
    /// Load per set (0 = not logged)
    #[serde(default)]
    pub actual_loads: Vec<f64>,
    /// Reps per set (0 = not logged)
    #[serde(default)]
    pub actual_reps: Vec<u32>,
    /// Reps in reserve per set
    #[serde(default)]
    pub actual_rirs: Vec<Option<f64>>,
    /// Rest-pause usage per set
    #[serde(default)]
    pub rest_pause_flags: Vec<bool>,
}

impl ExerciseLog {
    /// Number of indices where both load and reps are positive
    #[must_use]
    pub fn logged_sets_count(&self) -> usize {
        self.actual_loads
            .iter()
            .zip(&self.actual_reps)
            .filter(|(load, reps)| **load > 0.0 && **reps > 0)
            .count()
    }

    /// Append one set to every array
    pub fn push_set(&mut self, load: f64, reps: u32, rir: Option<f64>, rest_pause: bool) {
        self.actual_loads.push(load);
        self.actual_reps.push(reps);
        self.actual_rirs.push(rir);
        self.rest_pause_flags.push(rest_pause);
    }
}

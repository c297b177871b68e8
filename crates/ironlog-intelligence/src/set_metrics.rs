// ABOUTME: Aggregate statistics over a group of working sets
// ABOUTME: Computes best reps, RIR averages, rest-pause counts, and load extremes in one pass
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use ironlog_core::models::SetRecord;
use serde::{Deserialize, Serialize};

/// Summary of an ordered group of working sets.
///
/// RIR aggregates only consider sets where RIR was logged; they are `None`
/// when no set in the group carries RIR.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SetGroupStats {
    /// Number of sets
    pub count: usize,
    /// Highest rep count
    pub best_reps: u32,
    /// Lowest rep count
    pub worst_reps: u32,
    /// Reps of the first set
    pub first_reps: u32,
    /// Reps of the last set
    pub last_reps: u32,
    /// Load of the first set
    pub first_load: f64,
    /// Load of the last set
    pub last_load: f64,
    /// Heaviest load
    pub max_load: f64,
    /// Lightest load
    pub min_load: f64,
    /// Mean of logged RIR values
    pub avg_rir: Option<f64>,
    /// Smallest logged RIR value
    pub min_rir: Option<f64>,
    /// Sets that used rest-pause
    pub rest_pause_count: usize,
}

impl SetGroupStats {
    /// Summarize sets in their logged order
    #[must_use]
    pub fn from_sets(sets: &[SetRecord]) -> Self {
        let (Some(first), Some(last)) = (sets.first(), sets.last()) else {
            return Self::default();
        };

        let rirs: Vec<f64> = sets.iter().filter_map(|set| set.rir).collect();
        #[allow(clippy::cast_precision_loss)] // Safe: a handful of sets per exercise
        let avg_rir = (!rirs.is_empty()).then(|| rirs.iter().sum::<f64>() / rirs.len() as f64);
        let min_rir = rirs.iter().copied().reduce(f64::min);

        Self {
            count: sets.len(),
            best_reps: sets.iter().map(|set| set.reps).max().unwrap_or(0),
            worst_reps: sets.iter().map(|set| set.reps).min().unwrap_or(0),
            first_reps: first.reps,
            last_reps: last.reps,
            first_load: first.load,
            last_load: last.load,
            max_load: sets.iter().map(|set| set.load).fold(f64::MIN, f64::max),
            min_load: sets.iter().map(|set| set.load).fold(f64::MAX, f64::min),
            avg_rir,
            min_rir,
            rest_pause_count: sets.iter().filter(|set| set.used_rest_pause).count(),
        }
    }

    /// Whether every set reached `reps`
    #[must_use]
    pub const fn all_reached(&self, reps: u32) -> bool {
        self.count > 0 && self.worst_reps >= reps
    }

    /// Relative drop from heaviest to lightest load (0 when empty)
    #[must_use]
    pub fn load_drop_ratio(&self) -> f64 {
        if self.count == 0 || self.max_load <= 0.0 {
            return 0.0;
        }
        (self.max_load - self.min_load) / self.max_load
    }

    /// Reps lost between the first and last set
    #[must_use]
    pub const fn rep_drop(&self) -> u32 {
        self.first_reps.saturating_sub(self.last_reps)
    }
}

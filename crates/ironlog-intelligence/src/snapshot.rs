// ABOUTME: Set snapshot builder converting raw logged arrays into validated set records
// ABOUTME: Drops incomplete entries and truncates mismatched arrays to the shortest prefix
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use ironlog_core::models::{ExerciseLog, SetRecord};
use tracing::debug;

/// Builds ordered set snapshots from parallel logged arrays
pub struct SetSnapshotBuilder;

impl SetSnapshotBuilder {
    /// Snapshot every working set in an exercise log
    #[must_use]
    pub fn from_log(log: &ExerciseLog) -> Vec<SetRecord> {
        Self::from_arrays(
            &log.actual_loads,
            &log.actual_reps,
            &log.actual_rirs,
            &log.rest_pause_flags,
        )
    }

    /// Snapshot working sets from raw arrays.
    ///
    /// Index `i` yields a record iff `loads[i] > 0` and `reps[i] > 0`. Load
    /// and reps are truncated to the shorter of the two; RIR and rest-pause
    /// entries beyond their array's end are treated as absent. Negative or
    /// non-finite RIR values are dropped. An empty result is a normal
    /// outcome (nothing logged yet).
    #[must_use]
    pub fn from_arrays(
        loads: &[f64],
        reps: &[u32],
        rirs: &[Option<f64>],
        rest_pause_flags: &[bool],
    ) -> Vec<SetRecord> {
        if loads.len() != reps.len() {
            debug!(
                loads = loads.len(),
                reps = reps.len(),
                "Logged arrays differ in length, truncating to shortest"
            );
        }

        loads
            .iter()
            .zip(reps)
            .enumerate()
            .filter(|(_, (load, reps))| **load > 0.0 && **reps > 0)
            .map(|(index, (load, reps))| SetRecord {
                load: *load,
                reps: *reps,
                rir: rirs
                    .get(index)
                    .copied()
                    .flatten()
                    .filter(|rir| rir.is_finite() && *rir >= 0.0),
                used_rest_pause: rest_pause_flags.get(index).copied().unwrap_or(false),
            })
            .collect()
    }
}

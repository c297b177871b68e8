// ABOUTME: Validated working-set record built from raw logged arrays
// ABOUTME: Carries load, reps, optional reps-in-reserve, and the rest-pause flag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use serde::{Deserialize, Serialize};

/// One working set with positive load and positive reps
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetRecord {
    /// Load lifted (positive, in the user's unit)
    pub load: f64,
    /// Completed repetitions (positive)
    pub reps: u32,
    /// Self-reported reps in reserve, when logged
    pub rir: Option<f64>,
    /// Whether the set was extended with rest-pause reps
    pub used_rest_pause: bool,
}

impl SetRecord {
    /// Create a set record without RIR or rest-pause information
    #[must_use]
    pub const fn new(load: f64, reps: u32) -> Self {
        Self {
            load,
            reps,
            rir: None,
            used_rest_pause: false,
        }
    }

    /// Attach a reps-in-reserve value
    #[must_use]
    pub const fn with_rir(mut self, rir: f64) -> Self {
        self.rir = Some(rir);
        self
    }

    /// Mark the set as rest-paused
    #[must_use]
    pub const fn with_rest_pause(mut self) -> Self {
        self.used_rest_pause = true;
        self
    }

    /// Single-set volume (load x reps)
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.load * f64::from(self.reps)
    }

    /// Whether this counts as a working set
    #[must_use]
    pub fn is_working_set(&self) -> bool {
        self.load > 0.0 && self.reps > 0
    }
}

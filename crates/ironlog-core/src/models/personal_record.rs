// ABOUTME: Personal record index keyed by exercise identity
// ABOUTME: Tracks best-ever single-set volume with the load, reps, and date that produced it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Best single-set volume ever logged for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrIndex {
    /// Exercise identity this record belongs to
    pub exercise_id: String,
    /// Best load x reps
    pub best_set_volume: f64,
    /// Load of the record set
    pub best_load: f64,
    /// Reps of the record set
    pub best_reps: u32,
    /// When the record was set
    pub best_date: DateTime<Utc>,
}

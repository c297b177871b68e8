// ABOUTME: Progression decision value produced once per exercise evaluation
// ABOUTME: Holds next load, next set count, the action label, and ordered rationale notes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use crate::constants::limits::MIN_PRESCRIBED_SETS;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What to do with the working load next time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressionAction {
    /// Add load
    IncreaseLoad,
    /// Repeat the same load
    HoldLoad,
    /// Drop load (includes in-session re-baselines)
    ReduceLoad,
    /// Keep load, drop a set
    ReduceSets,
    /// Planned deload week
    Deload,
}

impl fmt::Display for ProgressionAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::IncreaseLoad => "increase load",
            Self::HoldLoad => "hold load",
            Self::ReduceLoad => "reduce load",
            Self::ReduceSets => "reduce sets",
            Self::Deload => "deload",
        };
        f.write_str(label)
    }
}

/// Outcome of evaluating one exercise-in-session.
///
/// Safe to serialize and display verbatim; never mutated once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionDecision {
    /// Load to use next time (never negative)
    pub next_load: f64,
    /// Working sets to perform next time (at least one)
    pub next_sets: u32,
    /// Action label
    pub action: ProgressionAction,
    /// Human-readable rationale, most important first
    pub notes: Vec<String>,
}

impl ProgressionDecision {
    /// Build a decision, clamping load to be non-negative and sets to at least one
    #[must_use]
    pub fn new(action: ProgressionAction, next_load: f64, next_sets: u32, notes: Vec<String>) -> Self {
        Self {
            next_load: next_load.max(0.0),
            next_sets: next_sets.max(MIN_PRESCRIBED_SETS),
            action,
            notes,
        }
    }
}

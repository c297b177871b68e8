// ABOUTME: Numeric thresholds for the decision cascade and readiness advisory
// ABOUTME: Defaults reproduce the reference coaching rules exactly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use super::error::ConfigError;
use crate::coaching_constants::{decision_defaults, readiness_defaults};
use serde::{Deserialize, Serialize};

/// Thresholds consulted by the decision cascade
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionThresholds {
    /// Average RIR within this of the target counts as on target
    pub rir_tolerance: f64,
    /// RIR this far above target leaves room for an extra set
    pub set_increase_rir_headroom: f64,
    /// First-to-last load drop ratio that signals a re-baseline
    pub rebaseline_drop_ratio: f64,
    /// First-to-last growth rep drop that signals a fatigue crash
    pub fatigue_rep_drop: u32,
    /// Rest-pause growth sets that make a session harder than planned
    pub rest_pause_limit: usize,
    /// Reps above the planned top that count as comfortable overperformance
    pub overperformance_rep_margin: u32,
    /// Diagnostic sets this many reps under the planned top are "well below"
    pub diagnostic_shortfall_reps: u32,
}

impl Default for DecisionThresholds {
    fn default() -> Self {
        Self {
            rir_tolerance: decision_defaults::RIR_TOLERANCE,
            set_increase_rir_headroom: decision_defaults::SET_INCREASE_RIR_HEADROOM,
            rebaseline_drop_ratio: decision_defaults::REBASELINE_DROP_RATIO,
            fatigue_rep_drop: decision_defaults::FATIGUE_REP_DROP,
            rest_pause_limit: decision_defaults::REST_PAUSE_LIMIT,
            overperformance_rep_margin: decision_defaults::OVERPERFORMANCE_REP_MARGIN,
            diagnostic_shortfall_reps: decision_defaults::DIAGNOSTIC_SHORTFALL_REPS,
        }
    }
}

impl DecisionThresholds {
    /// Validate threshold ranges
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for negative tolerances or a drop ratio outside (0, 1)
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rir_tolerance < 0.0 || self.set_increase_rir_headroom < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "RIR tolerances must be non-negative",
            ));
        }
        if self.rebaseline_drop_ratio <= 0.0 || self.rebaseline_drop_ratio >= 1.0 {
            return Err(ConfigError::ValueOutOfRange(
                "rebaseline_drop_ratio must be between 0 and 1",
            ));
        }
        if self.rest_pause_limit == 0 {
            return Err(ConfigError::ValueOutOfRange("rest_pause_limit must be >= 1"));
        }
        Ok(())
    }
}

/// When session readiness counts as poor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadinessConfig {
    /// Less sleep than this is poor readiness
    pub min_sleep_hours: f64,
    /// Soreness at or above this (1-5) is poor readiness
    pub max_soreness: u8,
    /// Energy at or below this (1-5) is poor readiness
    pub min_energy: u8,
}

impl Default for ReadinessConfig {
    fn default() -> Self {
        Self {
            min_sleep_hours: readiness_defaults::MIN_SLEEP_HOURS,
            max_soreness: readiness_defaults::MAX_SORENESS,
            min_energy: readiness_defaults::MIN_ENERGY,
        }
    }
}

impl ReadinessConfig {
    /// Validate scale bounds
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` if a 1-5 scale threshold falls outside it
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=5).contains(&self.max_soreness) || !(1..=5).contains(&self.min_energy) {
            return Err(ConfigError::ValueOutOfRange(
                "readiness scales are 1 to 5",
            ));
        }
        if self.min_sleep_hours < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "min_sleep_hours must be non-negative",
            ));
        }
        Ok(())
    }
}

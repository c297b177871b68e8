// ABOUTME: Mesocycle block configuration mapping week numbers to training phases
// ABOUTME: Holds the inclusive last week of the early, mid, and late phases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use super::error::ConfigError;
use crate::coaching_constants::mesocycle_block::{EARLY_END_WEEK, LATE_END_WEEK, MID_END_WEEK};
use serde::{Deserialize, Serialize};

/// Week-range table for one mesocycle block.
///
/// Weeks `1..=early_end_week` are early, up to `mid_end_week` mid, up to
/// `late_end_week` late, and everything after is deload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MesocycleConfig {
    /// Last early-phase week (inclusive)
    pub early_end_week: u32,
    /// Last mid-phase week (inclusive)
    pub mid_end_week: u32,
    /// Last late-phase week (inclusive)
    pub late_end_week: u32,
}

impl Default for MesocycleConfig {
    fn default() -> Self {
        Self {
            early_end_week: EARLY_END_WEEK,
            mid_end_week: MID_END_WEEK,
            late_end_week: LATE_END_WEEK,
        }
    }
}

impl MesocycleConfig {
    /// Check the phases are non-empty and in order
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` if the week boundaries are not strictly increasing
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.early_end_week < 1 {
            return Err(ConfigError::InvalidRange("early_end_week must be >= 1"));
        }
        if self.early_end_week >= self.mid_end_week || self.mid_end_week >= self.late_end_week {
            return Err(ConfigError::InvalidRange(
                "mesocycle weeks must satisfy early_end < mid_end < late_end",
            ));
        }
        Ok(())
    }

    /// Total weeks before the deload begins
    #[must_use]
    pub const fn accumulation_weeks(&self) -> u32 {
        self.late_end_week
    }
}

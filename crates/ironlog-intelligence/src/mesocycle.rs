// ABOUTME: Mesocycle phase mapping from week number and phase-adjusted RIR targets
// ABOUTME: Early/mid/late/deload phases drive how close to failure sets should be taken
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use crate::coaching_constants::rir_adjustments::{
    DELOAD_INCREASE, LATE_PHASE_FLOOR, LATE_PHASE_REDUCTION, MID_PHASE_FLOOR, MID_PHASE_REDUCTION,
};
use crate::config::MesocycleConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Phase of the mesocycle block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MesoPhase {
    /// Accumulation, furthest from failure
    Early,
    /// Building intensity
    Mid,
    /// Peak, closest to failure
    Late,
    /// Planned recovery
    Deload,
}

impl MesoPhase {
    /// RIR target for this phase given the base target.
    ///
    /// The deload value is informational; the cascade bypasses RIR rules in
    /// a deload.
    #[must_use]
    pub fn effective_target_rir(self, base_rir: f64) -> f64 {
        match self {
            Self::Early => base_rir,
            Self::Mid => (base_rir - MID_PHASE_REDUCTION).max(MID_PHASE_FLOOR),
            Self::Late => (base_rir - LATE_PHASE_REDUCTION).max(LATE_PHASE_FLOOR),
            Self::Deload => base_rir + DELOAD_INCREASE,
        }
    }
}

impl fmt::Display for MesoPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Early => "early",
            Self::Mid => "mid",
            Self::Late => "late",
            Self::Deload => "deload",
        };
        f.write_str(label)
    }
}

/// Maps absolute week numbers onto a block's phases
#[derive(Debug, Clone, Copy, Default)]
pub struct MesocycleMapper {
    block: MesocycleConfig,
}

impl MesocycleMapper {
    /// Create a mapper for a block definition
    #[must_use]
    pub const fn new(block: MesocycleConfig) -> Self {
        Self { block }
    }

    /// Phase for a 1-based week number; week 0 is treated as the first week
    #[must_use]
    pub const fn phase(&self, week_number: u32) -> MesoPhase {
        if week_number <= self.block.early_end_week {
            MesoPhase::Early
        } else if week_number <= self.block.mid_end_week {
            MesoPhase::Mid
        } else if week_number <= self.block.late_end_week {
            MesoPhase::Late
        } else {
            MesoPhase::Deload
        }
    }

    /// Block definition in use
    #[must_use]
    pub const fn block(&self) -> &MesocycleConfig {
        &self.block
    }
}

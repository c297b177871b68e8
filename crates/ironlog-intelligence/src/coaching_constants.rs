// ABOUTME: Reference constants for strength progression: load steps, RIR shifts, rep ranges
// ABOUTME: Grouped by concern so rules read as named thresholds rather than magic numbers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Coaching constants used as defaults by the configuration layer and as
//! fixed equipment realities by the decision cascade.

/// Load increments that land on realistic plate/dumbbell jumps
pub mod load_steps {
    /// Loads at or above this use the heavy step
    pub const HEAVY_LOAD_THRESHOLD: f64 = 200.0;
    /// Loads at or above this (and below heavy) use the medium step
    pub const MEDIUM_LOAD_THRESHOLD: f64 = 100.0;
    /// Step for heavy loads
    pub const HEAVY_STEP: f64 = 5.0;
    /// Step for medium loads
    pub const MEDIUM_STEP: f64 = 2.5;
    /// Step for light loads
    pub const LIGHT_STEP: f64 = 2.0;
}

/// How the effective RIR target shifts across the mesocycle
pub mod rir_adjustments {
    /// Mid phase: subtract this from the base target
    pub const MID_PHASE_REDUCTION: f64 = 0.3;
    /// Mid phase never asks for less than this
    pub const MID_PHASE_FLOOR: f64 = 1.5;
    /// Late phase: subtract this from the base target
    pub const LATE_PHASE_REDUCTION: f64 = 1.0;
    /// Late phase never asks for less than this
    pub const LATE_PHASE_FLOOR: f64 = 1.0;
    /// Deload: add this to the base target
    pub const DELOAD_INCREASE: f64 = 1.0;
}

/// Reference mesocycle block (weeks are 1-based and inclusive)
pub mod mesocycle_block {
    /// Last early-phase week
    pub const EARLY_END_WEEK: u32 = 3;
    /// Last mid-phase week
    pub const MID_END_WEEK: u32 = 6;
    /// Last late-phase week; anything after is deload
    pub const LATE_END_WEEK: u32 = 10;
}

/// Target repetition ranges per movement pattern, as `(min, max)`
pub mod rep_ranges {
    /// Horizontal and vertical presses
    pub const PRESS: (u32, u32) = (6, 10);
    /// Rows, pulldowns, chin-ups
    pub const PULL: (u32, u32) = (8, 12);
    /// Squats, leg press, lunges
    pub const SQUAT: (u32, u32) = (6, 10);
    /// Deadlifts, RDLs, hip thrusts
    pub const HINGE: (u32, u32) = (6, 10);
    /// Hinge for a spine-sensitive lifter collapses to a single target
    pub const SPINE_SENSITIVE_HINGE_REPS: u32 = 10;
    /// Leg curls and leg extensions
    pub const LEG_ISOLATION: (u32, u32) = (10, 15);
    /// Lateral raises, rear-delt flyes, face pulls
    pub const LATERAL_REAR_DELT: (u32, u32) = (12, 20);
    /// Biceps curls
    pub const BICEPS: (u32, u32) = (10, 15);
    /// Triceps extensions and pushdowns
    pub const TRICEPS: (u32, u32) = (10, 15);
    /// Calf raises
    pub const CALVES: (u32, u32) = (10, 15);
    /// Trunk flexion and anti-extension work
    pub const ABS: (u32, u32) = (10, 20);
    /// Anything the rulebook could not classify
    pub const DEFAULT: (u32, u32) = (8, 12);
}

/// Defaults for the decision cascade thresholds
pub mod decision_defaults {
    /// Average RIR within this of the target counts as on target
    pub const RIR_TOLERANCE: f64 = 0.5;
    /// RIR this far above target leaves room for an extra set
    pub const SET_INCREASE_RIR_HEADROOM: f64 = 0.7;
    /// First-to-last load drop ratio that signals an in-session re-baseline
    pub const REBASELINE_DROP_RATIO: f64 = 0.10;
    /// First-to-last growth rep drop that signals a fatigue crash
    pub const FATIGUE_REP_DROP: u32 = 3;
    /// Rest-pause growth sets that make a session harder than planned
    pub const REST_PAUSE_LIMIT: usize = 2;
    /// Reps above the planned top that count as comfortable overperformance
    pub const OVERPERFORMANCE_REP_MARGIN: u32 = 2;
    /// Diagnostic sets this many reps under the planned top are "well below"
    pub const DIAGNOSTIC_SHORTFALL_REPS: u32 = 2;
}

/// Defaults for the readiness advisory
pub mod readiness_defaults {
    /// Less sleep than this is poor readiness
    pub const MIN_SLEEP_HOURS: f64 = 6.0;
    /// Soreness at or above this is poor readiness
    pub const MAX_SORENESS: u8 = 4;
    /// Energy at or below this is poor readiness
    pub const MIN_ENERGY: u8 = 2;
}

// ABOUTME: Application-wide constants for service identity and environment configuration
// ABOUTME: Groups env var names and service names so binaries and libraries agree on them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

/// Service identifiers used in structured logging
pub mod service_names {
    /// Default service name for the coaching library and CLI
    pub const IRONLOG: &str = "ironlog";
}

/// Environment variable names read by the coaching configuration layer
pub mod env_config {
    /// Last week (inclusive) of the early mesocycle phase
    pub const MESO_EARLY_END: &str = "IRONLOG_MESO_EARLY_END";
    /// Last week (inclusive) of the mid mesocycle phase
    pub const MESO_MID_END: &str = "IRONLOG_MESO_MID_END";
    /// Last week (inclusive) of the late mesocycle phase
    pub const MESO_LATE_END: &str = "IRONLOG_MESO_LATE_END";
    /// Allowed distance between average RIR and the effective target
    pub const RIR_TOLERANCE: &str = "IRONLOG_RIR_TOLERANCE";
    /// RIR headroom above target required before adding a set
    pub const SET_INCREASE_RIR_HEADROOM: &str = "IRONLOG_SET_INCREASE_RIR_HEADROOM";
    /// Relative in-session load drop that counts as a re-baseline
    pub const REBASELINE_DROP_RATIO: &str = "IRONLOG_REBASELINE_DROP_RATIO";
    /// First-to-last growth set rep drop that signals a fatigue crash
    pub const FATIGUE_REP_DROP: &str = "IRONLOG_FATIGUE_REP_DROP";
    /// Number of rest-pause growth sets that marks a session as harder than planned
    pub const REST_PAUSE_LIMIT: &str = "IRONLOG_REST_PAUSE_LIMIT";
    /// Reps above the planned top that count as comfortable overperformance
    pub const OVERPERFORMANCE_REP_MARGIN: &str = "IRONLOG_OVERPERFORMANCE_REP_MARGIN";
    /// Minimum sleep hours before the readiness advisory fires
    pub const READINESS_MIN_SLEEP_HOURS: &str = "IRONLOG_READINESS_MIN_SLEEP_HOURS";
}

/// Limits shared by every layer that touches logged sets
pub mod limits {
    /// Number of leading working sets that drive progression ("three to grow")
    pub const GROWTH_SET_LIMIT: usize = 3;
    /// Lowest set count a decision may prescribe
    pub const MIN_PRESCRIBED_SETS: u32 = 1;
}

// ABOUTME: Coaching configuration for the progression engine with env overrides and validation
// ABOUTME: Orchestrates mesocycle, cluster, threshold, and readiness settings behind one global
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Coaching Configuration Module
//!
//! Configuration is organized into domain-specific modules:
//! - `mesocycle` - Week-range table for the training block
//! - `progression` - Cluster settings and the assembled `ProgressionConfig`
//! - `thresholds` - Decision cascade and readiness thresholds
//!
//! Loading order is defaults, then `IRONLOG_*` environment overrides, then
//! validation. [`CoachingConfig::global`] caches the result for the process.

pub mod error;
pub mod mesocycle;
pub mod progression;
pub mod thresholds;

pub use error::ConfigError;
pub use mesocycle::MesocycleConfig;
pub use progression::{ClusterConfigs, ClusterSettings, ProgressionConfig, RepRange};
pub use thresholds::{DecisionThresholds, ReadinessConfig};

use ironlog_core::constants::env_config;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static COACHING_CONFIG: OnceLock<CoachingConfig> = OnceLock::new();

/// Main coaching configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoachingConfig {
    /// Week-range table for the mesocycle block
    pub mesocycle: MesocycleConfig,
    /// Progression settings per movement cluster
    pub clusters: ClusterConfigs,
    /// Decision cascade thresholds
    pub thresholds: DecisionThresholds,
    /// Readiness advisory thresholds
    pub readiness: ReadinessConfig,
}

impl CoachingConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        COACHING_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load coaching config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first validation failure found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.mesocycle.validate()?;
        self.clusters.validate()?;
        self.thresholds.validate()?;
        self.readiness.validate()
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        // Mesocycle block
        Self::apply_env_var(
            env_config::MESO_EARLY_END,
            &mut self.mesocycle.early_end_week,
        )?;
        Self::apply_env_var(env_config::MESO_MID_END, &mut self.mesocycle.mid_end_week)?;
        Self::apply_env_var(env_config::MESO_LATE_END, &mut self.mesocycle.late_end_week)?;

        // Decision thresholds
        Self::apply_env_var(
            env_config::RIR_TOLERANCE,
            &mut self.thresholds.rir_tolerance,
        )?;
        Self::apply_env_var(
            env_config::SET_INCREASE_RIR_HEADROOM,
            &mut self.thresholds.set_increase_rir_headroom,
        )?;
        Self::apply_env_var(
            env_config::REBASELINE_DROP_RATIO,
            &mut self.thresholds.rebaseline_drop_ratio,
        )?;
        Self::apply_env_var(
            env_config::FATIGUE_REP_DROP,
            &mut self.thresholds.fatigue_rep_drop,
        )?;
        Self::apply_env_var(
            env_config::REST_PAUSE_LIMIT,
            &mut self.thresholds.rest_pause_limit,
        )?;
        Self::apply_env_var(
            env_config::OVERPERFORMANCE_REP_MARGIN,
            &mut self.thresholds.overperformance_rep_margin,
        )?;

        // Readiness
        Self::apply_env_var(
            env_config::READINESS_MIN_SLEEP_HOURS,
            &mut self.readiness.min_sleep_hours,
        )?;

        Ok(self)
    }
}

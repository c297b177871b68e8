// ABOUTME: Per-cluster progression settings and the assembled ProgressionConfig
// ABOUTME: Combines cluster increments and set bounds with a pattern's rep range
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use super::error::ConfigError;
use crate::rulebook::MovementCluster;
use serde::{Deserialize, Serialize};

/// Inclusive repetition range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepRange {
    /// Lower bound
    pub min: u32,
    /// Upper bound
    pub max: u32,
}

impl RepRange {
    /// Create a range
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Range collapsed to a single rep target
    #[must_use]
    pub const fn fixed(reps: u32) -> Self {
        Self {
            min: reps,
            max: reps,
        }
    }
}

impl From<(u32, u32)> for RepRange {
    fn from((min, max): (u32, u32)) -> Self {
        Self::new(min, max)
    }
}

/// Progression settings shared by every exercise in one movement cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterSettings {
    /// RIR target before mesocycle adjustment
    pub base_target_rir: f64,
    /// Load step used when reducing load outside a deload
    pub primary_load_increment: f64,
    /// Load step used for deload reductions
    pub secondary_load_increment: f64,
    /// Fewest working sets a decision may prescribe
    pub min_sets: u32,
    /// Most working sets a decision may prescribe
    pub max_sets: u32,
    /// Whether strong sessions may add a set
    pub allow_set_increase: bool,
    /// Whether struggling sessions may drop load
    pub allow_load_decrease: bool,
    /// Low-back or stability work that never progresses automatically
    pub is_low_back_or_stability: bool,
}

impl ClusterSettings {
    /// Validate set bounds, increments, and RIR
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if set bounds are inverted or numeric values are negative
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_sets < 1 {
            return Err(ConfigError::ValueOutOfRange("min_sets must be >= 1"));
        }
        if self.min_sets > self.max_sets {
            return Err(ConfigError::InvalidRange("min_sets must be <= max_sets"));
        }
        if self.primary_load_increment < 0.0 || self.secondary_load_increment < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "load increments must be non-negative",
            ));
        }
        if self.base_target_rir < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "base_target_rir must be non-negative",
            ));
        }
        Ok(())
    }
}

/// Settings for each movement cluster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterConfigs {
    /// Presses and pulls
    pub upper_compound: ClusterSettings,
    /// Squats and hinges
    pub lower_compound: ClusterSettings,
    /// Single-joint accessories
    pub isolation: ClusterSettings,
    /// Trunk work and spine-sensitive hinges
    pub stability: ClusterSettings,
}

impl ClusterConfigs {
    /// Settings for one cluster
    #[must_use]
    pub const fn settings(&self, cluster: MovementCluster) -> &ClusterSettings {
        match cluster {
            MovementCluster::UpperCompound => &self.upper_compound,
            MovementCluster::LowerCompound => &self.lower_compound,
            MovementCluster::Isolation => &self.isolation,
            MovementCluster::Stability => &self.stability,
        }
    }

    /// Validate every cluster
    ///
    /// # Errors
    ///
    /// Returns the first cluster validation failure
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.upper_compound.validate()?;
        self.lower_compound.validate()?;
        self.isolation.validate()?;
        self.stability.validate()
    }
}

impl Default for ClusterConfigs {
    fn default() -> Self {
        Self {
            upper_compound: ClusterSettings {
                base_target_rir: 2.0,
                primary_load_increment: 2.5,
                secondary_load_increment: 2.5,
                min_sets: 2,
                max_sets: 5,
                allow_set_increase: true,
                allow_load_decrease: true,
                is_low_back_or_stability: false,
            },
            lower_compound: ClusterSettings {
                base_target_rir: 2.0,
                primary_load_increment: 5.0,
                secondary_load_increment: 5.0,
                min_sets: 2,
                max_sets: 5,
                allow_set_increase: true,
                allow_load_decrease: true,
                is_low_back_or_stability: false,
            },
            isolation: ClusterSettings {
                base_target_rir: 1.5,
                primary_load_increment: 2.0,
                secondary_load_increment: 1.0,
                min_sets: 2,
                max_sets: 6,
                allow_set_increase: true,
                allow_load_decrease: true,
                is_low_back_or_stability: false,
            },
            stability: ClusterSettings {
                base_target_rir: 3.0,
                primary_load_increment: 2.0,
                secondary_load_increment: 2.0,
                min_sets: 2,
                max_sets: 4,
                allow_set_increase: false,
                allow_load_decrease: true,
                is_low_back_or_stability: true,
            },
        }
    }
}

/// Complete progression policy for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionConfig {
    /// Target repetition range
    pub rep_range: RepRange,
    /// RIR target before mesocycle adjustment
    pub base_target_rir: f64,
    /// Load step used when reducing load outside a deload
    pub primary_load_increment: f64,
    /// Load step used for deload reductions
    pub secondary_load_increment: f64,
    /// Fewest working sets a decision may prescribe
    pub min_sets: u32,
    /// Most working sets a decision may prescribe
    pub max_sets: u32,
    /// Whether strong sessions may add a set
    pub allow_set_increase: bool,
    /// Whether struggling sessions may drop load
    pub allow_load_decrease: bool,
    /// Low-back or stability work that never progresses automatically
    pub is_low_back_or_stability: bool,
}

impl ProgressionConfig {
    /// Combine cluster settings with a rep range
    #[must_use]
    pub fn from_cluster(settings: &ClusterSettings, rep_range: RepRange) -> Self {
        Self {
            rep_range,
            base_target_rir: settings.base_target_rir,
            primary_load_increment: settings.primary_load_increment,
            secondary_load_increment: settings.secondary_load_increment,
            min_sets: settings.min_sets,
            max_sets: settings.max_sets,
            allow_set_increase: settings.allow_set_increase,
            allow_load_decrease: settings.allow_load_decrease,
            is_low_back_or_stability: settings.is_low_back_or_stability,
        }
    }

    /// Validate rep range and set bounds
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidRange` if either range is inverted
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rep_range.min > self.rep_range.max {
            return Err(ConfigError::InvalidRange("rep_range.min must be <= rep_range.max"));
        }
        if self.min_sets > self.max_sets {
            return Err(ConfigError::InvalidRange("min_sets must be <= max_sets"));
        }
        Ok(())
    }

    /// Clamp a set count into the configured bounds
    #[must_use]
    pub fn clamp_sets(&self, sets: u32) -> u32 {
        sets.clamp(self.min_sets.max(1), self.max_sets.max(self.min_sets).max(1))
    }
}

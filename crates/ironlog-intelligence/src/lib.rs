// ABOUTME: Strength progression intelligence engine for the Ironlog coaching platform
// ABOUTME: Turns logged sets into progression decisions with phase- and pattern-aware rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

#![deny(unsafe_code)]

//! # Ironlog Intelligence
//!
//! The pure half of the coaching pipeline. Given what a lifter logged for one
//! exercise, this crate:
//!
//! 1. builds validated set snapshots ([`snapshot`]),
//! 2. splits them into growth and diagnostic sets ([`classifier`]),
//! 3. maps the week to a mesocycle phase ([`mesocycle`]),
//! 4. infers the movement pattern and its progression settings ([`rulebook`]),
//! 5. runs the decision cascade ([`decision_engine`]).
//!
//! Nothing here touches storage. Personal records and plan propagation live in
//! the main `ironlog` crate, which owns the store collaborator.

/// Set-level statistics shared by the classifier and the decision cascade
pub mod set_metrics;

/// Conversion of raw logged arrays into validated set records
pub mod snapshot;

/// Growth / diagnostic partition of working sets
pub mod classifier;

/// Mesocycle phase mapping and effective RIR targets
pub mod mesocycle;

/// Movement-pattern inference, rep ranges, and progression settings
pub mod rulebook;

/// Session readiness advisory
pub mod readiness;

/// Progression decision cascade
pub mod decision_engine;

/// Per-exercise evaluation pipeline tying the stages together
pub mod evaluation;

/// Coaching constants (load steps, RIR adjustments, rep ranges)
pub mod coaching_constants;

/// Coaching configuration with environment overrides and validation
pub mod config;

pub use classifier::{WorkingSetClassification, WorkingSetClassifier};
pub use config::{CoachingConfig, ConfigError, ProgressionConfig, RepRange};
pub use decision_engine::{load_step, DecisionEngine, DecisionInput, DecisionRule};
pub use evaluation::{ExerciseEvaluation, ExerciseEvaluator};
pub use mesocycle::{MesoPhase, MesocycleMapper};
pub use rulebook::{MovementCluster, PatternCategory, Rulebook};
pub use set_metrics::SetGroupStats;
pub use snapshot::SetSnapshotBuilder;

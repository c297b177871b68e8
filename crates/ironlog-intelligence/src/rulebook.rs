// ABOUTME: Rep-range and movement-pattern rulebook for exercise progression settings
// ABOUTME: Infers a pattern from exercise identity via an ordered keyword table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Pattern inference is a declarative, ordered table of keyword predicates.
//! The first matching row wins, identity is tried before display name, and
//! anything unmatched falls back to [`PatternCategory::Unknown`]. Matching is
//! a case-insensitive substring test on the text with separators removed.
//! Row order matters: `legcurl` must be seen before `curl`, `legpress`
//! before `press`.

use crate::coaching_constants::rep_ranges;
use crate::config::{ClusterConfigs, CoachingConfig, ProgressionConfig, RepRange};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Movement pattern of an exercise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternCategory {
    /// Bench, overhead, incline, dips
    Press,
    /// Rows, pulldowns, chin-ups
    Pull,
    /// Squats, leg press, lunges
    Squat,
    /// Deadlifts, RDLs, hip thrusts
    Hinge,
    /// Leg curls and extensions
    LegIsolation,
    /// Lateral raises and rear-delt work
    LateralRearDelt,
    /// Biceps curls
    Biceps,
    /// Triceps extensions and pushdowns
    Triceps,
    /// Calf raises
    Calves,
    /// Trunk work
    Abs,
    /// Not recognized
    Unknown,
}

/// Group of patterns that share progression settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementCluster {
    /// Multi-joint upper body
    UpperCompound,
    /// Multi-joint lower body
    LowerCompound,
    /// Single-joint accessories
    Isolation,
    /// Trunk and spine-sensitive work
    Stability,
}

impl PatternCategory {
    /// Target rep range; a spine-sensitive hinge collapses to one value
    #[must_use]
    pub const fn rep_range(self, spine_sensitive: bool) -> RepRange {
        let (min, max) = match self {
            Self::Press => rep_ranges::PRESS,
            Self::Pull => rep_ranges::PULL,
            Self::Squat => rep_ranges::SQUAT,
            Self::Hinge if spine_sensitive => {
                return RepRange::fixed(rep_ranges::SPINE_SENSITIVE_HINGE_REPS)
            }
            Self::Hinge => rep_ranges::HINGE,
            Self::LegIsolation => rep_ranges::LEG_ISOLATION,
            Self::LateralRearDelt => rep_ranges::LATERAL_REAR_DELT,
            Self::Biceps => rep_ranges::BICEPS,
            Self::Triceps => rep_ranges::TRICEPS,
            Self::Calves => rep_ranges::CALVES,
            Self::Abs => rep_ranges::ABS,
            Self::Unknown => rep_ranges::DEFAULT,
        };
        RepRange::new(min, max)
    }

    /// Movement cluster; a spine-sensitive hinge is treated as stability work
    #[must_use]
    pub const fn cluster(self, spine_sensitive: bool) -> MovementCluster {
        match self {
            Self::Press | Self::Pull | Self::Unknown => MovementCluster::UpperCompound,
            Self::Hinge if spine_sensitive => MovementCluster::Stability,
            Self::Squat | Self::Hinge => MovementCluster::LowerCompound,
            Self::LegIsolation
            | Self::LateralRearDelt
            | Self::Biceps
            | Self::Triceps
            | Self::Calves => MovementCluster::Isolation,
            Self::Abs => MovementCluster::Stability,
        }
    }
}

impl fmt::Display for PatternCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Press => "press",
            Self::Pull => "pull",
            Self::Squat => "squat",
            Self::Hinge => "hinge",
            Self::LegIsolation => "leg curl/extension",
            Self::LateralRearDelt => "lateral/rear delt",
            Self::Biceps => "biceps",
            Self::Triceps => "triceps",
            Self::Calves => "calves",
            Self::Abs => "abs",
            Self::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// Ordered `(keywords, category)` rows; first row with any matching keyword wins.
/// Keywords are written in normalized form: lowercase, no separators.
const PATTERN_RULES: &[(&[&str], PatternCategory)] = &[
    (
        &["legcurl", "hamstringcurl", "legextension", "nordic"],
        PatternCategory::LegIsolation,
    ),
    (&["calf", "calves"], PatternCategory::Calves),
    (
        &[
            "crunch",
            "situp",
            "plank",
            "legraise",
            "kneeraise",
            "abwheel",
            "rollout",
            "pallof",
            "deadbug",
            "abs",
        ],
        PatternCategory::Abs,
    ),
    (
        &[
            "lateralraise",
            "sideraise",
            "reardelt",
            "reversefly",
            "facepull",
            "yraise",
        ],
        PatternCategory::LateralRearDelt,
    ),
    (
        &[
            "tricep",
            "pushdown",
            "pressdown",
            "skullcrusher",
            "overheadextension",
            "kickback",
        ],
        PatternCategory::Triceps,
    ),
    (&["curl", "bicep"], PatternCategory::Biceps),
    (
        &[
            "deadlift",
            "rdl",
            "goodmorning",
            "hipthrust",
            "glutebridge",
            "backextension",
            "hyperextension",
            "kettlebellswing",
            "hinge",
        ],
        PatternCategory::Hinge,
    ),
    (
        &["squat", "legpress", "lunge", "stepup", "hack", "pendulum"],
        PatternCategory::Squat,
    ),
    (
        &["row", "pulldown", "pullup", "chin", "pullover"],
        PatternCategory::Pull,
    ),
    (
        &["press", "bench", "pushup", "dip", "fly"],
        PatternCategory::Press,
    ),
];

/// Words that contain a keyword by accident (`narrow` holds `row`, `machine`
/// holds `chin`); stripped before matching
const NEUTRAL_TERMS: &[&str] = &["narrow", "machine", "throw"];

/// Lowercase and drop every separator so `inclineDumbbellPress`,
/// `incline_dumbbell_press`, and `Incline Dumbbell Press` all read the same
fn normalize(text: &str) -> String {
    let compact: String = text
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    NEUTRAL_TERMS
        .iter()
        .fold(compact, |text, term| text.replace(term, ""))
}

fn match_pattern(text: &str) -> Option<PatternCategory> {
    let normalized = normalize(text);
    PATTERN_RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| normalized.contains(keyword)))
        .map(|(_, category)| *category)
}

/// Pattern inference plus assembly of per-exercise progression settings
#[derive(Debug, Clone)]
pub struct Rulebook {
    clusters: ClusterConfigs,
}

impl Default for Rulebook {
    fn default() -> Self {
        Self::new(CoachingConfig::global().clusters.clone())
    }
}

impl Rulebook {
    /// Create a rulebook over explicit cluster settings
    #[must_use]
    pub const fn new(clusters: ClusterConfigs) -> Self {
        Self { clusters }
    }

    /// Infer a pattern from the exercise identity, then the display name
    #[must_use]
    pub fn infer_pattern(exercise_id: &str, display_name: Option<&str>) -> PatternCategory {
        match_pattern(exercise_id)
            .or_else(|| display_name.and_then(match_pattern))
            .unwrap_or(PatternCategory::Unknown)
    }

    /// Full progression policy for a pattern
    #[must_use]
    pub fn progression_config(
        &self,
        category: PatternCategory,
        spine_sensitive: bool,
    ) -> ProgressionConfig {
        let settings = self.clusters.settings(category.cluster(spine_sensitive));
        ProgressionConfig::from_cluster(settings, category.rep_range(spine_sensitive))
    }

    /// Infer the pattern and return it with its progression policy
    #[must_use]
    pub fn resolve(
        &self,
        exercise_id: &str,
        display_name: Option<&str>,
        spine_sensitive: bool,
    ) -> (PatternCategory, ProgressionConfig) {
        let category = Self::infer_pattern(exercise_id, display_name);
        (category, self.progression_config(category, spine_sensitive))
    }
}

// ABOUTME: Result types returned by the save pipeline: per-exercise outcomes and warnings
// ABOUTME: Store write failures surface here as recoverable warnings, never as errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use crate::errors::{AppError, ErrorCode};
use crate::intelligence::{DecisionRule, MesoPhase, PatternCategory};
use crate::models::{PrIndex, ProgressionDecision};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Pipeline stage a warning came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    /// Personal-record lookup or write
    PersonalRecord,
    /// Carry-forward into a future session
    Propagation,
    /// Writing the decision back onto the logged item
    ItemUpdate,
    /// Final store commit
    Save,
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PersonalRecord => write!(f, "personal_record"),
            Self::Propagation => write!(f, "propagation"),
            Self::ItemUpdate => write!(f, "item_update"),
            Self::Save => write!(f, "save"),
        }
    }
}

/// A recoverable persistence failure; re-running the same save is safe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachingWarning {
    /// Where the failure happened
    pub stage: PipelineStage,
    /// Error family
    pub code: ErrorCode,
    /// Human-readable description
    pub message: String,
    /// Whether retrying the save may succeed
    pub retryable: bool,
}

impl CoachingWarning {
    /// Wrap an error raised at a pipeline stage
    #[must_use]
    pub fn new(stage: PipelineStage, error: &AppError) -> Self {
        Self {
            stage,
            code: error.code,
            message: error.message.clone(),
            retryable: error.code.is_retryable(),
        }
    }
}

impl fmt::Display for CoachingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.stage, self.code, self.message)
    }
}

/// What happened when carrying a decision forward
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PropagationOutcome {
    /// The nearest future occurrence received the carried-forward plan
    Updated {
        /// Session that was written
        session_id: Uuid,
    },
    /// The nearest future occurrence already had a plan and was left alone
    PlanNotEmpty {
        /// Session that was inspected
        session_id: Uuid,
    },
    /// No later session contains this exercise
    NoFutureOccurrence,
    /// Decision carried no load (nothing logged yet)
    NoLoad,
    /// Source plan failed its consistency check
    InconsistentSource,
    /// A store call failed; see the outcome's warnings
    Failed,
}

impl PropagationOutcome {
    /// Whether a future plan was written
    #[must_use]
    pub const fn is_updated(&self) -> bool {
        matches!(self, Self::Updated { .. })
    }
}

/// Result of saving one logged exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseOutcome {
    /// Exercise identity
    pub exercise_id: String,
    /// Inferred movement pattern
    pub pattern: PatternCategory,
    /// Mesocycle phase of the session
    pub phase: MesoPhase,
    /// Cascade rule that fired
    pub rule: DecisionRule,
    /// The decision, unchanged by any later persistence failure
    pub decision: ProgressionDecision,
    /// Whether this session set a new personal record
    pub is_personal_record: bool,
    /// Record written for this session, if any
    pub personal_record: Option<PrIndex>,
    /// Carry-forward result
    pub propagation: PropagationOutcome,
    /// Recoverable persistence failures
    pub warnings: Vec<CoachingWarning>,
}

impl ExerciseOutcome {
    /// True when every store write succeeded
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Result of evaluating every item of one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionReport {
    /// Session evaluated
    pub session_id: Uuid,
    /// Per-item outcomes, in session order
    pub outcomes: Vec<ExerciseOutcome>,
    /// Failures not tied to a single item (the final commit)
    pub warnings: Vec<CoachingWarning>,
}

impl SessionReport {
    /// Number of new personal records
    #[must_use]
    pub fn personal_record_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_personal_record).count()
    }

    /// Every warning, item-level first
    pub fn all_warnings(&self) -> impl Iterator<Item = &CoachingWarning> {
        self.outcomes
            .iter()
            .flat_map(|o| o.warnings.iter())
            .chain(self.warnings.iter())
    }
}

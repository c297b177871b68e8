// ABOUTME: Per-exercise evaluation pipeline from logged arrays to a progression decision
// ABOUTME: Runs snapshot, classification, phase mapping, pattern inference, and the cascade
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use crate::classifier::WorkingSetClassifier;
use crate::config::CoachingConfig;
use crate::decision_engine::{DecisionEngine, DecisionInput, DecisionRule};
use crate::mesocycle::{MesoPhase, MesocycleMapper};
use crate::rulebook::{PatternCategory, Rulebook};
use crate::snapshot::SetSnapshotBuilder;
use ironlog_core::models::{ProgressionDecision, SessionItem, SessionReadiness, SetRecord};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Result of evaluating one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseEvaluation {
    /// Exercise identity
    pub exercise_id: String,
    /// Inferred movement pattern
    pub pattern: PatternCategory,
    /// Mesocycle phase of the session
    pub phase: MesoPhase,
    /// Cascade rule that produced the decision
    pub rule: DecisionRule,
    /// Next prescription
    pub decision: ProgressionDecision,
    /// Valid working sets, in logged order
    pub snapshots: Vec<SetRecord>,
}

/// Stateless evaluator composed from the pure pipeline stages
#[derive(Debug, Clone)]
pub struct ExerciseEvaluator {
    mapper: MesocycleMapper,
    rulebook: Rulebook,
    engine: DecisionEngine,
}

impl Default for ExerciseEvaluator {
    fn default() -> Self {
        Self::new(CoachingConfig::global())
    }
}

impl ExerciseEvaluator {
    /// Build an evaluator from a coaching configuration
    #[must_use]
    pub fn new(config: &CoachingConfig) -> Self {
        Self {
            mapper: MesocycleMapper::new(config.mesocycle),
            rulebook: Rulebook::new(config.clusters.clone()),
            engine: DecisionEngine::from_config(config),
        }
    }

    /// Phase mapper in use
    #[must_use]
    pub const fn mapper(&self) -> &MesocycleMapper {
        &self.mapper
    }

    /// Evaluate one session item for the given week
    #[must_use]
    pub fn evaluate_item(
        &self,
        item: &SessionItem,
        week_number: u32,
        readiness: Option<&SessionReadiness>,
    ) -> ExerciseEvaluation {
        let snapshots = SetSnapshotBuilder::from_log(&item.log);
        let classification = WorkingSetClassifier::classify(&snapshots);
        let phase = self.mapper.phase(week_number);
        let (pattern, config) = self.rulebook.resolve(
            &item.exercise_id,
            item.display_name.as_deref(),
            item.spine_sensitive,
        );

        let input = DecisionInput::from_plan(&classification, &config, phase, &item.plan)
            .with_readiness(readiness);
        let (rule, decision) = self.engine.evaluate_traced(&input);

        debug!(
            exercise_id = %item.exercise_id,
            pattern = %pattern,
            growth_sets = classification.growth.len(),
            diagnostic_sets = classification.diagnostic.len(),
            "Evaluated exercise"
        );

        ExerciseEvaluation {
            exercise_id: item.exercise_id.clone(),
            pattern,
            phase,
            rule,
            decision,
            snapshots,
        }
    }

    /// Evaluate several items in parallel, preserving input order
    #[must_use]
    pub fn evaluate_items(
        &self,
        items: &[SessionItem],
        week_number: u32,
        readiness: Option<&SessionReadiness>,
    ) -> Vec<ExerciseEvaluation> {
        items
            .par_iter()
            .map(|item| self.evaluate_item(item, week_number, readiness))
            .collect()
    }
}

// ABOUTME: Save pipeline for logged exercises: evaluate, record PRs, propagate, commit
// ABOUTME: Decisions always come back to the caller; store failures become warnings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use crate::errors::{AppError, AppResult};
use crate::intelligence::{CoachingConfig, ExerciseEvaluation, ExerciseEvaluator};
use crate::models::{ProgressionDecision, Session, SessionItem};
use crate::outcome::{CoachingWarning, ExerciseOutcome, PipelineStage, SessionReport};
use crate::plan_propagator::PlanPropagator;
use crate::pr_tracker::PrTracker;
use crate::store::TrainingStore;
use std::sync::Arc;
use tracing::{info, warn};

/// Runs snapshot, classification, decision, PR update, and propagation for
/// logged exercises against a shared store
#[derive(Clone)]
pub struct CoachingService {
    store: Arc<dyn TrainingStore>,
    evaluator: ExerciseEvaluator,
}

impl CoachingService {
    /// Create a service with an explicit configuration
    #[must_use]
    pub fn new(store: Arc<dyn TrainingStore>, config: &CoachingConfig) -> Self {
        Self {
            store,
            evaluator: ExerciseEvaluator::new(config),
        }
    }

    /// Create a service using the process-wide configuration
    #[must_use]
    pub fn with_global_config(store: Arc<dyn TrainingStore>) -> Self {
        Self::new(store, CoachingConfig::global())
    }

    /// The store this service writes through
    #[must_use]
    pub fn store(&self) -> &Arc<dyn TrainingStore> {
        &self.store
    }

    /// Save one logged exercise and return its decision
    ///
    /// The pipeline order is: decide, update the personal record, carry the
    /// plan forward, write the decision back onto the item, commit.
    ///
    /// # Errors
    ///
    /// Returns `ErrorCode::ResourceNotFound` if `exercise_id` is not an item
    /// of `session`. Store failures never produce an error; they are returned
    /// as warnings on the outcome.
    pub fn save_logged_exercise(
        &self,
        session: &Session,
        exercise_id: &str,
    ) -> AppResult<ExerciseOutcome> {
        let item = session.item(exercise_id).ok_or_else(|| {
            AppError::not_found(format!("exercise '{exercise_id}' in session {}", session.id))
        })?;

        let evaluation =
            self.evaluator
                .evaluate_item(item, session.week_number, session.readiness.as_ref());
        let mut outcome = self.persist(session, item, evaluation);
        outcome.warnings.extend(self.commit());
        Ok(outcome)
    }

    /// Evaluate every item of a session
    ///
    /// Decisions are computed in parallel; store updates run one item at a
    /// time in session order, followed by a single commit.
    #[must_use]
    pub fn evaluate_session(&self, session: &Session) -> SessionReport {
        let evaluations = self.evaluator.evaluate_items(
            &session.items,
            session.week_number,
            session.readiness.as_ref(),
        );

        let outcomes: Vec<ExerciseOutcome> = session
            .items
            .iter()
            .zip(evaluations)
            .map(|(item, evaluation)| self.persist(session, item, evaluation))
            .collect();
        let warnings: Vec<CoachingWarning> = self.commit().into_iter().collect();

        let report = SessionReport {
            session_id: session.id,
            outcomes,
            warnings,
        };
        info!(
            session_id = %session.id,
            exercises = report.outcomes.len(),
            personal_records = report.personal_record_count(),
            warnings = report.all_warnings().count(),
            "Session evaluated"
        );
        report
    }

    fn persist(
        &self,
        session: &Session,
        item: &SessionItem,
        evaluation: ExerciseEvaluation,
    ) -> ExerciseOutcome {
        let store = self.store.as_ref();
        let mut warnings = Vec::new();

        let pr = PrTracker::record_session(
            store,
            &item.exercise_id,
            &evaluation.snapshots,
            session.scheduled_at,
        );
        warnings.extend(pr.warning);

        let (propagation, propagation_warning) = PlanPropagator::propagate(
            store,
            session,
            &item.exercise_id,
            &item.plan,
            &evaluation.decision,
        );
        warnings.extend(propagation_warning);

        if let Err(e) = self.write_back(session, item, pr.is_record, &evaluation.decision) {
            warn!(
                session_id = %session.id,
                exercise_id = %item.exercise_id,
                error = %e,
                "Failed to record decision on the logged item"
            );
            warnings.push(CoachingWarning::new(PipelineStage::ItemUpdate, &e));
        }

        ExerciseOutcome {
            exercise_id: evaluation.exercise_id,
            pattern: evaluation.pattern,
            phase: evaluation.phase,
            rule: evaluation.rule,
            decision: evaluation.decision,
            is_personal_record: pr.is_record,
            personal_record: pr.record,
            propagation,
            warnings,
        }
    }

    /// Store the logged sets, the record flag, and the decision on the item
    fn write_back(
        &self,
        session: &Session,
        item: &SessionItem,
        is_record: bool,
        decision: &ProgressionDecision,
    ) -> AppResult<()> {
        let mut record = |stored: &mut SessionItem| {
            stored.log = item.log.clone();
            stored.is_personal_record = is_record;
            stored.decision = Some(decision.clone());
            true
        };
        self.store
            .modify_item(session.id, &item.exercise_id, &mut record)?;
        Ok(())
    }

    fn commit(&self) -> Option<CoachingWarning> {
        self.store.save().err().map(|e| {
            warn!(error = %e, "Store commit failed; the save can be retried");
            CoachingWarning::new(PipelineStage::Save, &AppError::from(e))
        })
    }
}

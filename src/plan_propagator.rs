// ABOUTME: Forward propagation of a progression decision into the next scheduled occurrence
// ABOUTME: Writes only into an empty future plan; user or program edits always win
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use crate::errors::AppError;
use crate::models::{ExercisePlan, ProgressionDecision, Session, SessionItem};
use crate::outcome::{CoachingWarning, PipelineStage, PropagationOutcome};
use crate::store::TrainingStore;
use tracing::{debug, info, warn};

/// Carry-forward of plans into future sessions
pub struct PlanPropagator;

impl PlanPropagator {
    /// Nearest session strictly later than `source` that contains `exercise_id`
    #[must_use]
    pub fn next_occurrence<'a>(
        sessions: &'a [Session],
        source: &Session,
        exercise_id: &str,
    ) -> Option<&'a Session> {
        sessions
            .iter()
            .filter(|s| s.id != source.id && s.scheduled_at > source.scheduled_at)
            .filter(|s| s.item(exercise_id).is_some())
            .min_by_key(|s| s.scheduled_at)
    }

    /// Write the carried-forward plan into the nearest future occurrence
    ///
    /// Only one future item is touched per call, and only when its plan is
    /// still empty. The emptiness check and the write happen inside a single
    /// `modify_item` call so concurrent propagations cannot interleave.
    pub fn propagate(
        store: &dyn TrainingStore,
        source: &Session,
        exercise_id: &str,
        source_plan: &ExercisePlan,
        decision: &ProgressionDecision,
    ) -> (PropagationOutcome, Option<CoachingWarning>) {
        if decision.next_load <= 0.0 {
            debug!(exercise_id = %exercise_id, "No load to carry forward");
            return (PropagationOutcome::NoLoad, None);
        }
        if !source_plan.is_consistent() {
            warn!(
                exercise_id = %exercise_id,
                session_id = %source.id,
                planned_reps = source_plan.planned_reps_by_set.len(),
                planned_loads = source_plan.planned_loads_by_set.len(),
                "Source plan has mismatched per-set arrays, not propagating"
            );
            return (PropagationOutcome::InconsistentSource, None);
        }

        let sessions = match store.fetch_sessions() {
            Ok(sessions) => sessions,
            Err(e) => {
                warn!(exercise_id = %exercise_id, error = %e, "Could not read future sessions");
                return (
                    PropagationOutcome::Failed,
                    Some(CoachingWarning::new(
                        PipelineStage::Propagation,
                        &AppError::from(e),
                    )),
                );
            }
        };

        let Some(target) = Self::next_occurrence(&sessions, source, exercise_id) else {
            debug!(exercise_id = %exercise_id, "No future occurrence to propagate into");
            return (PropagationOutcome::NoFutureOccurrence, None);
        };
        let target_id = target.id;

        let next_plan = source_plan.carried_forward(decision);
        let mut write_if_empty = |item: &mut SessionItem| {
            if item.plan.is_empty() {
                item.plan = next_plan.clone();
                true
            } else {
                false
            }
        };

        match store.modify_item(target_id, exercise_id, &mut write_if_empty) {
            Ok(true) => {
                info!(
                    exercise_id = %exercise_id,
                    from_session = %source.id,
                    to_session = %target_id,
                    next_load = next_plan.suggested_load,
                    next_sets = next_plan.target_sets,
                    "Propagated plan to next occurrence"
                );
                (
                    PropagationOutcome::Updated {
                        session_id: target_id,
                    },
                    None,
                )
            }
            Ok(false) => {
                debug!(
                    exercise_id = %exercise_id,
                    session_id = %target_id,
                    "Future plan already set, leaving it untouched"
                );
                (
                    PropagationOutcome::PlanNotEmpty {
                        session_id: target_id,
                    },
                    None,
                )
            }
            Err(e) => {
                warn!(
                    exercise_id = %exercise_id,
                    session_id = %target_id,
                    error = %e,
                    "Failed to write propagated plan"
                );
                (
                    PropagationOutcome::Failed,
                    Some(CoachingWarning::new(
                        PipelineStage::Propagation,
                        &AppError::from(e),
                    )),
                )
            }
        }
    }
}

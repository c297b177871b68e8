// ABOUTME: Personal-record bookkeeping keyed by exercise, based on best single-set volume
// ABOUTME: Updates only on strictly greater volume; the first logged set is a baseline record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use crate::errors::AppError;
use crate::models::{PrIndex, SetRecord};
use crate::outcome::{CoachingWarning, PipelineStage};
use crate::store::TrainingStore;
use chrono::{DateTime, Utc};
use tracing::{info, warn};

/// What the tracker did for one exercise-in-session
#[derive(Debug, Clone, PartialEq)]
pub struct PrUpdate {
    /// This session set a new record (including the first-ever baseline)
    pub is_record: bool,
    /// The record written, when `is_record` is set
    pub record: Option<PrIndex>,
    /// Store failure encountered along the way
    pub warning: Option<CoachingWarning>,
}

impl PrUpdate {
    const fn unchanged(warning: Option<CoachingWarning>) -> Self {
        Self {
            is_record: false,
            record: None,
            warning,
        }
    }
}

/// Personal-record tracker
pub struct PrTracker;

impl PrTracker {
    /// Heaviest single-set volume among working sets; ties keep the earliest set
    #[must_use]
    pub fn best_set(sets: &[SetRecord]) -> Option<SetRecord> {
        sets.iter()
            .filter(|set| set.is_working_set())
            .fold(None, |best: Option<SetRecord>, set| match best {
                Some(current) if current.volume() >= set.volume() => Some(current),
                _ => Some(*set),
            })
    }

    #[allow(clippy::float_cmp)] // Both volumes come from the same stored set
    fn is_same_record(existing: &PrIndex, volume: f64, performed_at: DateTime<Utc>) -> bool {
        existing.best_date == performed_at && existing.best_set_volume == volume
    }

    /// Compare this session's best set against the stored record and update it
    ///
    /// A failed read skips the update and carries a warning; the stored
    /// record only ever moves to a strictly greater volume. A failed write
    /// still reports the record and carries a warning.
    pub fn record_session(
        store: &dyn TrainingStore,
        exercise_id: &str,
        sets: &[SetRecord],
        performed_at: DateTime<Utc>,
    ) -> PrUpdate {
        let Some(best) = Self::best_set(sets) else {
            return PrUpdate::unchanged(None);
        };
        let volume = best.volume();
        if volume <= 0.0 {
            return PrUpdate::unchanged(None);
        }

        let existing = match store.fetch_pr(exercise_id) {
            Ok(existing) => existing,
            Err(e) => {
                // Without the stored record there is nothing to compare against
                warn!(
                    exercise_id = %exercise_id,
                    error = %e,
                    "Personal record lookup failed, leaving the record untouched"
                );
                return PrUpdate::unchanged(Some(CoachingWarning::new(
                    PipelineStage::PersonalRecord,
                    &AppError::from(e),
                )));
            }
        };

        if let Some(existing) = &existing {
            if Self::is_same_record(existing, volume, performed_at) {
                // Re-saving the session that set the record
                return PrUpdate {
                    is_record: true,
                    record: Some(existing.clone()),
                    warning: None,
                };
            }
            if volume <= existing.best_set_volume {
                return PrUpdate::unchanged(None);
            }
        }

        let record = PrIndex {
            exercise_id: exercise_id.to_owned(),
            best_set_volume: volume,
            best_load: best.load,
            best_reps: best.reps,
            best_date: performed_at,
        };

        let warning = match store.upsert_pr(record.clone()) {
            Ok(()) => {
                info!(
                    exercise_id = %exercise_id,
                    volume,
                    load = best.load,
                    reps = best.reps,
                    previous = existing.as_ref().map(|pr| pr.best_set_volume),
                    "New personal record"
                );
                None
            }
            Err(e) => {
                warn!(exercise_id = %exercise_id, error = %e, "Failed to write personal record");
                Some(CoachingWarning::new(
                    PipelineStage::PersonalRecord,
                    &AppError::from(e),
                ))
            }
        };

        PrUpdate {
            is_record: true,
            record: Some(record),
            warning,
        }
    }
}

// ABOUTME: Store collaborator abstraction used by the PR tracker and plan propagator
// ABOUTME: Synchronous keyed record store with date-ordered sessions and per-exercise PRs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! # Training Store
//!
//! The coaching pipeline reads and writes durable state only through
//! [`TrainingStore`]. Every call may fail; callers degrade instead of
//! aborting (a failed read is treated as "no data", a failed write becomes a
//! warning on the returned outcome).

/// In-memory store backed by a lock-guarded session list and a concurrent PR map
pub mod memory;

pub use memory::{InMemoryStore, StoreSnapshot};

use crate::errors::StoreResult;
use crate::models::{PrIndex, Session, SessionItem};
use uuid::Uuid;

/// Edit applied to a single stored item; returns whether it changed anything
pub type ItemEdit<'a> = &'a mut dyn FnMut(&mut SessionItem) -> bool;

/// Durable state the coaching pipeline depends on
///
/// Implementations must be safe to share across threads. `modify_item` must
/// run the read-check-write of its edit atomically with respect to other
/// `modify_item` calls on the same item.
pub trait TrainingStore: Send + Sync {
    /// All sessions, ordered by `scheduled_at` ascending
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the backing store cannot be read
    fn fetch_sessions(&self) -> StoreResult<Vec<Session>>;

    /// Stored personal record for an exercise, if any
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the backing store cannot be read
    fn fetch_pr(&self, exercise_id: &str) -> StoreResult<Option<PrIndex>>;

    /// Insert or replace the personal record for `pr.exercise_id`
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the write fails
    fn upsert_pr(&self, pr: PrIndex) -> StoreResult<()>;

    /// Apply `edit` to one item of one session under the store's write lock
    ///
    /// Returns the edit's own verdict on whether anything changed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if the session or item does not exist,
    /// or `StoreError::Unavailable` if the write fails
    fn modify_item(
        &self,
        session_id: Uuid,
        exercise_id: &str,
        edit: ItemEdit<'_>,
    ) -> StoreResult<bool>;

    /// Commit pending writes
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the commit fails
    fn save(&self) -> StoreResult<()>;
}

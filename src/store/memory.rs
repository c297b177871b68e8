// ABOUTME: In-memory training store for tests, the CLI, and embedding callers
// ABOUTME: Sessions live behind an RwLock kept in date order; PRs live in a DashMap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use super::{ItemEdit, TrainingStore};
use crate::errors::{StoreError, StoreResult};
use crate::models::{PrIndex, Session};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};
use uuid::Uuid;

/// Serializable contents of a store, used for fixtures and dumps
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    /// Scheduled sessions in any order
    #[serde(default)]
    pub sessions: Vec<Session>,
    /// Known personal records
    #[serde(default)]
    pub personal_records: Vec<PrIndex>,
}

/// Thread-safe in-memory store
#[derive(Debug, Default)]
pub struct InMemoryStore {
    sessions: RwLock<Vec<Session>>,
    records: DashMap<String, PrIndex>,
    commits: AtomicUsize,
}

fn poisoned<T>(operation: &'static str) -> impl FnOnce(PoisonError<T>) -> StoreError {
    move |_| StoreError::unavailable(operation, "session lock poisoned")
}

impl InMemoryStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded from a snapshot
    #[must_use]
    pub fn from_snapshot(snapshot: StoreSnapshot) -> Self {
        let mut sessions = snapshot.sessions;
        sessions.sort_by_key(|s| s.scheduled_at);
        let records = snapshot
            .personal_records
            .into_iter()
            .map(|pr| (pr.exercise_id.clone(), pr))
            .collect();
        Self {
            sessions: RwLock::new(sessions),
            records,
            commits: AtomicUsize::new(0),
        }
    }

    /// Insert a session, keeping date order
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Conflict` if a session with the same id exists
    pub fn insert_session(&self, session: Session) -> StoreResult<()> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(poisoned("insert_session"))?;
        if sessions.iter().any(|s| s.id == session.id) {
            return Err(StoreError::Conflict {
                key: session.id.to_string(),
            });
        }
        let position = sessions.partition_point(|s| s.scheduled_at <= session.scheduled_at);
        sessions.insert(position, session);
        Ok(())
    }

    /// Look up one session by id
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no such session exists
    pub fn session(&self, session_id: Uuid) -> StoreResult<Session> {
        let sessions = self.sessions.read().map_err(poisoned("session"))?;
        sessions
            .iter()
            .find(|s| s.id == session_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                entity: "session",
                key: session_id.to_string(),
            })
    }

    /// Copy the current contents out
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Unavailable` if the session lock is poisoned
    pub fn snapshot(&self) -> StoreResult<StoreSnapshot> {
        let sessions = self.sessions.read().map_err(poisoned("snapshot"))?.clone();
        let mut personal_records: Vec<PrIndex> =
            self.records.iter().map(|entry| entry.value().clone()).collect();
        personal_records.sort_by(|a, b| a.exercise_id.cmp(&b.exercise_id));
        Ok(StoreSnapshot {
            sessions,
            personal_records,
        })
    }

    /// Number of successful `save` calls
    #[must_use]
    pub fn commit_count(&self) -> usize {
        self.commits.load(Ordering::Relaxed)
    }
}

impl TrainingStore for InMemoryStore {
    fn fetch_sessions(&self) -> StoreResult<Vec<Session>> {
        Ok(self.sessions.read().map_err(poisoned("fetch_sessions"))?.clone())
    }

    fn fetch_pr(&self, exercise_id: &str) -> StoreResult<Option<PrIndex>> {
        Ok(self.records.get(exercise_id).map(|entry| entry.value().clone()))
    }

    fn upsert_pr(&self, pr: PrIndex) -> StoreResult<()> {
        self.records.insert(pr.exercise_id.clone(), pr);
        Ok(())
    }

    fn modify_item(
        &self,
        session_id: Uuid,
        exercise_id: &str,
        edit: ItemEdit<'_>,
    ) -> StoreResult<bool> {
        let mut sessions = self.sessions.write().map_err(poisoned("modify_item"))?;
        let session = sessions
            .iter_mut()
            .find(|s| s.id == session_id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "session",
                key: session_id.to_string(),
            })?;
        let item = session
            .item_mut(exercise_id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "session item",
                key: format!("{session_id}/{exercise_id}"),
            })?;
        Ok(edit(item))
    }

    fn save(&self) -> StoreResult<()> {
        self.commits.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

// ABOUTME: Error types returned by the persistent store collaborator
// ABOUTME: Distinguishes unavailable backends, missing records, write conflicts, and codec failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use thiserror::Error;

/// Failures a store implementation may report.
///
/// The coaching pipeline never aborts on these: reads degrade to "absent"
/// or skip the update that depended on them,
/// and writes are surfaced to the caller as retryable warnings.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend could not serve the request
    #[error("store unavailable during {operation}: {reason}")]
    Unavailable {
        /// Store operation that failed (e.g. `fetch_sessions`)
        operation: &'static str,
        /// Backend-specific reason
        reason: String,
    },

    /// Requested record does not exist
    #[error("{entity} '{key}' not found in store")]
    NotFound {
        /// Kind of record (session, item)
        entity: &'static str,
        /// Lookup key
        key: String,
    },

    /// Concurrent modification prevented the write
    #[error("write conflict on {key}")]
    Conflict {
        /// Record key that conflicted
        key: String,
    },

    /// Record could not be encoded or decoded
    #[error("store serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// Convenience constructor for backend outages
    #[must_use]
    pub fn unavailable(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            operation,
            reason: reason.into(),
        }
    }
}

/// Result alias for store collaborator calls
pub type StoreResult<T> = Result<T, StoreError>;

// ABOUTME: Main library entry point for the Ironlog strength coaching engine
// ABOUTME: Wires the pure progression engine to a store for PR tracking and plan carry-forward
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

#![deny(unsafe_code)]

//! # Ironlog
//!
//! Decides, for every exercise a lifter logs, whether next time's load and set
//! count should go up, hold, or come down, and explains why.
//!
//! ## Architecture
//!
//! - **`ironlog-core`**: data model, error types, constants
//! - **`ironlog-intelligence`**: the I/O-free pipeline (snapshots, growth and
//!   diagnostic sets, mesocycle phases, pattern rulebook, decision cascade)
//! - **this crate**: the store abstraction, personal-record tracking, plan
//!   carry-forward into future sessions, and the save pipeline tying them
//!   together
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use ironlog::errors::AppResult;
//! use ironlog::intelligence::CoachingConfig;
//! use ironlog::services::CoachingService;
//! use ironlog::store::{InMemoryStore, StoreSnapshot};
//!
//! fn main() -> AppResult<()> {
//!     let fixture = std::fs::read_to_string("program.json")
//!         .map_err(|e| ironlog::errors::AppError::internal(e.to_string()))?;
//!     let snapshot: StoreSnapshot = serde_json::from_str(&fixture)?;
//!     let session = snapshot.sessions[0].clone();
//!
//!     let store = Arc::new(InMemoryStore::from_snapshot(snapshot));
//!     let service = CoachingService::new(store, &CoachingConfig::default());
//!     let outcome = service.save_logged_exercise(&session, "barbell_bench_press")?;
//!     println!("{}: {}", outcome.decision.action, outcome.decision.next_load);
//!     Ok(())
//! }
//! ```

/// Error types shared across the workspace
pub use ironlog_core::errors;

/// Training data model
pub use ironlog_core::models;

/// Service names, environment keys, and limits
pub use ironlog_core::constants;

/// Pure progression engine
pub use ironlog_intelligence as intelligence;

/// Structured logging setup
pub mod logging;

/// Outcome and warning types returned by the save pipeline
pub mod outcome;

/// Store collaborator abstraction and in-memory implementation
pub mod store;

/// Personal-record bookkeeping
pub mod pr_tracker;

/// Carry-forward of decisions into future sessions
pub mod plan_propagator;

/// Save pipeline service
pub mod services;

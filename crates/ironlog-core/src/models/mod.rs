// ABOUTME: Core data models for logged strength training and coaching outcomes
// ABOUTME: Re-exports set records, plans, logs, sessions, decisions, and personal records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! # Data Models
//!
//! Plain serde-friendly values shared by the coaching engine, the store
//! collaborator, and any display layer. Nothing in here performs I/O.

/// Progression decisions and their action labels
pub mod decision;
/// Planned targets and logged outcomes for one exercise in a session
pub mod exercise;
/// Personal record bookkeeping per exercise
pub mod personal_record;
/// Scheduled sessions and the exercise items inside them
pub mod session;
/// A single validated working set
pub mod set_record;

pub use decision::{ProgressionAction, ProgressionDecision};
pub use exercise::{ExerciseLog, ExercisePlan};
pub use personal_record::PrIndex;
pub use session::{Session, SessionItem, SessionReadiness};
pub use set_record::SetRecord;

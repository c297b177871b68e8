// ABOUTME: Core types and constants for the Ironlog strength coaching engine
// ABOUTME: Foundation crate with error handling, training data models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

#![deny(unsafe_code)]

//! # Ironlog Core
//!
//! Foundation crate providing shared types and constants for the Ironlog
//! coaching engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `StoreError`
//! - **constants**: Service names and environment variable keys
//! - **models**: Set records, plans, logs, sessions, decisions, and personal records

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core training data models (sets, plans, sessions, decisions, PRs)
pub mod models;

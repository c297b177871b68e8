// ABOUTME: Domain service layer orchestrating the pure engine and the store collaborator
// ABOUTME: Hosts the save pipeline used by the CLI and embedding callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! Domain service layer
//!
//! Services combine the I/O-free intelligence crate with the store so that
//! every caller runs the same pipeline in the same order.

/// Save pipeline: evaluate, update personal records, carry plans forward
pub mod coaching;

pub use coaching::CoachingService;

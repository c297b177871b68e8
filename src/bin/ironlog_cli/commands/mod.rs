// ABOUTME: Command implementations for the Ironlog CLI
// ABOUTME: Each command returns a JSON value that main prints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

pub mod evaluate;
pub mod inspect;

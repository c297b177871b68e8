// ABOUTME: Working-set classifier splitting sets into growth and diagnostic roles
// ABOUTME: First three working sets drive progression; later sets only inform volume tolerance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! "Three to grow, one to know": the first up-to-three working sets decide
//! progression, anything after them is a diagnostic probe.

use ironlog_core::constants::limits::GROWTH_SET_LIMIT;
use ironlog_core::models::SetRecord;
use serde::{Deserialize, Serialize};

/// Working sets partitioned by role, original order preserved
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkingSetClassification {
    /// First `min(3, n)` sets
    pub growth: Vec<SetRecord>,
    /// Sets from the fourth onward
    pub diagnostic: Vec<SetRecord>,
}

impl WorkingSetClassification {
    /// No working sets at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.growth.is_empty()
    }

    /// Total working sets
    #[must_use]
    pub fn len(&self) -> usize {
        self.growth.len() + self.diagnostic.len()
    }

    /// Growth followed by diagnostic sets (the original order)
    #[must_use]
    pub fn all_sets(&self) -> Vec<SetRecord> {
        self.growth
            .iter()
            .chain(&self.diagnostic)
            .copied()
            .collect()
    }
}

/// Partitions working sets into growth and diagnostic groups
pub struct WorkingSetClassifier;

impl WorkingSetClassifier {
    /// Split valid working sets by position
    #[must_use]
    pub fn classify(sets: &[SetRecord]) -> WorkingSetClassification {
        let split = sets.len().min(GROWTH_SET_LIMIT);
        let (growth, diagnostic) = sets.split_at(split);
        WorkingSetClassification {
            growth: growth.to_vec(),
            diagnostic: diagnostic.to_vec(),
        }
    }
}

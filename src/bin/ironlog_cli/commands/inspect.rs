// ABOUTME: `phase` and `pattern` commands exposing the mesocycle mapper and the rulebook
// ABOUTME: Read-only views that never touch a store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use ironlog::intelligence::{CoachingConfig, MesocycleMapper, Rulebook};
use serde_json::{json, Value};

pub fn phase(week: u32, base_rir: f64) -> Value {
    let config = CoachingConfig::global();
    let phase = MesocycleMapper::new(config.mesocycle).phase(week);
    json!({
        "week": week,
        "phase": phase,
        "base_rir": base_rir,
        "effective_target_rir": phase.effective_target_rir(base_rir),
    })
}

pub fn pattern(exercise_id: &str, display_name: Option<&str>, spine_sensitive: bool) -> Value {
    let rulebook = Rulebook::new(CoachingConfig::global().clusters.clone());
    let (category, config) = rulebook.resolve(exercise_id, display_name, spine_sensitive);
    json!({
        "exercise_id": exercise_id,
        "category": category,
        "cluster": category.cluster(spine_sensitive),
        "progression": config,
    })
}

// ABOUTME: `evaluate` command: load a program fixture, run the save pipeline, report outcomes
// ABOUTME: Optionally writes the updated fixture (decisions, PRs, propagated plans) back out
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use anyhow::{anyhow, Result};
use ironlog::intelligence::CoachingConfig;
use ironlog::services::CoachingService;
use ironlog::store::{InMemoryStore, StoreSnapshot};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

pub fn run(
    program: &Path,
    session_id: Uuid,
    exercise: Option<&str>,
    output: Option<&Path>,
) -> Result<Value> {
    let raw = fs::read_to_string(program)
        .map_err(|e| anyhow!("cannot read program {}: {e}", program.display()))?;
    let snapshot: StoreSnapshot = serde_json::from_str(&raw)
        .map_err(|e| anyhow!("invalid program {}: {e}", program.display()))?;

    let config = CoachingConfig::load()?;
    let store = Arc::new(InMemoryStore::from_snapshot(snapshot));
    let service = CoachingService::new(store.clone(), &config);
    let session = store.session(session_id)?;

    let result = if let Some(exercise_id) = exercise {
        let outcome = service.save_logged_exercise(&session, exercise_id)?;
        serde_json::to_value(outcome)?
    } else {
        let report = service.evaluate_session(&session);
        serde_json::to_value(report)?
    };

    if let Some(path) = output {
        let updated = serde_json::to_string_pretty(&store.snapshot()?)?;
        fs::write(path, updated)
            .map_err(|e| anyhow!("cannot write program {}: {e}", path.display()))?;
        info!(path = %path.display(), "Wrote updated program");
    }

    Ok(json!({ "session_id": session_id, "result": result }))
}

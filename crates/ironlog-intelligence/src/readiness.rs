// ABOUTME: Session readiness assessment producing advisory notes on load increases
// ABOUTME: Readiness annotates decisions but never changes action, load, or sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

use crate::config::ReadinessConfig;
use ironlog_core::models::SessionReadiness;

/// Reasons readiness was judged poor, in a stable order
#[must_use]
pub fn poor_readiness_reasons(readiness: &SessionReadiness, config: &ReadinessConfig) -> Vec<String> {
    let mut reasons = Vec::new();
    if let Some(hours) = readiness.sleep_hours {
        if hours < config.min_sleep_hours {
            reasons.push(format!("{hours:.1}h sleep"));
        }
    }
    if let Some(soreness) = readiness.soreness {
        if soreness >= config.max_soreness {
            reasons.push(format!("soreness {soreness}/5"));
        }
    }
    if let Some(energy) = readiness.energy {
        if energy <= config.min_energy {
            reasons.push(format!("energy {energy}/5"));
        }
    }
    reasons
}

/// Advisory note for an increase made on a poor-readiness day, if any
#[must_use]
pub fn increase_advisory(readiness: &SessionReadiness, config: &ReadinessConfig) -> Option<String> {
    let reasons = poor_readiness_reasons(readiness, config);
    if reasons.is_empty() {
        return None;
    }
    Some(format!(
        "Readiness was low today ({}); if the new load feels heavy next time, repeat it before adding more.",
        reasons.join(", ")
    ))
}

// ABOUTME: Progression decision cascade for one exercise-in-session
// ABOUTME: Ordered first-match rules turn growth-set performance into next load, sets, and notes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Ironlog Contributors

//! # Decision Cascade
//!
//! Rules are evaluated in a fixed order and the first one that applies wins:
//!
//! | # | Rule | Action |
//! |---|------|--------|
//! | 1 | no growth sets | hold, load 0 |
//! | 2 | deload phase | deload |
//! | 3 | low-back / stability exercise | reduce or hold |
//! | 4 | opened heavy, finished light (re-baseline) | reduce to lightest load |
//! | 5 | failure plus a rep crash | hold |
//! | 6 | best reps under target | hold |
//! | 7 | harder than planned (RIR or rest-pause) | hold |
//! | 8 | clean top of range on all growth sets | increase (maybe +1 set) |
//! | 9 | comfortable overperformance | increase |
//! | 10 | on target | hold |
//! | 11 | anything else | hold |
//!
//! The engine is a pure function of its input: the same snapshots, config,
//! and phase always produce the same decision.

use crate::classifier::WorkingSetClassification;
use crate::coaching_constants::load_steps::{
    HEAVY_LOAD_THRESHOLD, HEAVY_STEP, LIGHT_STEP, MEDIUM_LOAD_THRESHOLD, MEDIUM_STEP,
};
use crate::config::{CoachingConfig, DecisionThresholds, ProgressionConfig, ReadinessConfig};
use crate::mesocycle::MesoPhase;
use crate::readiness::increase_advisory;
use crate::set_metrics::SetGroupStats;
use ironlog_core::constants::limits::GROWTH_SET_LIMIT;
use ironlog_core::models::{ExercisePlan, ProgressionAction, ProgressionDecision, SessionReadiness};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Load increment for a working load, quantized to realistic equipment jumps
#[must_use]
pub fn load_step(load: f64) -> f64 {
    if load >= HEAVY_LOAD_THRESHOLD {
        HEAVY_STEP
    } else if load >= MEDIUM_LOAD_THRESHOLD {
        MEDIUM_STEP
    } else {
        LIGHT_STEP
    }
}

/// Which rule of the cascade produced a decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionRule {
    /// No growth sets logged
    NoData,
    /// Deload phase override
    Deload,
    /// Low-back / stability override
    LowBackStability,
    /// Opened heavy and finished light
    Rebaseline,
    /// Reached failure and reps crashed
    FailureCrash,
    /// Best reps below target
    UnderTarget,
    /// RIR below target or repeated rest-pause
    HarderThanPlanned,
    /// Every growth set hit the top of the range cleanly
    CleanTopOfRange,
    /// Well past the top of the range with reps to spare
    Overperformance,
    /// On target, repeat before increasing
    OnTarget,
    /// Nothing else applied
    CatchAll,
}

/// Everything the cascade needs for one exercise
#[derive(Debug, Clone, Copy)]
pub struct DecisionInput<'a> {
    /// Working sets split into growth and diagnostic groups
    pub sets: &'a WorkingSetClassification,
    /// Progression policy for the exercise
    pub config: &'a ProgressionConfig,
    /// Mesocycle phase of the session
    pub phase: MesoPhase,
    /// Highest planned per-set reps (or target reps)
    pub planned_top_reps: u32,
    /// Planned target reps
    pub target_reps: u32,
    /// Planned RIR target; the config's base RIR applies when absent
    pub target_rir: Option<f64>,
    /// Working sets currently prescribed
    pub current_sets: u32,
    /// Session readiness, used only for advisory notes
    pub readiness: Option<&'a SessionReadiness>,
}

impl<'a> DecisionInput<'a> {
    /// Derive targets from a plan.
    ///
    /// Target reps fall back to the bottom of the rep range when the plan has
    /// none, and the current set count falls back to the number of working
    /// sets logged.
    #[must_use]
    pub fn from_plan(
        sets: &'a WorkingSetClassification,
        config: &'a ProgressionConfig,
        phase: MesoPhase,
        plan: &ExercisePlan,
    ) -> Self {
        let target_reps = if plan.target_reps > 0 {
            plan.target_reps
        } else {
            config.rep_range.min
        };
        let planned_top_reps = match plan.planned_top_reps() {
            0 => target_reps,
            top => top,
        };
        let current_sets = if plan.target_sets > 0 {
            plan.target_sets
        } else {
            u32::try_from(sets.len()).unwrap_or(u32::MAX)
        };

        Self {
            sets,
            config,
            phase,
            planned_top_reps,
            target_reps,
            target_rir: plan.target_rir,
            current_sets,
            readiness: None,
        }
    }

    /// Attach session readiness
    #[must_use]
    pub const fn with_readiness(mut self, readiness: Option<&'a SessionReadiness>) -> Self {
        self.readiness = readiness;
        self
    }

    /// RIR target before the phase adjustment
    #[must_use]
    pub fn base_target_rir(&self) -> f64 {
        self.target_rir
            .filter(|rir| rir.is_finite() && *rir >= 0.0)
            .unwrap_or(self.config.base_target_rir)
    }

    /// RIR target after the phase adjustment
    #[must_use]
    pub fn effective_target_rir(&self) -> f64 {
        self.phase.effective_target_rir(self.base_target_rir())
    }
}

/// Pre-computed view of one evaluation shared by every rule
struct RuleContext<'a> {
    input: DecisionInput<'a>,
    growth: SetGroupStats,
    all: SetGroupStats,
    diagnostic: SetGroupStats,
    effective_rir: f64,
    last_growth_load: f64,
    hold_sets: u32,
}

/// A rule's outcome before notes are finalized
struct Verdict {
    rule: DecisionRule,
    action: ProgressionAction,
    next_load: f64,
    next_sets: u32,
    notes: Vec<String>,
}

impl Verdict {
    fn hold(rule: DecisionRule, ctx: &RuleContext<'_>, note: String) -> Self {
        Self {
            rule,
            action: ProgressionAction::HoldLoad,
            next_load: ctx.last_growth_load,
            next_sets: ctx.hold_sets,
            notes: vec![note],
        }
    }
}

/// Progression decision engine
#[derive(Debug, Clone)]
pub struct DecisionEngine {
    thresholds: DecisionThresholds,
    readiness: ReadinessConfig,
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self::from_config(CoachingConfig::global())
    }
}

impl DecisionEngine {
    /// Create an engine with explicit thresholds
    #[must_use]
    pub const fn new(thresholds: DecisionThresholds, readiness: ReadinessConfig) -> Self {
        Self {
            thresholds,
            readiness,
        }
    }

    /// Create an engine from a coaching configuration
    #[must_use]
    pub fn from_config(config: &CoachingConfig) -> Self {
        Self::new(config.thresholds.clone(), config.readiness.clone())
    }

    /// Thresholds in use
    #[must_use]
    pub const fn thresholds(&self) -> &DecisionThresholds {
        &self.thresholds
    }

    /// Decide the next prescription for one exercise
    #[must_use]
    pub fn evaluate(&self, input: &DecisionInput<'_>) -> ProgressionDecision {
        self.evaluate_traced(input).1
    }

    /// Decide the next prescription and report which rule fired
    #[must_use]
    pub fn evaluate_traced(
        &self,
        input: &DecisionInput<'_>,
    ) -> (DecisionRule, ProgressionDecision) {
        let Some(last_growth) = input.sets.growth.last() else {
            let decision = Self::no_data(input);
            debug!(rule = ?DecisionRule::NoData, "No growth sets logged");
            return (DecisionRule::NoData, decision);
        };

        let all_sets = input.sets.all_sets();
        let ctx = RuleContext {
            input: *input,
            growth: SetGroupStats::from_sets(&input.sets.growth),
            all: SetGroupStats::from_sets(&all_sets),
            diagnostic: SetGroupStats::from_sets(&input.sets.diagnostic),
            effective_rir: input.effective_target_rir(),
            last_growth_load: last_growth.load,
            hold_sets: input.config.clamp_sets(input.current_sets),
        };

        let mut verdict = self.cascade(&ctx);

        if verdict.rule != DecisionRule::Deload {
            verdict.notes.extend(self.diagnostic_note(&ctx));
        }
        if verdict.action == ProgressionAction::IncreaseLoad {
            if let Some(readiness) = input.readiness {
                verdict
                    .notes
                    .extend(increase_advisory(readiness, &self.readiness));
            }
        }

        let decision = ProgressionDecision::new(
            verdict.action,
            verdict.next_load,
            verdict.next_sets,
            verdict.notes,
        );
        debug!(
            rule = ?verdict.rule,
            phase = %input.phase,
            action = %decision.action,
            next_load = decision.next_load,
            next_sets = decision.next_sets,
            "Progression decision"
        );
        (verdict.rule, decision)
    }

    fn cascade(&self, ctx: &RuleContext<'_>) -> Verdict {
        Self::deload(ctx)
            .or_else(|| self.low_back_stability(ctx))
            .or_else(|| self.rebaseline(ctx))
            .or_else(|| self.failure_crash(ctx))
            .or_else(|| Self::under_target(ctx))
            .or_else(|| self.harder_than_planned(ctx))
            .or_else(|| self.clean_top_of_range(ctx))
            .or_else(|| self.overperformance(ctx))
            .or_else(|| self.on_target(ctx))
            .unwrap_or_else(|| Self::catch_all(ctx))
    }

    fn no_data(input: &DecisionInput<'_>) -> ProgressionDecision {
        let range = input.config.rep_range;
        ProgressionDecision::new(
            ProgressionAction::HoldLoad,
            0.0,
            input.config.clamp_sets(input.current_sets),
            vec![format!(
                "No prior data: pick a starting load you can lift for {}-{} reps with about {:.1} reps in reserve.",
                range.min,
                range.max,
                input.effective_target_rir()
            )],
        )
    }

    fn rir_within_target(&self, ctx: &RuleContext<'_>) -> bool {
        ctx.growth
            .avg_rir
            .is_some_and(|avg| (avg - ctx.effective_rir).abs() <= self.thresholds.rir_tolerance)
    }

    fn rir_below_target(&self, ctx: &RuleContext<'_>) -> bool {
        ctx.growth
            .avg_rir
            .is_some_and(|avg| avg < ctx.effective_rir - self.thresholds.rir_tolerance)
    }

    fn deload(ctx: &RuleContext<'_>) -> Option<Verdict> {
        if ctx.input.phase != MesoPhase::Deload {
            return None;
        }
        let config = ctx.input.config;
        let next_load = (ctx.last_growth_load - config.secondary_load_increment).max(0.0);
        let next_sets = config.clamp_sets(ctx.input.current_sets.saturating_sub(1));
        Some(Verdict {
            rule: DecisionRule::Deload,
            action: ProgressionAction::Deload,
            next_load,
            next_sets,
            notes: vec![format!(
                "Deload week: use {next_load:.1} for {next_sets} sets and stop around {:.1} reps in reserve.",
                ctx.effective_rir
            )],
        })
    }

    fn low_back_stability(&self, ctx: &RuleContext<'_>) -> Option<Verdict> {
        let config = ctx.input.config;
        if !config.is_low_back_or_stability {
            return None;
        }

        let struggled =
            self.rir_below_target(ctx) || ctx.growth.best_reps < config.rep_range.min;
        if !struggled {
            return Some(Verdict::hold(
                DecisionRule::LowBackStability,
                ctx,
                "Stability work: hold the load and keep every rep controlled.".to_owned(),
            ));
        }
        if !config.allow_load_decrease {
            return Some(Verdict::hold(
                DecisionRule::LowBackStability,
                ctx,
                "Stability work felt hard: hold the load and focus on bracing before adding anything."
                    .to_owned(),
            ));
        }

        let next_load = (ctx.last_growth_load - config.primary_load_increment).max(0.0);
        Some(Verdict {
            rule: DecisionRule::LowBackStability,
            action: ProgressionAction::ReduceLoad,
            next_load,
            next_sets: ctx.hold_sets,
            notes: vec![format!(
                "Stability work felt harder than it should: drop to {next_load:.1} and rebuild clean reps."
            )],
        })
    }

    #[allow(clippy::float_cmp)] // Comparing logged values against their own extremes
    fn rebaseline(&self, ctx: &RuleContext<'_>) -> Option<Verdict> {
        let all = &ctx.all;
        let drop = all.load_drop_ratio();
        let opened_heavy = all.first_load == all.max_load;
        let finished_light = all.last_load == all.min_load;
        if all.count < 2 || drop < self.thresholds.rebaseline_drop_ratio || !opened_heavy || !finished_light {
            return None;
        }

        Some(Verdict {
            rule: DecisionRule::Rebaseline,
            action: ProgressionAction::ReduceLoad,
            next_load: all.min_load,
            next_sets: ctx.hold_sets,
            notes: vec![format!(
                "Opened at {:.1} and finished at {:.1} ({:.0}% lighter): re-baselining at {:.1}. This is a reset to the load you could own, not a penalty.",
                all.max_load,
                all.min_load,
                drop * 100.0,
                all.min_load
            )],
        })
    }

    fn failure_crash(&self, ctx: &RuleContext<'_>) -> Option<Verdict> {
        let hit_failure = ctx.growth.min_rir.is_some_and(|rir| rir <= 0.0);
        if !hit_failure || ctx.growth.rep_drop() < self.thresholds.fatigue_rep_drop {
            return None;
        }
        Some(Verdict::hold(
            DecisionRule::FailureCrash,
            ctx,
            format!(
                "Went to failure and reps fell from {} to {}: hold {:.1} and stop a rep or two earlier.",
                ctx.growth.first_reps, ctx.growth.last_reps, ctx.last_growth_load
            ),
        ))
    }

    fn under_target(ctx: &RuleContext<'_>) -> Option<Verdict> {
        if ctx.growth.best_reps >= ctx.input.target_reps {
            return None;
        }
        Some(Verdict::hold(
            DecisionRule::UnderTarget,
            ctx,
            format!(
                "Best set reached {} of {} target reps: hold {:.1} until the target is met.",
                ctx.growth.best_reps, ctx.input.target_reps, ctx.last_growth_load
            ),
        ))
    }

    fn harder_than_planned(&self, ctx: &RuleContext<'_>) -> Option<Verdict> {
        let rest_paused = ctx.growth.rest_pause_count >= self.thresholds.rest_pause_limit;
        if !self.rir_below_target(ctx) && !rest_paused {
            return None;
        }
        let note = if rest_paused {
            format!(
                "{} sets needed rest-pause: hold {:.1} until straight sets get there.",
                ctx.growth.rest_pause_count, ctx.last_growth_load
            )
        } else {
            format!(
                "Sets ran closer to failure than planned (avg {:.1} vs {:.1} RIR): hold {:.1}.",
                ctx.growth.avg_rir.unwrap_or_default(),
                ctx.effective_rir,
                ctx.last_growth_load
            )
        };
        Some(Verdict::hold(DecisionRule::HarderThanPlanned, ctx, note))
    }

    fn clean_top_of_range(&self, ctx: &RuleContext<'_>) -> Option<Verdict> {
        let top = ctx.input.planned_top_reps;
        let clean = ctx.growth.count >= GROWTH_SET_LIMIT
            && ctx.growth.all_reached(top)
            && self.rir_within_target(ctx)
            && ctx.growth.rest_pause_count == 0;
        if !clean {
            return None;
        }

        let config = ctx.input.config;
        let next_load = ctx.last_growth_load + load_step(ctx.last_growth_load);
        let mut notes = vec![format!(
            "All growth sets reached {top} reps on target: increase to {next_load:.1}."
        )];

        let headroom = ctx.all.avg_rir.is_some_and(|avg| {
            avg >= ctx.effective_rir + self.thresholds.set_increase_rir_headroom
        });
        let next_sets = if config.allow_set_increase
            && ctx.input.current_sets < config.max_sets
            && headroom
        {
            notes.push("Plenty left in the tank across all sets: add one set.".to_owned());
            ctx.input.current_sets + 1
        } else {
            ctx.hold_sets
        };

        Some(Verdict {
            rule: DecisionRule::CleanTopOfRange,
            action: ProgressionAction::IncreaseLoad,
            next_load,
            next_sets,
            notes,
        })
    }

    fn overperformance(&self, ctx: &RuleContext<'_>) -> Option<Verdict> {
        let top = ctx.input.planned_top_reps;
        let comfortable = ctx.growth.best_reps
            >= top.saturating_add(self.thresholds.overperformance_rep_margin)
            && ctx.growth.min_rir.is_some_and(|rir| rir > 0.0)
            && ctx.growth.rest_pause_count == 0;
        if !comfortable {
            return None;
        }

        let next_load = ctx.last_growth_load + load_step(ctx.last_growth_load);
        Some(Verdict {
            rule: DecisionRule::Overperformance,
            action: ProgressionAction::IncreaseLoad,
            next_load,
            next_sets: ctx.hold_sets,
            notes: vec![format!(
                "Best set hit {} reps against a top of {top} without failure: increase to {next_load:.1}.",
                ctx.growth.best_reps
            )],
        })
    }

    fn on_target(&self, ctx: &RuleContext<'_>) -> Option<Verdict> {
        if ctx.growth.best_reps < ctx.input.planned_top_reps || !self.rir_within_target(ctx) {
            return None;
        }
        Some(Verdict::hold(
            DecisionRule::OnTarget,
            ctx,
            format!(
                "On target: repeat {:.1} once more before increasing.",
                ctx.last_growth_load
            ),
        ))
    }

    fn catch_all(ctx: &RuleContext<'_>) -> Verdict {
        let mut verdict = Verdict::hold(
            DecisionRule::CatchAll,
            ctx,
            format!(
                "Hold {:.1} and aim for more even reps and cleaner sets.",
                ctx.last_growth_load
            ),
        );
        if ctx.growth.avg_rir.is_none() {
            verdict
                .notes
                .push("Log reps in reserve so progress can be judged next time.".to_owned());
        }
        verdict
    }

    /// Supplementary note on how the 4th+ sets went; never changes the action
    fn diagnostic_note(&self, ctx: &RuleContext<'_>) -> Option<String> {
        let diagnostic = &ctx.diagnostic;
        if diagnostic.count == 0 {
            return None;
        }
        let top = ctx.input.planned_top_reps;
        if diagnostic.all_reached(top) {
            Some(format!(
                "Diagnostic sets held {top}+ reps: the extra volume is well tolerated."
            ))
        } else if diagnostic
            .best_reps
            .saturating_add(self.thresholds.diagnostic_shortfall_reps)
            <= top
        {
            Some(format!(
                "Diagnostic sets fell well short of {top} reps: keep the extra set as an occasional test only."
            ))
        } else {
            None
        }
    }
}

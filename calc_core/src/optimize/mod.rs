//! Loadout optimizer - brute-force search over equipment subsets
//!
//! Cost is C(n, slot_count) resolver calls, which grows combinatorially:
//! 40 items at 3 slots is ~10k evaluations, 60 items at 4 slots is ~500k.
//! Searches larger than [`MAX_COMBINATIONS`] are rejected up front, and
//! callers with latency budgets should pass a cancel flag.

mod combinations;
mod top_k;

use combinations::{count_combinations, Combinations};
use top_k::TopK;

use crate::catalog::ItemDefinition;
use crate::error::CalcError;
use crate::loadout::LoadoutConfig;
use crate::resolve::{DamageReport, DamageResolver};
use crate::types::ItemId;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tracing::debug;

/// Hard ceiling on subset evaluations per request
pub const MAX_COMBINATIONS: u64 = 2_000_000;

/// Evaluations between progress reports
const PROGRESS_INTERVAL: u64 = 1_000;

/// What a candidate subset is scored by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    FinalDamage,
    ThreeHitTotal,
    FirstHit,
    Dot,
}

impl Objective {
    /// Read this objective's score off a report
    pub fn score_of(&self, report: &DamageReport) -> f64 {
        match self {
            Objective::FinalDamage => report.final_damage,
            Objective::ThreeHitTotal => report.three_hit.total,
            Objective::FirstHit => report.three_hit.first_hit(),
            Objective::Dot => report.dot_damage,
        }
    }
}

/// Search parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizeRequest {
    /// Equipment slots to fill
    pub slot_count: usize,
    pub objective: Objective,
    /// Only consider items with level_requirement <= this; defaults to the
    /// base loadout's player level when that is set
    #[serde(default)]
    pub level_filter: Option<u32>,
    /// Combinations to keep
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_top_k() -> usize {
    10
}

/// One scored equipment subset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCombination {
    pub equipment_ids: Vec<ItemId>,
    pub equipment_names: Vec<String>,
    /// Value of the requested objective
    pub score: f64,
    pub final_damage: f64,
    pub three_hit_total: f64,
    pub first_hit: f64,
    pub dot_damage: f64,
}

/// Search result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizeOutcome {
    /// Best subsets, descending by score, first-encountered wins ties
    pub top_combinations: Vec<ScoredCombination>,
    pub total_combinations_tested: u64,
}

/// External control over a running search
#[derive(Default)]
pub struct SearchControl<'a> {
    /// Partition the subset space across rayon workers
    pub parallel: bool,
    /// Checked between evaluations; setting it aborts with `Cancelled`
    pub cancel: Option<&'a AtomicBool>,
    /// Called with (tested, total) every 1,000 evaluations
    pub progress: Option<&'a (dyn Fn(u64, u64) + Sync)>,
}

impl DamageResolver<'_> {
    /// Search equipment subsets for the top-K scoring loadouts
    ///
    /// The base loadout's own equipment list is ignored; each candidate
    /// subset replaces it wholesale.
    pub fn optimize(
        &self,
        base: &LoadoutConfig,
        request: &OptimizeRequest,
    ) -> Result<OptimizeOutcome, CalcError> {
        self.optimize_with(base, request, &SearchControl::default())
    }

    /// Search with cancellation, progress reporting or parallelism
    pub fn optimize_with(
        &self,
        base: &LoadoutConfig,
        request: &OptimizeRequest,
        control: &SearchControl<'_>,
    ) -> Result<OptimizeOutcome, CalcError> {
        base.validate()?;
        if request.slot_count == 0 {
            return Err(CalcError::InvalidInput(
                "slot_count must be at least 1".to_string(),
            ));
        }
        if request.top_k == 0 {
            return Err(CalcError::InvalidInput(
                "top_k must be at least 1".to_string(),
            ));
        }

        let level_filter = request.level_filter.or_else(|| base.player_level());
        let candidates: Vec<&ItemDefinition> = self
            .catalog()
            .equipment()
            .filter(|item| level_filter.map_or(true, |level| item.level_requirement <= level))
            .collect();

        let total = count_combinations(candidates.len() as u64, request.slot_count as u64);
        if total > MAX_COMBINATIONS as u128 {
            return Err(CalcError::SearchSpaceTooLarge {
                combinations: total,
                limit: MAX_COMBINATIONS,
            });
        }
        let total = total as u64;
        debug!(
            candidates = candidates.len(),
            slots = request.slot_count,
            total,
            "optimizer search space"
        );

        if control.parallel && candidates.len() > request.slot_count {
            self.search_parallel(base, request, control, &candidates, total)
        } else {
            self.search_sequential(base, request, control, &candidates, total)
        }
    }

    fn search_sequential(
        &self,
        base: &LoadoutConfig,
        request: &OptimizeRequest,
        control: &SearchControl<'_>,
        candidates: &[&ItemDefinition],
        total: u64,
    ) -> Result<OptimizeOutcome, CalcError> {
        let mut top = TopK::new(request.top_k);
        let mut tested = 0u64;

        for combo in Combinations::new(candidates.len(), request.slot_count) {
            if let Some(cancel) = control.cancel {
                if cancel.load(Ordering::Relaxed) {
                    return Err(CalcError::Cancelled);
                }
            }
            top.offer(self.score_subset(base, &combo, candidates, request.objective)?);
            tested += 1;
            if tested % PROGRESS_INTERVAL == 0 {
                debug!(tested, total, "optimizer progress");
                if let Some(progress) = control.progress {
                    progress(tested, total);
                }
            }
        }

        Ok(OptimizeOutcome {
            top_combinations: top.into_sorted(),
            total_combinations_tested: tested,
        })
    }

    /// Partition the subset space by leading item index; each worker keeps
    /// a local top-K, merged in partition order so ties resolve exactly as
    /// in the sequential search
    fn search_parallel(
        &self,
        base: &LoadoutConfig,
        request: &OptimizeRequest,
        control: &SearchControl<'_>,
        candidates: &[&ItemDefinition],
        total: u64,
    ) -> Result<OptimizeOutcome, CalcError> {
        let n = candidates.len();
        let k = request.slot_count;
        let tested = AtomicU64::new(0);

        let partials: Result<Vec<TopK>, CalcError> = (0..n - k + 1)
            .into_par_iter()
            .map(|first| {
                let mut local = TopK::new(request.top_k);
                let mut combo = Vec::with_capacity(k);
                for rest in Combinations::new(n - first - 1, k - 1) {
                    if let Some(cancel) = control.cancel {
                        if cancel.load(Ordering::Relaxed) {
                            return Err(CalcError::Cancelled);
                        }
                    }
                    combo.clear();
                    combo.push(first);
                    combo.extend(rest.iter().map(|&i| i + first + 1));
                    local.offer(self.score_subset(base, &combo, candidates, request.objective)?);

                    let count = tested.fetch_add(1, Ordering::Relaxed) + 1;
                    if count % PROGRESS_INTERVAL == 0 {
                        if let Some(progress) = control.progress {
                            progress(count, total);
                        }
                    }
                }
                Ok(local)
            })
            .collect();

        let mut top = TopK::new(request.top_k);
        for local in partials? {
            top.merge(local);
        }

        Ok(OptimizeOutcome {
            top_combinations: top.into_sorted(),
            total_combinations_tested: tested.load(Ordering::Relaxed),
        })
    }

    fn score_subset(
        &self,
        base: &LoadoutConfig,
        combo: &[usize],
        candidates: &[&ItemDefinition],
        objective: Objective,
    ) -> Result<ScoredCombination, CalcError> {
        let mut config = base.clone();
        config.equipment = combo.iter().map(|&i| candidates[i].id.clone()).collect();
        let report = self.resolve(&config)?;

        Ok(ScoredCombination {
            equipment_names: combo.iter().map(|&i| candidates[i].name.clone()).collect(),
            equipment_ids: config.equipment,
            score: objective.score_of(&report),
            final_damage: report.final_damage,
            three_hit_total: report.three_hit.total,
            first_hit: report.three_hit.first_hit(),
            dot_damage: report.dot_damage,
        })
    }
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Tip selection and savings estimation.
//!
//! Tips rotate per user: a tip already in `tips_shown` is not offered again
//! until every tip of the current tier has been shown, at which point the
//! rotation starts over.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::catalog::{self, ConsumptionTier, Tip};
use crate::db::Repository;
use crate::error::Result;

/// Share of total consumption attributed to the single activity a factor
/// tip targets. Fixed approximation, not derived from recorded activities.
pub const SINGLE_ACTIVITY_SHARE: f64 = 0.2;

const LITERS_PER_CUBIC_METER: f64 = 1000.0;
const DAYS_PER_MONTH: f64 = 30.0;

/// Liters saved per day by following a tip.
///
/// A `potential_savings` of at most 1 is a reduction factor; anything larger
/// is an absolute number of liters per day.
pub fn estimate_savings(tip: &Tip, daily_consumption: f64) -> f64 {
    if tip.potential_savings <= 1.0 {
        match tip.activity {
            None => daily_consumption * tip.potential_savings,
            Some(_) => daily_consumption * SINGLE_ACTIVITY_SHARE * tip.potential_savings,
        }
    } else {
        tip.potential_savings
    }
}

/// Money saved, in soles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CostSavings {
    pub daily: f64,
    pub monthly: f64,
}

/// Convert daily liters saved into soles at the city's tariff.
pub fn convert_to_cost(savings_liters: f64, city: &str) -> CostSavings {
    let tariff = catalog::tariff_for(city);
    let daily = savings_liters / LITERS_PER_CUBIC_METER * tariff;
    CostSavings {
        daily,
        monthly: daily * DAYS_PER_MONTH,
    }
}

/// A selected tip with its estimated impact.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TipRecommendation {
    pub tip_id: u32,
    pub description: String,
    pub activity: Option<String>,
    pub tier: ConsumptionTier,
    pub savings_liters: f64,
    pub cost: CostSavings,
    pub tariff_per_cubic_meter: f64,
}

/// Chooses tips and tracks which ones a user has seen.
#[derive(Clone)]
pub struct TipAdvisor {
    repo: Repository,
}

impl TipAdvisor {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Pick a tip for a user's daily consumption and remember it as shown.
    ///
    /// Returns `None` for non-positive consumption; that is not an error.
    pub fn select_tip<R: Rng + ?Sized>(
        &self,
        username: &str,
        daily_consumption: f64,
        rng: &mut R,
    ) -> Result<Option<Tip>> {
        Ok(self
            .select_with_city(username, daily_consumption, rng)?
            .map(|(tip, _, _)| tip))
    }

    /// Select a tip and price its savings at the user's city tariff.
    pub fn tip_recommendation<R: Rng + ?Sized>(
        &self,
        username: &str,
        daily_consumption: f64,
        rng: &mut R,
    ) -> Result<Option<TipRecommendation>> {
        let Some((tip, tier, city)) = self.select_with_city(username, daily_consumption, rng)?
        else {
            return Ok(None);
        };

        let savings_liters = estimate_savings(&tip, daily_consumption);
        Ok(Some(TipRecommendation {
            tip_id: tip.id,
            description: tip.description.to_string(),
            activity: tip.activity.map(str::to_string),
            tier,
            savings_liters,
            cost: convert_to_cost(savings_liters, &city),
            tariff_per_cubic_meter: catalog::tariff_for(&city),
        }))
    }

    fn select_with_city<R: Rng + ?Sized>(
        &self,
        username: &str,
        daily_consumption: f64,
        rng: &mut R,
    ) -> Result<Option<(Tip, ConsumptionTier, String)>> {
        let Some(tier) = ConsumptionTier::for_consumption(daily_consumption) else {
            // Still reject unknown users
            self.repo.get_user(username)?;
            return Ok(None);
        };

        let selected = self.repo.update_user(username, |user| {
            let mut candidates: Vec<&'static Tip> = tier
                .tips()
                .filter(|t| !user.tips_shown.contains(&t.id))
                .collect();

            if candidates.is_empty() {
                tracing::debug!(username, ?tier, "All tier tips shown, restarting rotation");
                user.tips_shown.clear();
                candidates = tier.tips().collect();
            }

            let chosen = candidates.choose(rng).copied().copied();
            if let Some(tip) = &chosen {
                user.tips_shown.push(tip.id);
            }
            Ok(chosen.map(|tip| (tip, tier, user.city.clone())))
        })?;

        if let Some((tip, _, _)) = &selected {
            tracing::info!(username, tip_id = tip.id, ?tier, "Selected tip");
        }
        Ok(selected)
    }
}

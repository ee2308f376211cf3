// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Water footprint of food and consumer goods.
//!
//! Food is entered per week and reported per day; products are normalized
//! from their reporting period to a daily rate before applying the
//! coefficient. Keys missing from the catalog are ignored.

use serde::Serialize;
use std::collections::BTreeMap;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::catalog::{food_item, product_item, FoodCategory};

const DAYS_PER_WEEK: f64 = 7.0;

/// Meat share of the food footprint above which reducing meat is advised.
const MEAT_SHARE_ADVICE_THRESHOLD: f64 = 0.3;
/// Daily product footprint above which extending product life is advised.
const PRODUCT_ADVICE_THRESHOLD_LITERS: f64 = 100.0;

/// Food footprint, accumulated weekly and reported daily.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FoodFootprint {
    pub total_weekly_liters: f64,
    pub total_daily_liters: f64,
    /// Every category is present, zero when nothing fell into it
    pub per_category_daily_liters: BTreeMap<FoodCategory, f64>,
}

impl FoodFootprint {
    pub fn category_daily_liters(&self, category: FoodCategory) -> f64 {
        self.per_category_daily_liters
            .get(&category)
            .copied()
            .unwrap_or(0.0)
    }
}

/// Footprint of weekly food quantities (kg or liters per week).
pub fn compute_food_footprint<I, K>(weekly_quantities: I) -> FoodFootprint
where
    I: IntoIterator<Item = (K, f64)>,
    K: AsRef<str>,
{
    let mut weekly_by_category: BTreeMap<FoodCategory, f64> =
        FoodCategory::ALL.iter().map(|c| (*c, 0.0)).collect();
    let mut total_weekly = 0.0;

    for (key, quantity) in weekly_quantities {
        let key = key.as_ref();
        let Some(item) = food_item(key) else {
            tracing::debug!(key, "Ignoring unknown food key");
            continue;
        };
        let contribution = quantity * item.water_footprint_per_unit;
        total_weekly += contribution;
        *weekly_by_category
            .entry(FoodCategory::of(key))
            .or_insert(0.0) += contribution;
    }

    FoodFootprint {
        total_weekly_liters: total_weekly,
        total_daily_liters: total_weekly / DAYS_PER_WEEK,
        per_category_daily_liters: weekly_by_category
            .into_iter()
            .map(|(category, weekly)| (category, weekly / DAYS_PER_WEEK))
            .collect(),
    }
}

/// Daily footprint of product quantities, each in its own reporting period.
pub fn compute_product_footprint<I, K>(quantities: I) -> f64
where
    I: IntoIterator<Item = (K, f64)>,
    K: AsRef<str>,
{
    quantities
        .into_iter()
        .filter_map(|(key, quantity)| {
            let item = product_item(key.as_ref())?;
            let daily_amount = quantity / item.period.days();
            Some(daily_amount * item.footprint.water_footprint_per_unit)
        })
        .sum()
}

/// Direct use plus food and product footprints, liters per day.
pub fn total_footprint(direct_daily_liters: f64, food: &FoodFootprint, product_daily: f64) -> f64 {
    direct_daily_liters + food.total_daily_liters + product_daily
}

/// Daily footprint split by source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct FootprintBreakdown {
    pub direct_daily_liters: f64,
    pub food_daily_liters: f64,
    pub product_daily_liters: f64,
    pub total_daily_liters: f64,
}

impl FootprintBreakdown {
    pub fn new(direct_daily_liters: f64, food: &FoodFootprint, product_daily: f64) -> Self {
        Self {
            direct_daily_liters,
            food_daily_liters: food.total_daily_liters,
            product_daily_liters: product_daily,
            total_daily_liters: total_footprint(direct_daily_liters, food, product_daily),
        }
    }
}

/// Suggestions derived from the footprint shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum FootprintAdvice {
    ReduceMeat,
    AvoidFoodWaste,
    ExtendProductLife,
    ConsumeLocal,
}

/// Advice for a footprint. `ConsumeLocal` is always last.
pub fn footprint_advice(food: &FoodFootprint, product_daily: f64) -> Vec<FootprintAdvice> {
    let mut advice = Vec::new();

    if food.category_daily_liters(FoodCategory::Meat)
        > food.total_daily_liters * MEAT_SHARE_ADVICE_THRESHOLD
    {
        advice.push(FootprintAdvice::ReduceMeat);
    }
    if food.total_daily_liters > product_daily * 2.0 {
        advice.push(FootprintAdvice::AvoidFoodWaste);
    }
    if product_daily > PRODUCT_ADVICE_THRESHOLD_LITERS {
        advice.push(FootprintAdvice::ExtendProductLife);
    }
    advice.push(FootprintAdvice::ConsumeLocal);
    advice
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_beef_half_kilo() {
        let food = compute_food_footprint([("carne_res", 0.5)]);

        assert_eq!(food.total_weekly_liters, 7700.0);
        assert_eq!(food.total_daily_liters, 1100.0);
        assert_eq!(food.category_daily_liters(FoodCategory::Meat), 1100.0);
        for category in FoodCategory::ALL {
            if category != FoodCategory::Meat {
                assert_eq!(food.category_daily_liters(category), 0.0, "{category:?}");
            }
        }
    }

    #[test]
    fn test_all_categories_reported() {
        let food = compute_food_footprint(std::iter::empty::<(&str, f64)>());
        assert_eq!(food.per_category_daily_liters.len(), 7);
        assert_eq!(food.total_daily_liters, 0.0);
    }

    #[test]
    fn test_food_categories_and_unknown_keys() {
        let food = compute_food_footprint([
            ("leche", 7.0),
            ("chocolate", 0.7),
            ("dragon_fruit", 3.0),
        ]);

        assert!(close(
            food.category_daily_liters(FoodCategory::DairyAndEggs),
            1020.0
        ));
        assert!(close(
            food.category_daily_liters(FoodCategory::Other),
            17196.0 * 0.7 / 7.0
        ));
        assert!(close(
            food.total_weekly_liters,
            7.0 * 1020.0 + 0.7 * 17196.0
        ));
    }

    #[test]
    fn test_product_periods_for_every_key() {
        let cases = [
            ("camiseta_algodon", 30.0, 2700.0),
            ("jeans", 30.0, 8000.0),
            ("zapatos_cuero", 30.0, 8000.0),
            ("papel", 1.0, 10.0),
            ("smartphone", 365.0, 13000.0),
            ("computadora", 365.0, 20000.0),
        ];
        for (key, period_days, coefficient) in cases {
            let daily = compute_product_footprint([(key, 3.0)]);
            assert!(
                close(daily, 3.0 / period_days * coefficient),
                "{key}: got {daily}"
            );
        }
    }

    #[test]
    fn test_product_unknown_key_ignored() {
        assert_eq!(compute_product_footprint([("yacht", 1.0)]), 0.0);
        assert_eq!(compute_product_footprint([("papel", 5.0), ("yacht", 1.0)]), 50.0);
    }

    #[test]
    fn test_total_and_breakdown() {
        let food = compute_food_footprint([("carne_res", 0.5)]);
        let product = compute_product_footprint([("papel", 5.0)]);

        assert_eq!(total_footprint(145.0, &food, product), 1295.0);

        let breakdown = FootprintBreakdown::new(145.0, &food, product);
        assert_eq!(breakdown.food_daily_liters, 1100.0);
        assert_eq!(breakdown.product_daily_liters, 50.0);
        assert_eq!(breakdown.total_daily_liters, 1295.0);
    }

    #[test]
    fn test_advice() {
        let meat_heavy = compute_food_footprint([("carne_res", 1.0)]);
        assert_eq!(
            footprint_advice(&meat_heavy, 500.0),
            vec![
                FootprintAdvice::ReduceMeat,
                FootprintAdvice::AvoidFoodWaste,
                FootprintAdvice::ExtendProductLife,
                FootprintAdvice::ConsumeLocal,
            ]
        );

        let light = compute_food_footprint([("papa", 0.7)]);
        assert_eq!(
            footprint_advice(&light, 50.0),
            vec![FootprintAdvice::ConsumeLocal]
        );
    }
}

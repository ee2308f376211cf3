// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Consumption aggregates returned to the dashboard.

use chrono::NaiveDate;
use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::catalog::RECOMMENDED_DAILY_LIMIT_LITERS;

/// Result of a single `record consumption` call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RecordOutcome {
    /// Liters for this call only, not the day's cumulative total
    pub total_liters: f64,
    /// Whether this call alone exceeds the recommended daily limit
    pub exceeds_daily_limit: bool,
    /// Everything recorded that day, including this call
    pub day_total_liters: f64,
}

impl RecordOutcome {
    pub fn new(total_liters: f64, day_total_liters: f64) -> Self {
        Self {
            total_liters,
            exceeds_daily_limit: exceeds_daily_limit(total_liters),
            day_total_liters,
        }
    }
}

/// Strictly above the recommended limit; exactly 100 L does not count.
pub fn exceeds_daily_limit(liters: f64) -> bool {
    liters > RECOMMENDED_DAILY_LIMIT_LITERS
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub liters: f64,
}

/// Trailing seven-day view used by the weekly chart and cost cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WeeklySummary {
    /// Exactly seven days, oldest first
    pub days: Vec<DailyTotal>,
    pub total_liters: f64,
    pub daily_average: f64,
    pub days_over_limit: u32,
    pub tariff_per_cubic_meter: f64,
    pub weekly_cost: f64,
    /// Four times the weekly cost
    pub monthly_cost_estimate: f64,
}

impl WeeklySummary {
    pub fn from_days(days: Vec<DailyTotal>, tariff_per_cubic_meter: f64) -> Self {
        let total_liters: f64 = days.iter().map(|d| d.liters).sum();
        let daily_average = if days.is_empty() {
            0.0
        } else {
            total_liters / days.len() as f64
        };
        let days_over_limit = days
            .iter()
            .filter(|d| exceeds_daily_limit(d.liters))
            .count() as u32;
        let weekly_cost = total_liters / 1000.0 * tariff_per_cubic_meter;

        Self {
            days,
            total_liters,
            daily_average,
            days_over_limit,
            tariff_per_cubic_meter,
            weekly_cost,
            monthly_cost_estimate: weekly_cost * 4.0,
        }
    }
}

/// One exported line: a single activity on a single day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ExportRow {
    pub date: NaiveDate,
    /// Display name, or the raw key when it is no longer in the catalog
    pub activity: String,
    pub quantity: u32,
    pub liters: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn days(liters: [f64; 7]) -> Vec<DailyTotal> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        liters
            .iter()
            .enumerate()
            .map(|(i, l)| DailyTotal {
                date: start + chrono::Days::new(i as u64),
                liters: *l,
            })
            .collect()
    }

    #[test]
    fn test_threshold_is_strict() {
        assert!(!exceeds_daily_limit(100.0));
        assert!(exceeds_daily_limit(100.5));
        assert!(RecordOutcome::new(101.0, 250.0).exceeds_daily_limit);
        assert!(!RecordOutcome::new(100.0, 250.0).exceeds_daily_limit);
    }

    #[test]
    fn test_weekly_summary_figures() {
        let summary =
            WeeklySummary::from_days(days([0.0, 150.0, 100.0, 70.0, 0.0, 200.0, 180.0]), 2.0);

        assert_eq!(summary.total_liters, 700.0);
        assert_eq!(summary.daily_average, 100.0);
        assert_eq!(summary.days_over_limit, 3);
        assert!((summary.weekly_cost - 1.4).abs() < 1e-9);
        assert!((summary.monthly_cost_estimate - 5.6).abs() < 1e-9);
    }

    #[test]
    fn test_empty_week_has_zero_average() {
        let summary = WeeklySummary::from_days(vec![], 3.26);
        assert_eq!(summary.daily_average, 0.0);
        assert_eq!(summary.weekly_cost, 0.0);
    }
}

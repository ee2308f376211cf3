// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Consumption ledger.
//!
//! Accumulates activity quantities per user and day, and derives the daily
//! and trailing-week totals the dashboard reads.

use anyhow::Context;
use chrono::NaiveDate;

use crate::catalog::{self, NATIONAL_AVG_CONSUMPTION_LITERS};
use crate::db::Repository;
use crate::error::{AppError, Result};
use crate::models::user::quantities_to_liters;
use crate::models::{
    ActivityQuantities, DailyTotal, ExportRow, RecordOutcome, UserRecord, WeeklySummary,
};
use crate::services::comparison::{compare_consumption, ConsumptionComparison};
use crate::time_utils::trailing_week;

const CSV_HEADER: [&str; 4] = ["date", "activity", "quantity", "liters"];

/// Per-user consumption accounting.
#[derive(Clone)]
pub struct ConsumptionLedger {
    repo: Repository,
}

impl ConsumptionLedger {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &Repository {
        &self.repo
    }

    /// Create a user or update an existing user's city.
    ///
    /// Consumption history is never reset by re-registering.
    pub fn register_user(&self, username: &str, city: &str) -> Result<bool> {
        self.repo.register_user(username, city)
    }

    /// Add activity quantities to `today` for a user.
    ///
    /// Zero quantities and keys missing from the catalog are skipped.
    /// `total_liters` covers this call only; `day_total_liters` is read in
    /// the same update, so it always includes this call.
    pub fn record_consumption(
        &self,
        username: &str,
        quantities: &ActivityQuantities,
        today: NaiveDate,
    ) -> Result<RecordOutcome> {
        let accepted: ActivityQuantities = quantities
            .iter()
            .filter(|(key, quantity)| **quantity > 0 && catalog::activity(key).is_some())
            .map(|(key, quantity)| (key.clone(), *quantity))
            .collect();

        let skipped = quantities.len() - accepted.len();
        if skipped > 0 {
            tracing::debug!(username, skipped, "Skipped zero or unknown activities");
        }

        let day_total = self.repo.update_user(username, |user| {
            for (key, quantity) in &accepted {
                user.add_activity(today, key, *quantity);
            }
            Ok(user.daily_total(today))
        })?;

        let outcome = RecordOutcome::new(quantities_to_liters(&accepted), day_total);
        tracing::info!(
            username,
            date = %today,
            liters = outcome.total_liters,
            day_liters = outcome.day_total_liters,
            over_limit = outcome.exceeds_daily_limit,
            "Recorded consumption"
        );
        Ok(outcome)
    }

    /// Liters consumed by a user on `date` (0 when nothing was recorded).
    pub fn daily_total(&self, username: &str, date: NaiveDate) -> Result<f64> {
        Ok(self.repo.get_user(username)?.daily_total(date))
    }

    /// Totals for the seven days ending at `reference`, oldest first.
    pub fn weekly_total(&self, username: &str, reference: NaiveDate) -> Result<Vec<DailyTotal>> {
        let user = self.repo.get_user(username)?;
        week_of(&user, reference)
    }

    /// Weekly totals plus averages and costs at the user's city tariff.
    pub fn weekly_summary(&self, username: &str, reference: NaiveDate) -> Result<WeeklySummary> {
        let user = self.repo.get_user(username)?;
        summarize_week(&user, reference)
    }

    /// Trailing-week daily average against the user's city and national
    /// figures, from a single read of the user.
    pub fn comparison(
        &self,
        username: &str,
        reference: NaiveDate,
    ) -> Result<ConsumptionComparison> {
        let user = self.repo.get_user(username)?;
        let summary = summarize_week(&user, reference)?;
        Ok(compare_consumption(summary.daily_average, &user.city))
    }

    /// Every recorded day, oldest first.
    pub fn daily_history(&self, username: &str) -> Result<Vec<DailyTotal>> {
        let user = self.repo.get_user(username)?;
        Ok(user
            .consumption
            .iter()
            .map(|(date, quantities)| DailyTotal {
                date: *date,
                liters: quantities_to_liters(quantities),
            })
            .collect())
    }

    /// Direct water use per day for the footprint calculator.
    ///
    /// The trailing-week average when the user has any history, otherwise
    /// the national average.
    pub fn direct_daily_liters(&self, username: &str, reference: NaiveDate) -> Result<f64> {
        let user = self.repo.get_user(username)?;
        if !user.has_history() {
            return Ok(NATIONAL_AVG_CONSUMPTION_LITERS);
        }
        Ok(summarize_week(&user, reference)?.daily_average)
    }

    /// One row per recorded activity, ordered by date then activity key.
    pub fn export_rows(&self, username: &str) -> Result<Vec<ExportRow>> {
        let user = self.repo.get_user(username)?;
        let rows = user
            .consumption
            .iter()
            .flat_map(|(date, quantities)| {
                quantities.iter().map(move |(key, quantity)| {
                    let entry = catalog::activity(key);
                    ExportRow {
                        date: *date,
                        activity: entry
                            .map(|a| a.display_name.to_string())
                            .unwrap_or_else(|| key.clone()),
                        quantity: *quantity,
                        liters: entry
                            .map(|a| a.liters_per_use * f64::from(*quantity))
                            .unwrap_or(0.0),
                    }
                })
            })
            .collect();
        Ok(rows)
    }

    /// Export rows as CSV with a header line, even when there are no rows.
    pub fn export_csv(&self, username: &str) -> Result<String> {
        let rows = self.export_rows(username)?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(Vec::new());
        writer
            .write_record(CSV_HEADER)
            .context("Failed to write CSV header")?;
        for row in &rows {
            writer.serialize(row).context("Failed to write CSV row")?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush CSV: {}", e))?;
        Ok(String::from_utf8(bytes).context("CSV output is not UTF-8")?)
    }
}

fn week_of(user: &UserRecord, reference: NaiveDate) -> Result<Vec<DailyTotal>> {
    let dates = trailing_week(reference).ok_or_else(|| {
        AppError::BadRequest(format!("No complete week ends at {}", reference))
    })?;
    Ok(dates
        .into_iter()
        .map(|date| DailyTotal {
            date,
            liters: user.daily_total(date),
        })
        .collect())
}

fn summarize_week(user: &UserRecord, reference: NaiveDate) -> Result<WeeklySummary> {
    Ok(WeeklySummary::from_days(
        week_of(user, reference)?,
        catalog::tariff_for(&user.city),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn quantities(entries: &[(&str, u32)]) -> ActivityQuantities {
        entries.iter().map(|(k, q)| (k.to_string(), *q)).collect()
    }

    fn ledger_with_user() -> ConsumptionLedger {
        let ledger = ConsumptionLedger::new(Repository::in_memory());
        ledger.register_user("ana", "Lima").unwrap();
        ledger
    }

    #[test]
    fn test_record_is_additive() {
        let today = date(2024, 6, 10);

        let split = ledger_with_user();
        split
            .record_consumption("ana", &quantities(&[("shower", 2)]), today)
            .unwrap();
        split
            .record_consumption("ana", &quantities(&[("shower", 3)]), today)
            .unwrap();

        let single = ledger_with_user();
        single
            .record_consumption("ana", &quantities(&[("shower", 5)]), today)
            .unwrap();

        assert_eq!(
            split.daily_total("ana", today).unwrap(),
            single.daily_total("ana", today).unwrap()
        );
        assert_eq!(split.daily_total("ana", today).unwrap(), 350.0);
    }

    #[test]
    fn test_record_returns_call_total_only() {
        let ledger = ledger_with_user();
        let today = date(2024, 6, 10);

        ledger
            .record_consumption("ana", &quantities(&[("shower", 1)]), today)
            .unwrap();
        let outcome = ledger
            .record_consumption("ana", &quantities(&[("toilet", 2), ("wash_hands", 1)]), today)
            .unwrap();

        assert_eq!(outcome.total_liters, 21.0);
        assert!(!outcome.exceeds_daily_limit);
        assert_eq!(outcome.day_total_liters, 91.0);
        assert_eq!(ledger.daily_total("ana", today).unwrap(), 91.0);
    }

    #[test]
    fn test_record_threshold() {
        let ledger = ledger_with_user();
        let today = date(2024, 6, 10);

        // 70 + 3 * 10 = 100 exactly
        let at_limit = ledger
            .record_consumption("ana", &quantities(&[("shower", 1), ("cooking", 3)]), today)
            .unwrap();
        assert_eq!(at_limit.total_liters, 100.0);
        assert!(!at_limit.exceeds_daily_limit);

        let over = ledger
            .record_consumption("ana", &quantities(&[("bath", 1)]), today)
            .unwrap();
        assert!(over.exceeds_daily_limit);
    }

    #[test]
    fn test_record_skips_zero_and_unknown() {
        let ledger = ledger_with_user();
        let today = date(2024, 6, 10);

        let outcome = ledger
            .record_consumption(
                "ana",
                &quantities(&[("shower", 0), ("teleport", 4), ("toilet", 1)]),
                today,
            )
            .unwrap();

        assert_eq!(outcome.total_liters, 9.0);
        let user = ledger.repository().get_user("ana").unwrap();
        let day = &user.consumption[&today];
        assert_eq!(day.len(), 1);
        assert_eq!(day["toilet"], 1);
    }

    #[test]
    fn test_record_unknown_user() {
        let ledger = ledger_with_user();
        let err = ledger
            .record_consumption("bob", &quantities(&[("shower", 1)]), date(2024, 6, 10))
            .unwrap_err();
        assert!(matches!(err, AppError::UnknownUser(_)));
    }

    #[test]
    fn test_weekly_total_has_seven_days() {
        let ledger = ledger_with_user();
        let reference = date(2024, 6, 10);
        ledger
            .record_consumption("ana", &quantities(&[("shower", 1)]), date(2024, 6, 4))
            .unwrap();
        ledger
            .record_consumption("ana", &quantities(&[("toilet", 3)]), reference)
            .unwrap();
        // Outside the window
        ledger
            .record_consumption("ana", &quantities(&[("bath", 1)]), date(2024, 6, 3))
            .unwrap();

        let week = ledger.weekly_total("ana", reference).unwrap();

        assert_eq!(week.len(), 7);
        assert_eq!(week[0].date, date(2024, 6, 4));
        assert_eq!(week[0].liters, 70.0);
        assert_eq!(week[6].date, reference);
        assert_eq!(week[6].liters, 27.0);
        assert!(week[1..6].iter().all(|d| d.liters == 0.0));
    }

    #[test]
    fn test_weekly_summary_uses_city_tariff() {
        let ledger = ledger_with_user();
        let reference = date(2024, 6, 10);
        ledger
            .record_consumption("ana", &quantities(&[("bath", 1)]), reference)
            .unwrap();

        let summary = ledger.weekly_summary("ana", reference).unwrap();

        assert_eq!(summary.total_liters, 150.0);
        assert_eq!(summary.days_over_limit, 1);
        assert_eq!(summary.tariff_per_cubic_meter, 3.26);
        assert!((summary.weekly_cost - 0.489).abs() < 1e-9);
    }

    #[test]
    fn test_direct_daily_liters_falls_back_to_national() {
        let ledger = ledger_with_user();
        let reference = date(2024, 6, 10);
        assert_eq!(
            ledger.direct_daily_liters("ana", reference).unwrap(),
            NATIONAL_AVG_CONSUMPTION_LITERS
        );

        ledger
            .record_consumption("ana", &quantities(&[("shower", 1)]), reference)
            .unwrap();
        assert_eq!(ledger.direct_daily_liters("ana", reference).unwrap(), 10.0);
    }

    #[test]
    fn test_history_and_export() {
        let ledger = ledger_with_user();
        ledger
            .record_consumption("ana", &quantities(&[("toilet", 2)]), date(2024, 6, 2))
            .unwrap();
        ledger
            .record_consumption(
                "ana",
                &quantities(&[("shower", 1), ("leak_repair", 1)]),
                date(2024, 6, 1),
            )
            .unwrap();

        let history = ledger.daily_history("ana").unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].liters, 50.0);
        assert_eq!(history[1].liters, 18.0);

        let csv = ledger.export_csv("ana").unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "date,activity,quantity,liters");
        assert_eq!(lines[1], "2024-06-01,Reparar una fuga,1,-20.0");
        assert_eq!(lines[2], "2024-06-01,Ducharse,1,70.0");
        assert_eq!(lines[3], "2024-06-02,Usar el inodoro,2,18.0");
    }

    #[test]
    fn test_export_without_history_has_header() {
        let ledger = ledger_with_user();
        assert_eq!(
            ledger.export_csv("ana").unwrap(),
            "date,activity,quantity,liters\n"
        );
    }

    #[test]
    fn test_week_before_earliest_date_is_rejected() {
        let ledger = ledger_with_user();
        let reference = NaiveDate::MIN + chrono::Days::new(2);

        let err = ledger.weekly_summary("ana", reference).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        let err = ledger.weekly_total("ana", reference).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_comparison_reads_city_and_week() {
        let ledger = ConsumptionLedger::new(Repository::in_memory());
        ledger.register_user("ana", "Cusco").unwrap();
        let reference = date(2024, 6, 10);
        ledger
            .record_consumption("ana", &quantities(&[("bath", 7)]), reference)
            .unwrap();

        let cmp = ledger.comparison("ana", reference).unwrap();
        assert_eq!(cmp.city, "Cusco");
        assert_eq!(cmp.daily_average, 150.0);
        assert_eq!(cmp.city_average, 125.0);
    }
}

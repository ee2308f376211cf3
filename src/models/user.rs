// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! User record as persisted in the store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog;

/// Quantities per activity key.
pub type ActivityQuantities = BTreeMap<String, u32>;

/// Everything stored for one user, keyed by username in the store.
///
/// The optional fields default when missing so that files written before
/// challenges and the quiz existed still load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// City used for tariffs and averages
    pub city: String,
    /// Recorded quantities per day and activity
    #[serde(default)]
    pub consumption: BTreeMap<NaiveDate, ActivityQuantities>,
    /// Ids of tips already shown in the current rotation
    #[serde(default)]
    pub tips_shown: Vec<u32>,
    #[serde(default)]
    pub active_challenges: Vec<u32>,
    #[serde(default)]
    pub completed_challenges: Vec<u32>,
    #[serde(default)]
    pub quiz: QuizProgress,
}

/// Position in the quiz.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizProgress {
    /// Index of the next question to answer
    pub current_question: usize,
    pub correct_answers: u32,
    pub finished: bool,
}

impl UserRecord {
    pub fn new(city: impl Into<String>) -> Self {
        Self {
            city: city.into(),
            ..Self::default()
        }
    }

    /// Add `quantity` occurrences of an activity on `date`.
    ///
    /// Quantities only ever grow; repeated calls accumulate.
    pub fn add_activity(&mut self, date: NaiveDate, activity_key: &str, quantity: u32) {
        let count = self
            .consumption
            .entry(date)
            .or_default()
            .entry(activity_key.to_string())
            .or_insert(0);
        *count = count.saturating_add(quantity);
    }

    /// Liters consumed on `date`. Keys missing from the catalog count as zero.
    pub fn daily_total(&self, date: NaiveDate) -> f64 {
        self.consumption
            .get(&date)
            .map(quantities_to_liters)
            .unwrap_or(0.0)
    }

    pub fn has_history(&self) -> bool {
        self.consumption.values().any(|day| !day.is_empty())
    }
}

/// Σ quantity × liters-per-use over known activities.
pub fn quantities_to_liters(quantities: &ActivityQuantities) -> f64 {
    quantities
        .iter()
        .filter_map(|(key, quantity)| {
            catalog::activity(key).map(|a| a.liters_per_use * f64::from(*quantity))
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_add_activity_accumulates() {
        let mut user = UserRecord::new("Lima");
        user.add_activity(day(15), "shower", 1);
        user.add_activity(day(15), "shower", 2);

        assert_eq!(user.consumption[&day(15)]["shower"], 3);
        assert_eq!(user.daily_total(day(15)), 210.0);
    }

    #[test]
    fn test_daily_total_missing_day_is_zero() {
        let user = UserRecord::new("Lima");
        assert_eq!(user.daily_total(day(1)), 0.0);
        assert!(!user.has_history());
    }

    #[test]
    fn test_negative_activity_not_clamped() {
        let mut user = UserRecord::new("Lima");
        user.add_activity(day(2), "leak_repair", 1);
        assert_eq!(user.daily_total(day(2)), -20.0);
    }

    #[test]
    fn test_unknown_stored_key_counts_as_zero() {
        let mut user = UserRecord::new("Lima");
        user.add_activity(day(3), "toilet", 2);
        user.add_activity(day(3), "retired_activity", 5);
        assert_eq!(user.daily_total(day(3)), 18.0);
    }

    #[test]
    fn test_deserializes_legacy_record() {
        let json = r#"{
            "city": "Cusco",
            "consumption": {"2024-03-01": {"shower": 1, "toilet": 4}},
            "tips_shown": [3, 6]
        }"#;

        let user: UserRecord = serde_json::from_str(json).unwrap();

        assert_eq!(user.city, "Cusco");
        assert_eq!(user.tips_shown, vec![3, 6]);
        assert!(user.active_challenges.is_empty());
        assert_eq!(user.quiz, QuizProgress::default());
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        assert_eq!(user.daily_total(date), 106.0);
    }

    #[test]
    fn test_quantities_stay_integers_in_json() {
        let mut user = UserRecord::new("Lima");
        user.add_activity(day(4), "shower", 2);
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains(r#""2024-01-04":{"shower":2}"#), "{json}");
    }
}

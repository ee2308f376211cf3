// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Daily average against city, national and recommended figures.

use serde::Serialize;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::catalog::{self, NATIONAL_AVG_CONSUMPTION_LITERS, RECOMMENDED_DAILY_LIMIT_LITERS};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ConsumptionComparison {
    pub city: String,
    pub daily_average: f64,
    pub city_average: f64,
    pub national_average: f64,
    pub recommended_limit: f64,
    /// Percent above (positive) or below (negative) the city average
    pub vs_city_percent: f64,
    pub vs_national_percent: f64,
    pub vs_recommended_percent: f64,
}

/// Percent deviation of `value` from `reference`; 0 for a zero reference.
pub fn percent_deviation(value: f64, reference: f64) -> f64 {
    if reference == 0.0 {
        return 0.0;
    }
    value / reference * 100.0 - 100.0
}

/// Compare a daily average against reference figures for `city`.
///
/// Unknown cities are compared against the national average.
pub fn compare_consumption(daily_average: f64, city: &str) -> ConsumptionComparison {
    let city_average = catalog::city_average(city);
    ConsumptionComparison {
        city: city.to_string(),
        daily_average,
        city_average,
        national_average: NATIONAL_AVG_CONSUMPTION_LITERS,
        recommended_limit: RECOMMENDED_DAILY_LIMIT_LITERS,
        vs_city_percent: percent_deviation(daily_average, city_average),
        vs_national_percent: percent_deviation(daily_average, NATIONAL_AVG_CONSUMPTION_LITERS),
        vs_recommended_percent: percent_deviation(daily_average, RECOMMENDED_DAILY_LIMIT_LITERS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_deviation() {
        assert_eq!(percent_deviation(150.0, 100.0), 50.0);
        assert_eq!(percent_deviation(50.0, 100.0), -50.0);
        assert_eq!(percent_deviation(0.0, 145.0), -100.0);
        assert_eq!(percent_deviation(42.0, 0.0), 0.0);
    }

    #[test]
    fn test_compare_known_city() {
        let cmp = compare_consumption(200.0, "Cusco");
        assert_eq!(cmp.city_average, 125.0);
        assert_eq!(cmp.vs_city_percent, 60.0);
        assert_eq!(cmp.vs_recommended_percent, 100.0);
        assert_eq!(cmp.national_average, 145.0);
    }

    #[test]
    fn test_compare_unknown_city_uses_national() {
        let cmp = compare_consumption(145.0, "Atlantis");
        assert_eq!(cmp.city_average, NATIONAL_AVG_CONSUMPTION_LITERS);
        assert_eq!(cmp.vs_city_percent, 0.0);
        assert_eq!(cmp.vs_national_percent, 0.0);
    }
}

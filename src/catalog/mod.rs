// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Static reference data.
//!
//! Everything here is immutable and compiled into the binary: activity
//! coefficients, food and product water footprints, city tariffs and
//! averages, saving tips, challenges and the quiz bank.

pub mod activities;
pub mod challenges;
pub mod cities;
pub mod footprint;
pub mod quiz;
pub mod tips;

pub use activities::{activity, ActivityEntry, ACTIVITIES};
pub use challenges::{challenge, Challenge, Difficulty, CHALLENGES};
pub use cities::{
    city_average, city_profile, tariff_for, water_sources, CityProfile, WaterSource, CITIES,
    DEFAULT_TARIFF_PER_CUBIC_METER, NATIONAL_AVG_CONSUMPTION_LITERS,
};
pub use footprint::{
    food_item, product_item, FoodCategory, FootprintEntry, FootprintUnit, ProductEntry,
    ReportingPeriod, FOOD_ITEMS, PRODUCT_ITEMS,
};
pub use quiz::{QuizQuestion, QUIZ_QUESTIONS};
pub use tips::{tip, ConsumptionTier, Tip, TIPS};

/// Recommended daily consumption per person. Totals strictly above this
/// raise the over-limit signal.
pub const RECOMMENDED_DAILY_LIMIT_LITERS: f64 = 100.0;

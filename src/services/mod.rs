// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod challenges;
pub mod comparison;
pub mod converter;
pub mod footprint;
pub mod ledger;
pub mod quiz;
pub mod tips;

pub use challenges::{ChallengeBoard, ChallengeTracker};
pub use comparison::{compare_consumption, ConsumptionComparison};
pub use converter::{convert, visual_impact, ConvertError, VisualImpact, VolumeUnit};
pub use footprint::{
    compute_food_footprint, compute_product_footprint, footprint_advice, FoodFootprint,
    FootprintAdvice, FootprintBreakdown,
};
pub use ledger::ConsumptionLedger;
pub use quiz::{quiz_rating, AnswerFeedback, QuizRating, QuizSession, QuizState};
pub use tips::{convert_to_cost, estimate_savings, CostSavings, TipAdvisor, TipRecommendation};

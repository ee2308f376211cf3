// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! H2Omiga: household water consumption tracking and advice
//!
//! This crate provides the consumption ledger, water-footprint calculator,
//! tip recommender and related tools, plus the JSON API that exposes them.

pub mod catalog;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use db::Repository;
use services::{ChallengeTracker, ConsumptionLedger, QuizSession, TipAdvisor};

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub ledger: ConsumptionLedger,
    pub tips: TipAdvisor,
    pub challenges: ChallengeTracker,
    pub quiz: QuizSession,
}

impl AppState {
    /// Build every service over one shared repository.
    pub fn new(config: Config, repo: Repository) -> Self {
        Self {
            config,
            ledger: ConsumptionLedger::new(repo.clone()),
            tips: TipAdvisor::new(repo.clone()),
            challenges: ChallengeTracker::new(repo.clone()),
            quiz: QuizSession::new(repo),
        }
    }
}

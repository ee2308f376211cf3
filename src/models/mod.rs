// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod stats;
pub mod user;

pub use stats::{DailyTotal, ExportRow, RecordOutcome, WeeklySummary};
pub use user::{ActivityQuantities, QuizProgress, UserRecord};

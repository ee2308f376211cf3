// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Per-user challenge progress.

use serde::Serialize;
use std::collections::BTreeMap;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::catalog::{self, Challenge, Difficulty, CHALLENGES};
use crate::db::Repository;
use crate::error::{AppError, Result};
use crate::models::UserRecord;

/// A user's view of the challenge catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ChallengeBoard {
    pub active: Vec<Challenge>,
    pub completed: Vec<Challenge>,
    /// Challenges neither active nor completed, grouped by difficulty
    pub available: BTreeMap<Difficulty, Vec<Challenge>>,
    /// Sum of the targets of completed challenges
    pub liters_saved: u64,
}

impl ChallengeBoard {
    fn for_user(user: &UserRecord) -> Self {
        let resolve = |ids: &[u32]| -> Vec<Challenge> {
            ids.iter()
                .filter_map(|id| catalog::challenge(*id))
                .copied()
                .collect()
        };
        let active = resolve(&user.active_challenges);
        let completed = resolve(&user.completed_challenges);

        let mut available: BTreeMap<Difficulty, Vec<Challenge>> = BTreeMap::new();
        for challenge in CHALLENGES.iter().filter(|c| {
            !user.active_challenges.contains(&c.id) && !user.completed_challenges.contains(&c.id)
        }) {
            available
                .entry(challenge.difficulty)
                .or_default()
                .push(*challenge);
        }

        let liters_saved = completed.iter().map(|c| u64::from(c.target_liters)).sum();

        Self {
            active,
            completed,
            available,
            liters_saved,
        }
    }
}

/// Accepts and completes challenges on behalf of users.
#[derive(Clone)]
pub struct ChallengeTracker {
    repo: Repository,
}

impl ChallengeTracker {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    pub fn board(&self, username: &str) -> Result<ChallengeBoard> {
        let user = self.repo.get_user(username)?;
        Ok(ChallengeBoard::for_user(&user))
    }

    /// Start a challenge.
    pub fn accept(&self, username: &str, challenge_id: u32) -> Result<ChallengeBoard> {
        let challenge = catalog::challenge(challenge_id)
            .ok_or_else(|| AppError::NotFound(format!("Challenge {}", challenge_id)))?;

        let board = self.repo.update_user(username, |user| {
            if user.active_challenges.contains(&challenge_id) {
                return Err(AppError::BadRequest(format!(
                    "Challenge {} is already active",
                    challenge_id
                )));
            }
            if user.completed_challenges.contains(&challenge_id) {
                return Err(AppError::BadRequest(format!(
                    "Challenge {} is already completed",
                    challenge_id
                )));
            }
            user.active_challenges.push(challenge_id);
            Ok(ChallengeBoard::for_user(user))
        })?;

        tracing::info!(username, challenge_id, name = challenge.name, "Accepted challenge");
        Ok(board)
    }

    /// Move an active challenge to completed.
    pub fn complete(&self, username: &str, challenge_id: u32) -> Result<ChallengeBoard> {
        let challenge = catalog::challenge(challenge_id)
            .ok_or_else(|| AppError::NotFound(format!("Challenge {}", challenge_id)))?;

        let board = self.repo.update_user(username, |user| {
            let Some(pos) = user
                .active_challenges
                .iter()
                .position(|id| *id == challenge_id)
            else {
                return Err(AppError::BadRequest(format!(
                    "Challenge {} is not active",
                    challenge_id
                )));
            };
            user.active_challenges.remove(pos);
            user.completed_challenges.push(challenge_id);
            Ok(ChallengeBoard::for_user(user))
        })?;

        tracing::info!(
            username,
            challenge_id,
            target_liters = challenge.target_liters,
            "Completed challenge"
        );
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> ChallengeTracker {
        let repo = Repository::in_memory();
        repo.register_user("ana", "Lima").unwrap();
        ChallengeTracker::new(repo)
    }

    #[test]
    fn test_fresh_board_has_everything_available() {
        let board = tracker().board("ana").unwrap();
        assert!(board.active.is_empty());
        assert!(board.completed.is_empty());
        assert_eq!(board.liters_saved, 0);

        let total: usize = board.available.values().map(Vec::len).sum();
        assert_eq!(total, CHALLENGES.len());
        assert_eq!(board.available[&Difficulty::Easy].len(), 3);
        assert_eq!(board.available[&Difficulty::Medium].len(), 4);
        assert_eq!(board.available[&Difficulty::Hard].len(), 2);
        assert_eq!(board.available[&Difficulty::Extreme].len(), 1);
    }

    #[test]
    fn test_accept_then_complete() {
        let tracker = tracker();

        let board = tracker.accept("ana", 3).unwrap();
        assert_eq!(board.active.len(), 1);
        assert_eq!(board.active[0].id, 3);
        assert_eq!(board.available[&Difficulty::Hard].len(), 1);

        let board = tracker.complete("ana", 3).unwrap();
        assert!(board.active.is_empty());
        assert_eq!(board.completed[0].id, 3);
        assert_eq!(board.liters_saved, 2000);

        // Persisted
        let board = tracker.board("ana").unwrap();
        assert_eq!(board.liters_saved, 2000);
    }

    #[test]
    fn test_accept_twice_is_rejected() {
        let tracker = tracker();
        tracker.accept("ana", 1).unwrap();
        let err = tracker.accept("ana", 1).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));

        tracker.complete("ana", 1).unwrap();
        let err = tracker.accept("ana", 1).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_complete_requires_active() {
        let tracker = tracker();
        let err = tracker.complete("ana", 2).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn test_unknown_challenge_and_user() {
        let tracker = tracker();
        assert!(matches!(
            tracker.accept("ana", 99).unwrap_err(),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            tracker.complete("ana", 0).unwrap_err(),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            tracker.accept("bob", 1).unwrap_err(),
            AppError::UnknownUser(_)
        ));
        assert!(matches!(
            tracker.board("bob").unwrap_err(),
            AppError::UnknownUser(_)
        ));
    }
}

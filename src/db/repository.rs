// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Typed user operations over a [`UserStore`].
//!
//! Every mutation is a read-modify-write of the whole snapshot. A single
//! process-wide lock serializes those cycles so concurrent requests inside
//! one process cannot lose updates.

use super::{MemoryStore, UserMap, UserStore};
use crate::error::{AppError, Result};
use crate::models::UserRecord;
use std::sync::{Arc, Mutex, MutexGuard};

/// Shared handle to the user store.
#[derive(Clone)]
pub struct Repository {
    store: Arc<dyn UserStore>,
    lock: Arc<Mutex<()>>,
}

impl Repository {
    pub fn new<S: UserStore + 'static>(store: S) -> Self {
        Self {
            store: Arc::new(store),
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Repository over an empty in-memory store.
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        // The guarded value is `()`, so a poisoned lock carries no bad state.
        self.lock.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Full snapshot of every user.
    pub fn snapshot(&self) -> Result<UserMap> {
        let _guard = self.guard();
        Ok(self.store.load()?)
    }

    /// Get a user by username.
    pub fn get_user(&self, username: &str) -> Result<UserRecord> {
        let mut users = self.snapshot()?;
        users
            .remove(username)
            .ok_or_else(|| AppError::UnknownUser(username.to_string()))
    }

    /// Create a user, or update only the city of an existing one.
    ///
    /// Returns `true` if the user was created.
    pub fn register_user(&self, username: &str, city: &str) -> Result<bool> {
        let _guard = self.guard();
        let mut users = self.store.load()?;

        let created = match users.get_mut(username) {
            Some(existing) => {
                existing.city = city.to_string();
                false
            }
            None => {
                users.insert(username.to_string(), UserRecord::new(city));
                true
            }
        };

        self.store.save(&users)?;
        tracing::info!(username, city, created, "Registered user");
        Ok(created)
    }

    /// Apply `f` to a user's record and persist the result.
    ///
    /// Nothing is written if the user is unknown or `f` fails.
    pub fn update_user<T, F>(&self, username: &str, f: F) -> Result<T>
    where
        F: FnOnce(&mut UserRecord) -> Result<T>,
    {
        let _guard = self.guard();
        let mut users = self.store.load()?;

        let user = users
            .get_mut(username)
            .ok_or_else(|| AppError::UnknownUser(username.to_string()))?;
        let value = f(user)?;

        self.store.save(&users)?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_register_creates_then_updates_city() {
        let repo = Repository::in_memory();
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();

        assert!(repo.register_user("ana", "Lima").unwrap());
        repo.update_user("ana", |u| {
            u.add_activity(date, "shower", 1);
            Ok(())
        })
        .unwrap();

        assert!(!repo.register_user("ana", "Cusco").unwrap());

        let user = repo.get_user("ana").unwrap();
        assert_eq!(user.city, "Cusco");
        assert_eq!(user.daily_total(date), 70.0);
    }

    #[test]
    fn test_unknown_user() {
        let repo = Repository::in_memory();
        let err = repo.get_user("ghost").unwrap_err();
        assert!(matches!(err, AppError::UnknownUser(name) if name == "ghost"));

        let err = repo.update_user("ghost", |_| Ok(())).unwrap_err();
        assert!(matches!(err, AppError::UnknownUser(_)));
        assert!(repo.snapshot().unwrap().is_empty());
    }

    #[test]
    fn test_failed_update_is_not_saved() {
        let repo = Repository::in_memory();
        repo.register_user("ana", "Lima").unwrap();

        let result: Result<()> = repo.update_user("ana", |u| {
            u.tips_shown.push(3);
            Err(AppError::BadRequest("nope".to_string()))
        });

        assert!(result.is_err());
        assert!(repo.get_user("ana").unwrap().tips_shown.is_empty());
    }

    #[test]
    fn test_offline_store_is_unavailable() {
        let repo = Repository::new(MemoryStore::offline());
        let err = repo.register_user("ana", "Lima").unwrap_err();
        assert!(matches!(err, AppError::StorageUnavailable(_)));
    }

    #[test]
    fn test_concurrent_updates_do_not_lose_writes() {
        let repo = Repository::in_memory();
        repo.register_user("ana", "Lima").unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let repo = repo.clone();
                std::thread::spawn(move || {
                    for _ in 0..25 {
                        repo.update_user("ana", |u| {
                            u.add_activity(date, "toilet", 1);
                            Ok(())
                        })
                        .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let user = repo.get_user("ana").unwrap();
        assert_eq!(user.consumption[&date]["toilet"], 200);
    }
}

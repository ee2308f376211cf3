// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory store for tests and ephemeral runs.

use super::{StoreError, UserMap, UserStore};
use std::sync::Mutex;

/// Store that keeps the snapshot in memory.
#[derive(Debug)]
pub struct MemoryStore {
    /// `None` simulates an unreachable backend
    users: Option<Mutex<UserMap>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_users(UserMap::new())
    }

    pub fn with_users(users: UserMap) -> Self {
        Self {
            users: Some(Mutex::new(users)),
        }
    }

    /// A store whose every operation fails with [`StoreError::Offline`].
    pub fn offline() -> Self {
        Self { users: None }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore for MemoryStore {
    fn load(&self) -> Result<UserMap, StoreError> {
        let users = self.users.as_ref().ok_or(StoreError::Offline)?;
        Ok(users.lock().unwrap_or_else(|e| e.into_inner()).clone())
    }

    fn save(&self, snapshot: &UserMap) -> Result<(), StoreError> {
        let users = self.users.as_ref().ok_or(StoreError::Offline)?;
        *users.lock().unwrap_or_else(|e| e.into_inner()) = snapshot.clone();
        Ok(())
    }
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Storage layer.
//!
//! The store contract is full-snapshot: `load` returns every user and
//! `save` writes every user back. Nothing relies on partial reads.

pub mod json_file;
pub mod memory;
pub mod repository;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use repository::Repository;

use crate::models::UserRecord;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// All users keyed by username.
pub type UserMap = BTreeMap<String, UserRecord>;

/// Backing store for user records.
pub trait UserStore: Send + Sync {
    fn load(&self) -> Result<UserMap, StoreError>;
    fn save(&self, users: &UserMap) -> Result<(), StoreError>;
}

/// Errors from a backing store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Data file not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("Failed to access data file: {0}")]
    Io(String),

    #[error("Data file is corrupt: {0}")]
    Corrupt(String),

    #[error("Store offline")]
    Offline,
}

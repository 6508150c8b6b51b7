//! File-system repositories for planner state.
//!
//! Each repository owns one JSON document under a caller-chosen base
//! directory, named by a fixed, versioned storage key. Missing documents
//! read as empty state; corrupt documents surface as errors with context so
//! the caller decides whether to fall back.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use planner_model::{CheckedState, GuestRecord, Reminder};

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value = serde_json::from_str(&contents)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(Some(value))
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("failed to serialize {}", path.display()))?;
    fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))
}

fn ensure_dir(base_dir: &Path) -> Result<()> {
    fs::create_dir_all(base_dir)
        .with_context(|| format!("failed to create store directory {}", base_dir.display()))
}

/// Repository for the accepted guest list.
///
/// Saving replaces the stored list wholesale; merging with a previous list
/// is the caller's concern.
#[derive(Debug, Clone)]
pub struct GuestRepository {
    base_dir: PathBuf,
}

impl GuestRepository {
    /// Fixed storage key for the guest-list document.
    pub const STORAGE_KEY: &'static str = "guests_v1";

    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        ensure_dir(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn path(&self) -> PathBuf {
        self.base_dir.join(format!("{}.json", Self::STORAGE_KEY))
    }

    pub fn load(&self) -> Result<Vec<GuestRecord>> {
        Ok(read_json(&self.path())?.unwrap_or_default())
    }

    pub fn save(&self, records: &[GuestRecord]) -> Result<PathBuf> {
        let path = self.path();
        write_json(&path, &records)?;
        debug!(count = records.len(), path = %path.display(), "guest list saved");
        Ok(path)
    }
}

/// Repository for the breakfast-checked state document.
#[derive(Debug, Clone)]
pub struct CheckedRepository {
    base_dir: PathBuf,
}

impl CheckedRepository {
    pub const STORAGE_KEY: &'static str = "checked_v1";

    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        ensure_dir(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn path(&self) -> PathBuf {
        self.base_dir.join(format!("{}.json", Self::STORAGE_KEY))
    }

    pub fn load(&self) -> Result<CheckedState> {
        Ok(read_json(&self.path())?.unwrap_or_default())
    }

    pub fn save(&self, state: &CheckedState) -> Result<PathBuf> {
        let path = self.path();
        write_json(&path, state)?;
        Ok(path)
    }
}

/// Repository for the quest log.
#[derive(Debug, Clone)]
pub struct QuestRepository {
    base_dir: PathBuf,
}

impl QuestRepository {
    pub const STORAGE_KEY: &'static str = "quests_v1";

    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        ensure_dir(&base_dir)?;
        Ok(Self { base_dir })
    }

    pub fn path(&self) -> PathBuf {
        self.base_dir.join(format!("{}.json", Self::STORAGE_KEY))
    }

    pub fn load(&self) -> Result<Vec<Reminder>> {
        Ok(read_json(&self.path())?.unwrap_or_default())
    }

    pub fn save(&self, reminders: &[Reminder]) -> Result<PathBuf> {
        let path = self.path();
        write_json(&path, &reminders)?;
        debug!(count = reminders.len(), path = %path.display(), "quest log saved");
        Ok(path)
    }
}

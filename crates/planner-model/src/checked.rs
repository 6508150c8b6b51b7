//! Persisted breakfast-checked state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Checked flags keyed by guest key, persisted as a plain JSON object.
///
/// Unchecking removes the key entirely, so the stored document only ever
/// contains keys that are checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckedState {
    entries: BTreeMap<String, bool>,
}

impl CheckedState {
    pub fn is_checked(&self, key: &str) -> bool {
        self.entries.get(key).copied().unwrap_or(false)
    }

    pub fn set_checked(&mut self, key: &str, checked: bool) {
        if checked {
            self.entries.insert(key.to_string(), true);
        } else {
            self.entries.remove(key);
        }
    }

    pub fn checked_count(&self) -> usize {
        self.entries.values().filter(|flag| **flag).count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

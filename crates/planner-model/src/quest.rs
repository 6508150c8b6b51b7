//! Quest-log (reminder) value types.

use serde::{Deserialize, Serialize};

/// One reminder in the quest log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
    pub title: String,
    /// Grouping zone; reminders without one land in the "All" group.
    #[serde(default)]
    pub zone: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: ReminderKind,
    #[serde(default)]
    pub status: ReminderStatus,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub short: String,
    #[serde(default)]
    pub long: String,
}

impl Reminder {
    pub fn is_complete(&self) -> bool {
        self.status == ReminderStatus::Complete
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderKind {
    #[default]
    Normal,
    Daily,
    Elite,
    Important,
}

impl<'de> Deserialize<'de> for ReminderKind {
    /// Unrecognized kinds fall back to a normal quest.
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        let kind = match raw.to_lowercase().as_str() {
            "daily" => ReminderKind::Daily,
            "elite" => ReminderKind::Elite,
            "important" => ReminderKind::Important,
            _ => ReminderKind::Normal,
        };
        Ok(kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderStatus {
    Complete,
    #[default]
    Active,
}

impl<'de> Deserialize<'de> for ReminderStatus {
    /// Anything that is not explicitly complete counts as active.
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.eq_ignore_ascii_case("complete") {
            Ok(ReminderStatus::Complete)
        } else {
            Ok(ReminderStatus::Active)
        }
    }
}

//! Raw catalogue records as serialised by the directory site.
//!
//! Field names follow the site's camelCase JSON. Records are decoded first
//! and converted into validated core types second, so a malformed entry is
//! reported with its identifier instead of a byte offset.

use std::collections::HashMap;

use serde::Deserialize;

/// One club entry as stored in `clubs.json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubRecord {
    /// Unique identifier.
    pub id: u64,
    /// Club name.
    pub name: String,
    /// Category key (`sports`, `music`, ...).
    pub category: String,
    /// Free-text description.
    pub description: String,
    /// Optional founding history.
    #[serde(default)]
    pub history: Option<String>,
    /// Past-activity descriptions.
    #[serde(default)]
    pub past_activities: Vec<String>,
    /// Free-form contact channels.
    #[serde(default)]
    pub contact: HashMap<String, String>,
}

/// One activity entry as stored in `activities.json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    /// Unique identifier.
    pub id: u64,
    /// Activity name.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Name of the owning club.
    pub club: String,
    /// Registration status key (`open`, `closing`, `closed`).
    pub status: String,
    /// Scheduled date, as displayed.
    #[serde(default)]
    pub date: String,
    /// Registration deadline, as displayed.
    #[serde(default)]
    pub deadline: String,
}

//! Identity and activity entities owned by the session store.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{HistoryKind, HistoryStatus};

/// The single signed-in identity.
///
/// Exactly one record is current at a time. It is created by sign-in/sign-up,
/// mutated by skill edits and history appends, and destroyed on sign-out. The
/// session store exclusively owns the persisted record; everything else works
/// on copies.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct IdentityRecord {
    pub id: String,
    pub display_name: String,
    pub email: String,
    pub skills: Vec<String>,
    pub authenticated: bool,
    pub avatar_ref: String,
    /// Bounded most-recent-first activity log. See `th_session::HISTORY_CAPACITY`.
    pub history: Vec<HistoryEntry>,
}

/// One recorded verification/guidance activity.
///
/// Created only by the store's append operation; never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HistoryEntry {
    pub id: String,
    pub kind: HistoryKind,
    pub title: String,
    pub status: HistoryStatus,
    pub timestamp: DateTime<Utc>,
}

/// A web source the reasoning service consulted for an analysis.
///
/// Produced transiently per request from grounding metadata; never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Citation {
    pub title: String,
    pub url: String,
}

//! Single-slot session store with bounded activity history.
//!
//! Holds at most one [`IdentityRecord`], serialized as JSON in one file
//! (`~/.trusthire/session.json` by default). Every operation is an atomic
//! read-modify-write over that slot: writes go through a same-directory
//! temp file and a rename, so a partial write is never observable. There is
//! no transaction across the read and the write, so concurrent appends are
//! last-writer-wins, accepted for a single-user, single-device store.

use std::fs;
use std::path::PathBuf;

use chrono::Utc;

use th_core::entities::{HistoryEntry, IdentityRecord};
use th_core::enums::{HistoryKind, HistoryStatus};
use th_core::ids::{PREFIX_HISTORY, generate_id};

use crate::error::SessionError;

/// Maximum number of history entries kept per identity. Appending beyond
/// this silently drops the oldest entry.
pub const HISTORY_CAPACITY: usize = 10;

const SESSION_DIR: &str = ".trusthire";
const SESSION_FILE_NAME: &str = "session.json";

/// The single-slot persisted identity store.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Open a store at an explicit slot path (tests, config override).
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open the store at the default location, `~/.trusthire/session.json`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Store` if the home directory cannot be resolved.
    pub fn open_default() -> Result<Self, SessionError> {
        let home = dirs::home_dir().ok_or_else(|| {
            SessionError::Store("home directory not found — cannot locate session slot".into())
        })?;
        Ok(Self {
            path: home.join(SESSION_DIR).join(SESSION_FILE_NAME),
        })
    }

    /// Read the current identity. Absent slot file means no identity.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Corrupt` if the slot exists but does not
    /// deserialize, or `SessionError::Store` on I/O failure.
    pub fn current(&self) -> Result<Option<IdentityRecord>, SessionError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            SessionError::Store(format!("read {}: {e}", self.path.display()))
        })?;
        if contents.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&contents)?))
    }

    /// Fully overwrite the slot with `record` (sign-in/sign-up). No merge.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Store` on I/O failure.
    pub fn replace(&self, record: &IdentityRecord) -> Result<(), SessionError> {
        self.write_slot(record)
    }

    /// Overwrite the stored record's skill list. History is untouched.
    ///
    /// Returns the updated record, or `None` if no identity is current.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` on read or write failure.
    pub fn update_skills(
        &self,
        skills: Vec<String>,
    ) -> Result<Option<IdentityRecord>, SessionError> {
        let Some(mut record) = self.current()? else {
            return Ok(None);
        };
        record.skills = skills;
        self.write_slot(&record)?;
        Ok(Some(record))
    }

    /// Prepend a history entry with a fresh ID and the current timestamp,
    /// truncating to the most recent [`HISTORY_CAPACITY`] entries.
    ///
    /// Appending with no current identity is a silent no-op, not an error.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` on read/write failure or if ID generation fails.
    pub fn append_history(
        &self,
        kind: HistoryKind,
        title: impl Into<String>,
        status: HistoryStatus,
    ) -> Result<Option<IdentityRecord>, SessionError> {
        let Some(mut record) = self.current()? else {
            tracing::debug!(kind = %kind, "no active identity; history append skipped");
            return Ok(None);
        };

        let entry = HistoryEntry {
            id: generate_id(PREFIX_HISTORY)?,
            kind,
            title: title.into(),
            status,
            timestamp: Utc::now(),
        };
        record.history.insert(0, entry);
        record.history.truncate(HISTORY_CAPACITY);

        self.write_slot(&record)?;
        Ok(Some(record))
    }

    /// Remove the current identity (sign-out). A missing slot is fine.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Store` if the slot file cannot be removed.
    pub fn clear(&self) -> Result<(), SessionError> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|e| {
                SessionError::Store(format!("delete {}: {e}", self.path.display()))
            })?;
        }
        Ok(())
    }

    /// Serialize and write the record through a temp file + rename.
    fn write_slot(&self, record: &IdentityRecord) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SessionError::Store(format!("mkdir {}: {e}", parent.display()))
            })?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                if let Err(e) = fs::set_permissions(parent, fs::Permissions::from_mode(0o700)) {
                    tracing::warn!("failed to chmod 0700 {}: {e}", parent.display());
                }
            }
        }

        let json = serde_json::to_string_pretty(record)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)
            .map_err(|e| SessionError::Store(format!("write {}: {e}", tmp.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp, fs::Permissions::from_mode(0o600))
                .map_err(|e| SessionError::Store(format!("chmod {}: {e}", tmp.display())))?;
        }

        fs::rename(&tmp, &self.path).map_err(|e| {
            SessionError::Store(format!("rename into {}: {e}", self.path.display()))
        })
    }
}

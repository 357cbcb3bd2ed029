use crate::db::KeyValueStore;
use crate::error::{JournalResult, StorageError};
use crate::models::{EntryRecord, MoodEntry, MoodLog};

pub const DEFAULT_SLOT_KEY: &str = "moodHistory";

/// Owns the mood log and keeps its persisted slot in step with it.
///
/// Write failures do not roll back the in-memory log: after a failed
/// `append` the entry is still visible and the error is returned so the
/// caller can warn the user.
pub struct MoodStore {
    storage: Box<dyn KeyValueStore>,
    key: String,
    log: MoodLog,
}

impl MoodStore {
    /// Opens the store and rehydrates the log from the slot.
    pub fn open(storage: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let mut store = Self {
            storage,
            key: key.into(),
            log: MoodLog::new(),
        };
        store.log = store.load();
        store
    }

    /// Reads the slot. Absent, unreadable, or malformed data yields an empty log.
    pub fn load(&self) -> MoodLog {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return MoodLog::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Could not read mood history, starting empty");
                return MoodLog::new();
            }
        };

        match MoodLog::from_json(&raw) {
            Ok(log) => {
                tracing::debug!(key = %self.key, entries = log.len(), "Mood history loaded");
                log
            }
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Malformed mood history, treating as empty");
                MoodLog::new()
            }
        }
    }

    pub fn append(&mut self, entry: MoodEntry) -> JournalResult<&MoodLog> {
        tracing::info!(mood = %entry.mood, timestamp = %entry.timestamp, "Mood logged");
        self.log.push(entry);
        self.save()?;
        Ok(&self.log)
    }

    /// Appends an unvalidated record; an unknown mood is rejected before
    /// anything changes.
    pub fn append_record(&mut self, record: EntryRecord) -> JournalResult<&MoodLog> {
        let entry = MoodEntry::from_record(record)?;
        self.append(entry)
    }

    /// Empties the log and removes the slot entirely.
    pub fn clear(&mut self) -> JournalResult<()> {
        let dropped = self.log.len();
        self.log.clear();
        self.storage.remove(&self.key)?;
        tracing::info!(key = %self.key, dropped, "Mood history cleared");
        Ok(())
    }

    pub fn current_log(&self) -> &MoodLog {
        &self.log
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    fn save(&self) -> JournalResult<()> {
        let raw = self.log.to_json().map_err(StorageError::from)?;
        self.storage.set(&self.key, &raw)?;
        Ok(())
    }
}

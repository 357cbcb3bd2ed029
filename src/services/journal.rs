use serde::Serialize;

use crate::db::KeyValueStore;
use crate::error::{JournalError, JournalResult};
use crate::models::mood::lookup_name;
use crate::models::{MoodEntry, MoodKind, MoodLog};
use crate::services::analysis::{analyze, Analysis};
use crate::services::clock::Clock;
use crate::services::store::MoodStore;
use crate::services::views::{history_view, stats_view, HistoryItem, StatsRow};

pub const NEUTRAL_COLOR: &str = "#f8f8f2";
pub const WARNING_COLOR: &str = "#ff6b6b";
pub const EMPTY_HISTORY_MESSAGE: &str = "No vibe history yet. Log your first vibe!";
pub const CLEAR_CONFIRMATION_PROMPT: &str =
    "Are you sure you want to clear your vibe history? This cannot be undone.";

/// Status line shown to the user after an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VibeMessage {
    pub text: String,
    pub color: &'static str,
}

impl VibeMessage {
    fn new(text: impl Into<String>, color: &'static str) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(text, WARNING_COLOR)
    }
}

/// Session state for one mood journal: the store plus the transient selection.
pub struct Journal {
    store: MoodStore,
    clock: Box<dyn Clock>,
    selected: Option<MoodKind>,
}

impl Journal {
    /// Rehydrates the log from `storage` under `key`.
    pub fn open(storage: Box<dyn KeyValueStore>, clock: Box<dyn Clock>, key: impl Into<String>) -> Self {
        let store = MoodStore::open(storage, key);
        tracing::info!(
            key = %store.key(),
            entries = store.current_log().len(),
            "Mood journal opened"
        );
        Self {
            store,
            clock,
            selected: None,
        }
    }

    pub fn selected(&self) -> Option<MoodKind> {
        self.selected
    }

    pub fn select(&mut self, kind: MoodKind) -> VibeMessage {
        self.selected = Some(kind);
        let info = kind.info();
        VibeMessage::new(info.selection_message, info.color)
    }

    /// Selects by name; an unknown name leaves the selection untouched.
    pub fn select_name(&mut self, name: &str) -> JournalResult<VibeMessage> {
        let info = lookup_name(name)?;
        Ok(self.select(info.kind))
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Logs the selected mood at the current time.
    ///
    /// The selection is cleared as soon as the entry is in the log, even if
    /// saving it then fails, so a retry cannot log the same pick twice.
    pub fn log_selected(&mut self) -> JournalResult<VibeMessage> {
        let kind = self.selected.ok_or(JournalError::NothingSelected)?;
        let entry = MoodEntry::new(kind, self.clock.now());
        let saved = self.store.append(entry).map(|_| ());
        self.selected = None;
        saved?;

        let info = kind.info();
        Ok(VibeMessage::new(
            format!("Your {} vibe has been logged! {}", kind, info.emoji),
            info.color,
        ))
    }

    pub fn analysis(&self) -> Option<Analysis> {
        analyze(self.store.current_log())
    }

    pub fn analyze(&self) -> VibeMessage {
        match self.analysis() {
            Some(analysis) => VibeMessage::new(analysis.message, analysis.mood.info().color),
            None => VibeMessage::new(
                "No mood data to analyze. Log some moods first!",
                NEUTRAL_COLOR,
            ),
        }
    }

    /// Wipes the history. Asking the user to confirm is the caller's job.
    pub fn clear(&mut self) -> JournalResult<VibeMessage> {
        self.store.clear()?;
        Ok(VibeMessage::new(
            "Vibe history cleared! Start fresh with a new vibe.",
            NEUTRAL_COLOR,
        ))
    }

    pub fn log(&self) -> &MoodLog {
        self.store.current_log()
    }

    pub fn history(&self) -> Vec<HistoryItem> {
        history_view(self.store.current_log())
    }

    pub fn stats(&self) -> Vec<StatsRow> {
        stats_view(self.store.current_log())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::services::clock::FixedClock;
    use crate::services::store::DEFAULT_SLOT_KEY;
    use chrono::{TimeZone, Utc};

    fn journal_with(storage: MemoryStore) -> Journal {
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap());
        Journal::open(Box::new(storage), Box::new(clock), DEFAULT_SLOT_KEY)
    }

    #[test]
    fn test_select_returns_mood_message() {
        let mut journal = journal_with(MemoryStore::new());
        let msg = journal.select(MoodKind::Lit);
        assert_eq!(msg.text, "Feeling lit! Today is absolutely fire! 🔥");
        assert_eq!(msg.color, "#ffdd59");
        assert_eq!(journal.selected(), Some(MoodKind::Lit));
    }

    #[test]
    fn test_select_unknown_name_keeps_selection() {
        let mut journal = journal_with(MemoryStore::new());
        journal.select(MoodKind::Meh);
        let err = journal.select_name("grumpy").unwrap_err();
        assert!(matches!(err, JournalError::UnknownMoodKind(_)));
        assert_eq!(journal.selected(), Some(MoodKind::Meh));
    }

    #[test]
    fn test_log_without_selection_is_rejected() {
        let mut journal = journal_with(MemoryStore::new());
        let err = journal.log_selected().unwrap_err();
        assert!(matches!(err, JournalError::NothingSelected));
        assert_eq!(err.to_string(), "Please select a mood first!");
        assert!(journal.log().is_empty());
    }

    #[test]
    fn test_log_selected_appends_and_resets_selection() {
        let storage = MemoryStore::new();
        let mut journal = journal_with(storage.clone());
        journal.select_name("good").unwrap();

        let msg = journal.log_selected().unwrap();

        assert_eq!(msg.text, "Your good vibe has been logged! 😊");
        assert_eq!(msg.color, "#78e08f");
        assert_eq!(journal.selected(), None);
        let entry = journal.log().last().unwrap();
        assert_eq!(entry.mood, MoodKind::Good);
        assert_eq!(entry.timestamp, Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap());

        // The slot holds the new entry.
        let reopened = journal_with(storage);
        assert_eq!(reopened.log(), journal.log());
    }

    #[test]
    fn test_sub_millisecond_clock_reloads_identically() {
        let storage = MemoryStore::new();
        let clock = FixedClock(Utc.timestamp_opt(1_718_452_800, 987_654_321).unwrap());
        let mut journal = Journal::open(Box::new(storage.clone()), Box::new(clock), DEFAULT_SLOT_KEY);
        journal.select(MoodKind::Meh);
        journal.log_selected().unwrap();

        let reopened = journal_with(storage);

        assert_eq!(reopened.log(), journal.log());
        assert_eq!(journal.log().last().unwrap().timestamp.timestamp_subsec_millis(), 987);
    }

    #[test]
    fn test_failed_clear_still_empties_log() {
        let storage = MemoryStore::new();
        let mut journal = journal_with(storage.clone());
        journal.select(MoodKind::Good);
        journal.log_selected().unwrap();
        storage.set_read_only(true);

        let err = journal.clear().unwrap_err();

        assert!(matches!(err, JournalError::Persistence(_)));
        assert!(journal.log().is_empty());
        assert!(journal.history().is_empty());
    }

    #[test]
    fn test_failed_save_keeps_entry_and_clears_selection() {
        let mut journal = journal_with(MemoryStore::with_quota(16));
        journal.select(MoodKind::Sad);

        let err = journal.log_selected().unwrap_err();

        assert!(matches!(err, JournalError::Persistence(_)));
        assert_eq!(journal.log().len(), 1);
        assert_eq!(journal.selected(), None);
        assert_eq!(journal.history().len(), 1);
    }

    #[test]
    fn test_analyze_empty_and_populated() {
        let mut journal = journal_with(MemoryStore::new());
        let msg = journal.analyze();
        assert_eq!(msg.text, "No mood data to analyze. Log some moods first!");

        for kind in [MoodKind::Angy, MoodKind::Lit, MoodKind::Angy] {
            journal.select(kind);
            journal.log_selected().unwrap();
        }

        let msg = journal.analyze();
        assert!(msg.text.starts_with("Based on 3 entries, your most common vibe is angy 😠."));
        assert_eq!(msg.color, "#ff6b6b");
    }

    #[test]
    fn test_clear_empties_log_and_slot() {
        let storage = MemoryStore::new();
        let mut journal = journal_with(storage.clone());
        journal.select(MoodKind::Good);
        journal.log_selected().unwrap();

        let msg = journal.clear().unwrap();

        assert_eq!(msg.text, "Vibe history cleared! Start fresh with a new vibe.");
        assert!(journal.log().is_empty());
        assert!(journal.stats().is_empty());
        assert!(journal_with(storage).log().is_empty());
    }
}

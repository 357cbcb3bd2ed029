use chrono::{DateTime, Local, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

use crate::error::JournalError;
use crate::models::mood::MoodKind;

/// One logged mood. Field names match the persisted slot layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub mood: MoodKind,
    #[serde(with = "timestamp_millis")]
    pub timestamp: DateTime<Utc>,
    /// Locale-formatted date, for display only.
    pub date: String,
}

impl MoodEntry {
    /// Build an entry for `at`, formatting the display date in local time.
    /// The timestamp is cut to whole milliseconds, the precision of the slot.
    pub fn new(mood: MoodKind, at: DateTime<Utc>) -> Self {
        let at = at.trunc_subsecs(3);
        Self {
            mood,
            timestamp: at,
            date: display_date(at),
        }
    }

    /// Validate a wire record. Unknown moods are rejected.
    pub fn from_record(record: EntryRecord) -> Result<Self, JournalError> {
        let mood = record
            .mood
            .parse::<MoodKind>()
            .map_err(|_| JournalError::InvalidMoodKind(record.mood.clone()))?;
        Ok(Self {
            mood,
            timestamp: record.timestamp,
            date: record.date,
        })
    }
}

/// Unvalidated entry as received from outside the core.
#[derive(Debug, Clone, Deserialize)]
pub struct EntryRecord {
    pub mood: String,
    #[serde(with = "timestamp_millis")]
    pub timestamp: DateTime<Utc>,
    pub date: String,
}

/// `M/D/YYYY` in the local timezone.
pub fn display_date(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%-m/%-d/%Y").to_string()
}

/// Ordered mood history, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoodLog(Vec<MoodEntry>);

impl MoodLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[MoodEntry] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn last(&self) -> Option<&MoodEntry> {
        self.0.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MoodEntry> {
        self.0.iter()
    }

    pub(crate) fn push(&mut self, entry: MoodEntry) {
        self.0.push(entry);
    }

    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }

    /// Serialize to the persisted JSON array.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse the persisted JSON array. Any malformed entry fails the whole parse.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

impl From<Vec<MoodEntry>> for MoodLog {
    fn from(entries: Vec<MoodEntry>) -> Self {
        Self(entries)
    }
}

impl<'a> IntoIterator for &'a MoodLog {
    type Item = &'a MoodEntry;
    type IntoIter = std::slice::Iter<'a, MoodEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// RFC 3339 with millisecond precision and a `Z` suffix,
/// e.g. `2024-01-01T12:00:00.000Z`.
mod timestamp_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

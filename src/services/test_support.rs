use chrono::{TimeZone, Utc};

use crate::models::{MoodEntry, MoodKind, MoodLog};

/// One entry per day starting 2024-01-01, dated `1/{day}/2024`.
pub fn log_of(moods: &[MoodKind]) -> MoodLog {
    moods
        .iter()
        .enumerate()
        .map(|(i, mood)| MoodEntry {
            mood: *mood,
            timestamp: Utc
                .timestamp_opt(1_704_067_200 + i as i64 * 86_400, 0)
                .unwrap(),
            date: format!("1/{}/2024", i + 1),
        })
        .collect::<Vec<_>>()
        .into()
}

use serde::Serialize;

use crate::models::{MoodKind, MoodLog};
use crate::services::aggregate::{count_by_mood, percent_of};

pub const TOTAL_EMOJI: &str = "📊";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryItem {
    pub mood: MoodKind,
    pub emoji: &'static str,
    pub label: String,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatsRow {
    Mood {
        mood: MoodKind,
        emoji: &'static str,
        color: &'static str,
        percentage: u32,
        count: usize,
    },
    Total {
        emoji: &'static str,
        count: usize,
    },
}

/// Log entries newest first, ready to render.
pub fn history_view(log: &MoodLog) -> Vec<HistoryItem> {
    log.iter()
        .rev()
        .map(|entry| {
            let info = entry.mood.info();
            HistoryItem {
                mood: entry.mood,
                emoji: info.emoji,
                label: format!("{} vibe", entry.mood.as_str().to_uppercase()),
                date: entry.date.clone(),
            }
        })
        .collect()
}

/// One row per logged mood in catalog order, then a total row.
/// An empty log renders no rows at all.
pub fn stats_view(log: &MoodLog) -> Vec<StatsRow> {
    if log.is_empty() {
        return Vec::new();
    }

    let counts = count_by_mood(log);
    let mut rows: Vec<StatsRow> = MoodKind::ALL
        .into_iter()
        .filter_map(|kind| {
            let count = counts.get(kind)?;
            let info = kind.info();
            Some(StatsRow::Mood {
                mood: kind,
                emoji: info.emoji,
                color: info.color,
                percentage: percent_of(count, log.len()),
                count,
            })
        })
        .collect();

    rows.push(StatsRow::Total {
        emoji: TOTAL_EMOJI,
        count: log.len(),
    });
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MoodEntry;
    use crate::models::MoodKind::*;
    use crate::services::test_support::log_of;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_history_is_most_recent_first() {
        let log: MoodLog = vec![
            MoodEntry { mood: Lit, timestamp: Utc.timestamp_opt(1_704_067_200, 0).unwrap(), date: "1/1/2024".into() },
            MoodEntry { mood: Sad, timestamp: Utc.timestamp_opt(1_704_153_600, 0).unwrap(), date: "1/2/2024".into() },
        ]
        .into();

        let view = history_view(&log);

        assert_eq!(
            view,
            vec![
                HistoryItem { mood: Sad, emoji: "😔", label: "SAD vibe".into(), date: "1/2/2024".into() },
                HistoryItem { mood: Lit, emoji: "😎", label: "LIT vibe".into(), date: "1/1/2024".into() },
            ]
        );
    }

    #[test]
    fn test_stats_follow_catalog_order_then_total() {
        let log = log_of(&[Sad, Good, Good]);

        let rows = stats_view(&log);

        assert_eq!(
            rows,
            vec![
                StatsRow::Mood { mood: Good, emoji: "😊", color: "#78e08f", percentage: 67, count: 2 },
                StatsRow::Mood { mood: Sad, emoji: "😔", color: "#546de5", percentage: 33, count: 1 },
                StatsRow::Total { emoji: TOTAL_EMOJI, count: 3 },
            ]
        );
    }

    #[test]
    fn test_empty_log_renders_nothing() {
        assert!(history_view(&MoodLog::new()).is_empty());
        assert!(stats_view(&MoodLog::new()).is_empty());
    }

    #[test]
    fn test_views_are_idempotent() {
        let log = log_of(&[Angy, Meh, Angy, Lit]);
        assert_eq!(history_view(&log), history_view(&log));
        assert_eq!(stats_view(&log), stats_view(&log));
    }

    #[test]
    fn test_stats_row_json_shape() {
        let rows = stats_view(&log_of(&[Meh]));
        let json = serde_json::to_value(&rows).unwrap();
        assert_eq!(json[0]["kind"], "mood");
        assert_eq!(json[0]["mood"], "meh");
        assert_eq!(json[0]["percentage"], 100);
        assert_eq!(json[1]["kind"], "total");
        assert_eq!(json[1]["count"], 1);
    }
}

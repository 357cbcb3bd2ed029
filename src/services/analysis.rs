use serde::Serialize;

use crate::models::mood::lookup;
use crate::models::{MoodKind, MoodLog};
use crate::services::aggregate::count_by_mood;

/// Result of analyzing the whole log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub mood: MoodKind,
    pub count: usize,
    pub total: usize,
    pub message: String,
}

/// The most logged mood. Ties go to the mood that appears first in the log.
pub fn most_frequent(log: &MoodLog) -> Option<MoodKind> {
    let counts = count_by_mood(log);
    let mut best: Option<(MoodKind, usize)> = None;
    // Counts iterate in first-occurrence order; strict `>` keeps the earliest on ties.
    for (kind, count) in counts.iter() {
        if best.map_or(true, |(_, max)| count > max) {
            best = Some((kind, count));
        }
    }
    best.map(|(kind, _)| kind)
}

pub fn advice_for(kind: MoodKind) -> &'static str {
    lookup(kind).advice
}

/// Most frequent mood plus the canned summary. `None` on an empty log.
pub fn analyze(log: &MoodLog) -> Option<Analysis> {
    let mood = most_frequent(log)?;
    let count = count_by_mood(log).get(mood).unwrap_or(0);
    let message = format!(
        "Based on {} entries, your most common vibe is {} {}. {}",
        log.len(),
        mood,
        mood.info().emoji,
        advice_for(mood)
    );
    Some(Analysis {
        mood,
        count,
        total: log.len(),
        message,
    })
}

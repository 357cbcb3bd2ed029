use crate::models::{MoodKind, MoodLog};

/// Per-mood tallies over a log. Moods that never occur are absent.
///
/// Iteration order is the order in which each mood first appears in the log.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoodCounts {
    counts: Vec<(MoodKind, usize)>,
    total: usize,
}

impl MoodCounts {
    pub fn get(&self, kind: MoodKind) -> Option<usize> {
        self.counts
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (MoodKind, usize)> + '_ {
        self.counts.iter().copied()
    }

    /// Number of distinct moods present.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of entries counted.
    pub fn total(&self) -> usize {
        self.total
    }
}

pub fn count_by_mood(log: &MoodLog) -> MoodCounts {
    let mut counts: Vec<(MoodKind, usize)> = Vec::new();
    for entry in log {
        match counts.iter_mut().find(|(k, _)| *k == entry.mood) {
            Some((_, count)) => *count += 1,
            None => counts.push((entry.mood, 1)),
        }
    }
    MoodCounts {
        counts,
        total: log.len(),
    }
}

/// `count * 100 / total`, rounded half-up.
pub fn percent_of(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((count * 200 + total) / (2 * total)) as u32
}

/// Rounded share of each present mood, in first-occurrence order.
///
/// Each share is rounded on its own, so the values may sum to 99 or 101.
/// Empty for an empty log.
pub fn percentages(log: &MoodLog) -> Vec<(MoodKind, u32)> {
    let counts = count_by_mood(log);
    counts
        .iter()
        .map(|(kind, count)| (kind, percent_of(count, counts.total())))
        .collect()
}

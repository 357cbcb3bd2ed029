pub mod entry;
pub mod mood;

pub use entry::{EntryRecord, MoodEntry, MoodLog};
pub use mood::{MoodInfo, MoodKind};

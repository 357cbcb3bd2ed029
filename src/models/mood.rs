use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::JournalError;

/// The fixed set of moods a user can log, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodKind {
    Lit,
    Good,
    Meh,
    Sad,
    Angy,
}

/// Display metadata attached to every mood kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoodInfo {
    pub kind: MoodKind,
    pub emoji: &'static str,
    pub color: &'static str,
    pub selection_message: &'static str,
    pub advice: &'static str,
}

static CATALOG: [MoodInfo; 5] = [
    MoodInfo {
        kind: MoodKind::Lit,
        emoji: "😎",
        color: "#ffdd59",
        selection_message: "Feeling lit! Today is absolutely fire! 🔥",
        advice: "You're consistently vibing! Keep spreading that positive energy! ✨",
    },
    MoodInfo {
        kind: MoodKind::Good,
        emoji: "😊",
        color: "#78e08f",
        selection_message: "Good vibes only! You're slaying! 💅",
        advice: "Your energy is mostly positive! Remember to hydrate and slay! 💅",
    },
    MoodInfo {
        kind: MoodKind::Meh,
        emoji: "😐",
        color: "#f6b93b",
        selection_message: "It's a meh day. That's valid. 🤷‍♀️",
        advice: "Lots of meh days. Maybe try something new to spice things up? 🌶️",
    },
    MoodInfo {
        kind: MoodKind::Sad,
        emoji: "😔",
        color: "#546de5",
        selection_message: "Sending virtual hugs! It's okay to not be okay. 🫂",
        advice: "You've had some tough times. Remember, it's okay to ask for help. 🫂",
    },
    MoodInfo {
        kind: MoodKind::Angy,
        emoji: "😠",
        color: "#ff6b6b",
        selection_message: "Big angy energy! Let's channel that into something positive. 💪",
        advice: "You've been feeling frustrated. Channel that energy into something creative! 🎨",
    },
];

impl MoodKind {
    pub const ALL: [MoodKind; 5] = [
        MoodKind::Lit,
        MoodKind::Good,
        MoodKind::Meh,
        MoodKind::Sad,
        MoodKind::Angy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            MoodKind::Lit => "lit",
            MoodKind::Good => "good",
            MoodKind::Meh => "meh",
            MoodKind::Sad => "sad",
            MoodKind::Angy => "angy",
        }
    }

    /// Position in catalog order.
    fn index(self) -> usize {
        match self {
            MoodKind::Lit => 0,
            MoodKind::Good => 1,
            MoodKind::Meh => 2,
            MoodKind::Sad => 3,
            MoodKind::Angy => 4,
        }
    }

    pub fn info(self) -> &'static MoodInfo {
        lookup(self)
    }
}

impl fmt::Display for MoodKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoodKind {
    type Err = JournalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MoodKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| JournalError::UnknownMoodKind(s.to_string()))
    }
}

/// Metadata for a mood kind. Total over the enumeration.
pub fn lookup(kind: MoodKind) -> &'static MoodInfo {
    &CATALOG[kind.index()]
}

/// Metadata for a mood given by name, e.g. from a UI option attribute.
pub fn lookup_name(name: &str) -> Result<&'static MoodInfo, JournalError> {
    name.parse::<MoodKind>().map(lookup)
}

/// The whole catalog in enumeration order.
pub fn catalog() -> &'static [MoodInfo] {
    &CATALOG
}

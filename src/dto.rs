//! Request/response shapes of the JSON API.

use serde::{Deserialize, Serialize};

use crate::models::MoodInfo;
use crate::services::analysis::Analysis;
use crate::services::journal::VibeMessage;
use crate::services::views::{HistoryItem, StatsRow};

/// PUT /api/selection
#[derive(Debug, Deserialize)]
pub struct SelectRequest {
    /// Mood name as rendered on the option, e.g. "good".
    pub mood: String,
}

/// DELETE /api/history
#[derive(Debug, Deserialize, Default)]
pub struct ClearQuery {
    #[serde(default)]
    pub confirm: bool,
}

/// GET /api/moods
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub moods: &'static [MoodInfo],
}

/// Any action answered with a status line.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: VibeMessage,
}

/// POST /api/log
#[derive(Debug, Serialize)]
pub struct LogResponse {
    pub message: VibeMessage,
    pub persisted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub history: Vec<HistoryItem>,
    pub stats: Vec<StatsRow>,
}

/// GET /api/history
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub entries: Vec<HistoryItem>,
    /// Placeholder text when there are no entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
}

/// GET /api/stats
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub rows: Vec<StatsRow>,
}

/// GET /api/analysis
#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub message: VibeMessage,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Analysis>,
}

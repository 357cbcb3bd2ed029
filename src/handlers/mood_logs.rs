use axum::{
    extract::{Query, State},
    Json,
};

use crate::dto::{CatalogResponse, ClearQuery, HistoryResponse, LogResponse, MessageResponse};
use crate::error::{AppError, AppResult, JournalError};
use crate::models::mood::catalog;
use crate::services::journal::{VibeMessage, CLEAR_CONFIRMATION_PROMPT, EMPTY_HISTORY_MESSAGE};
use crate::AppState;

pub async fn list_moods() -> Json<CatalogResponse> {
    Json(CatalogResponse { moods: catalog() })
}

/// Logs the current selection. A failed save still answers 200 with
/// `persisted: false`, since the entry stays in the session's log.
pub async fn log_mood(State(state): State<AppState>) -> AppResult<Json<LogResponse>> {
    let mut journal = state.journal.lock().await;

    let (message, warning) = match journal.log_selected() {
        Ok(message) => (message, None),
        Err(JournalError::Persistence(e)) => {
            tracing::warn!(error = %e, "Mood logged but not saved");
            let mood = journal
                .log()
                .last()
                .map(|entry| entry.mood.to_string())
                .unwrap_or_default();
            (
                VibeMessage::warning(format!(
                    "Your {} vibe was logged, but it could not be saved.",
                    mood
                )),
                Some(e.to_string()),
            )
        }
        Err(e) => return Err(e.into()),
    };

    Ok(Json(LogResponse {
        message,
        persisted: warning.is_none(),
        warning,
        history: journal.history(),
        stats: journal.stats(),
    }))
}

pub async fn get_history(State(state): State<AppState>) -> Json<HistoryResponse> {
    let journal = state.journal.lock().await;
    let entries = journal.history();
    let empty_message = entries.is_empty().then_some(EMPTY_HISTORY_MESSAGE);
    Json(HistoryResponse {
        entries,
        empty_message,
    })
}

/// Clearing cannot be undone, so the caller must pass `?confirm=true`.
pub async fn clear_history(
    State(state): State<AppState>,
    Query(query): Query<ClearQuery>,
) -> AppResult<Json<MessageResponse>> {
    if !query.confirm {
        return Err(AppError::Validation(CLEAR_CONFIRMATION_PROMPT.into()));
    }

    let message = state.journal.lock().await.clear()?;
    Ok(Json(MessageResponse { message }))
}

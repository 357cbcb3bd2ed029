use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use crate::dto::{MessageResponse, SelectRequest};
use crate::error::AppResult;
use crate::AppState;

pub async fn select_mood(
    State(state): State<AppState>,
    body: Result<Json<SelectRequest>, JsonRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Json(body) = body?;
    let mut journal = state.journal.lock().await;
    let message = journal.select_name(&body.mood)?;
    tracing::debug!(mood = %body.mood, "Mood selected");
    Ok(Json(MessageResponse { message }))
}

pub async fn clear_selection(State(state): State<AppState>) -> StatusCode {
    state.journal.lock().await.deselect();
    StatusCode::NO_CONTENT
}

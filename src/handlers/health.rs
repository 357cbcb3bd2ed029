use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let entries = state.journal.lock().await.log().len();
    Json(json!({
        "status": "ok",
        "service": "mood-journal",
        "version": env!("CARGO_PKG_VERSION"),
        "storage_key": state.config.storage_key,
        "entries": entries,
    }))
}

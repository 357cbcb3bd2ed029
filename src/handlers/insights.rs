use axum::{extract::State, Json};

use crate::dto::{AnalysisResponse, StatsResponse};
use crate::AppState;

pub async fn get_stats(State(state): State<AppState>) -> Json<StatsResponse> {
    let journal = state.journal.lock().await;
    Json(StatsResponse {
        rows: journal.stats(),
    })
}

pub async fn get_analysis(State(state): State<AppState>) -> Json<AnalysisResponse> {
    let journal = state.journal.lock().await;
    Json(AnalysisResponse {
        message: journal.analyze(),
        analysis: journal.analysis(),
    })
}

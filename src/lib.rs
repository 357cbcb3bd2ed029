//! Mood journal: pick a mood, log it to a local slot, review history,
//! stats and a most-common-mood analysis.
//!
//! The core (`models`, `db`, `services`) is synchronous and side-effect free
//! apart from the key-value slot it owns. `handlers` is a thin JSON shell over
//! [`services::journal::Journal`].

use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tokio::sync::Mutex;

pub mod config;
pub mod db;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;

use config::Config;
use services::journal::Journal;

#[derive(Clone)]
pub struct AppState {
    /// Every request runs against the journal to completion under this lock.
    pub journal: Arc<Mutex<Journal>>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(journal: Journal, config: Config) -> Self {
        Self {
            journal: Arc::new(Mutex::new(journal)),
            config: Arc::new(config),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/api/moods", get(handlers::mood_logs::list_moods))
        .route(
            "/api/selection",
            put(handlers::selection::select_mood).delete(handlers::selection::clear_selection),
        )
        .route("/api/log", post(handlers::mood_logs::log_mood))
        .route(
            "/api/history",
            get(handlers::mood_logs::get_history).delete(handlers::mood_logs::clear_history),
        )
        .route("/api/stats", get(handlers::insights::get_stats))
        .route("/api/analysis", get(handlers::insights::get_analysis))
        .with_state(state)
}

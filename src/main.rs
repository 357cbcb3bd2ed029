use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use mood_journal::config::Config;
use mood_journal::db::FileStore;
use mood_journal::services::clock::SystemClock;
use mood_journal::services::journal::Journal;
use mood_journal::{router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mood_journal=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let config = Config::from_env()?;

    let storage = FileStore::open(&config.data_dir)?;
    tracing::info!(data_dir = %storage.dir().display(), "Using file-backed mood storage");
    let journal = Journal::open(
        Box::new(storage),
        Box::new(SystemClock),
        config.storage_key.clone(),
    );

    let cors = CorsLayer::new()
        .allow_origin(config.frontend_url.parse::<axum::http::HeaderValue>()?)
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::PUT,
            axum::http::Method::DELETE,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ]);

    let addr = config.listen_addr();
    let app = router(AppState::new(journal, config))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// Logsift Web Backend
// HTTP surface for the log analysis pipeline: JSON and multipart analyze
// endpoints plus a static health check.

pub mod config;
pub mod error;
pub mod handlers;

pub use config::WebConfig;
pub use error::{AppError, ErrorResponse};

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use logsift_core::{Analyzer, ChatConfig, OllamaClient};

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
    pub config: WebConfig,
}

/// Build the application router around an already-constructed analyzer.
/// Tests call this with a scripted chat provider behind the analyzer.
pub fn create_app(analyzer: Arc<Analyzer>, config: WebConfig) -> Router {
    let cors = if config.allows_any_origin() {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    Router::new()
        .route("/health", get(handlers::health))
        .route("/analyze", post(handlers::analyze))
        .route("/analyze-file", post(handlers::analyze_file))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors)
                .layer(DefaultBodyLimit::max(config.max_upload_size)),
        )
        .with_state(AppState { analyzer, config })
}

/// Start the web server: load configuration from the environment, construct
/// the chat client, and serve until shutdown.
pub async fn start_server() -> anyhow::Result<()> {
    // try_init so embedders and tests that already installed a subscriber
    // do not panic.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let config = WebConfig::load()?;
    let chat_config = ChatConfig::load()?;
    tracing::info!(
        "Chat service: {} (model {}, timeout {}s)",
        chat_config.base_url,
        chat_config.model,
        chat_config.timeout_secs
    );

    let provider = OllamaClient::new(chat_config)?;
    let analyzer = Arc::new(Analyzer::new(Box::new(provider)));
    let app = create_app(analyzer, config.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Logsift web server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}

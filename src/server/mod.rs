//! HTTP adapter over the generation orchestrator
//!
//! Routes:
//! - `POST /` generates a license from a JSON or form body, returns plain text
//! - `GET /variants` lists installed license variants
//! - `GET /health` liveness probe
//! - `GET /themes/*` static theme assets

pub mod payload;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Datelike;
use serde::Serialize;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::{error, info, warn};

use crate::generation::{GenerationError, GenerationOrchestrator, RawLicenseParams};
use payload::LicensePayload;

/// Shared server state
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<GenerationOrchestrator>,
    /// Values used for fields a request leaves out
    pub defaults: Arc<RawLicenseParams>,
}

impl AppState {
    pub fn new(orchestrator: Arc<GenerationOrchestrator>, defaults: RawLicenseParams) -> Self {
        Self {
            orchestrator,
            defaults: Arc::new(defaults),
        }
    }
}

/// Server settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub themes_dir: PathBuf,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Build the application router
pub fn create_router(state: AppState, themes_dir: PathBuf) -> Router {
    Router::new()
        .route("/", post(generate_license))
        .route("/variants", get(list_variants))
        .route("/health", get(health_check))
        .nest_service("/themes", ServeDir::new(themes_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until the process is stopped
pub async fn serve(state: AppState, config: ServerConfig) -> std::io::Result<()> {
    let app = create_router(state, config.themes_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "License server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

async fn generate_license(
    State(state): State<AppState>,
    LicensePayload(body): LicensePayload,
) -> Response {
    let params = match body.into_params() {
        Ok(params) => state.defaults.as_ref().clone().merge(params),
        Err(e) => return error_response(e),
    };

    if !params.has_copyright_holder() {
        return error_response(GenerationError::MissingCopyrightHolder);
    }

    let reference_year = chrono::Local::now().year();
    // Filesystem templates are read synchronously during rendering
    let orchestrator = Arc::clone(&state.orchestrator);
    let generated =
        tokio::task::spawn_blocking(move || orchestrator.generate(&params, reference_year)).await;

    match generated {
        Ok(Ok(text)) => (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            text.into_string(),
        )
            .into_response(),
        Ok(Err(e)) => error_response(e),
        Err(join_error) => {
            error!(error = %join_error, "License generation task failed");
            error_body(
                StatusCode::INTERNAL_SERVER_ERROR,
                "License generation failed".to_string(),
            )
        }
    }
}

async fn list_variants(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.orchestrator.variants())
}

async fn health_check() -> &'static str {
    "ok"
}

fn error_response(error: GenerationError) -> Response {
    let status = if error.is_user_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    warn!(status = %status, error = %error, "License generation request failed");

    error_body(status, error.to_string())
}

/// `{"error": message}` with the given status
pub(crate) fn error_body(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorBody { error: message })).into_response()
}

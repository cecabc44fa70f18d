use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config_manager::Language;
use crate::error::ApiError;
use crate::state::AppState;
use crate::translate::{TranslateRequest, TranslateResponse};

pub const LIVENESS_MESSAGE: &str = "Server is alive and responding!";

/// Full application: routes, CORS, request tracing and state
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes(&state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub fn create_routes(state: &AppState) -> Router<AppState> {
    let system_config = &state.config.system_config;

    Router::new()
        // Liveness
        .route("/", get(liveness))
        .route("/api/health", get(health_check))

        // Translation API
        .route("/translate", post(translate))
        .route("/api/languages", get(get_languages))

        // Browser client
        .nest_service("/app", ServeDir::new(system_config.static_path()))
}

async fn liveness() -> &'static str {
    info!("GET / endpoint hit");
    LIVENESS_MESSAGE
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let llm = &state.config.llm_config;
    Json(json!({
        "status": "ok",
        "provider": llm.provider,
        "model": llm.model
    }))
}

async fn get_languages(State(state): State<AppState>) -> Json<Vec<Language>> {
    Json(state.config.translation_config.languages.clone())
}

async fn translate(
    State(state): State<AppState>,
    payload: Result<Json<TranslateRequest>, JsonRejection>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!(
                "Rejected /translate body ({}): {}",
                rejection.status(),
                rejection.body_text()
            );
            return Err(ApiError::MissingFields);
        }
    };

    let request = request.validate().ok_or(ApiError::MissingFields)?;
    let translation = state.translator.translate(&request).await?;

    Ok(Json(TranslateResponse { translation }))
}

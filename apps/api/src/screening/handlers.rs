use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::candidate::{Candidate, ModelOption, Settings};
use crate::screening::dashboard::{compute_dashboard_stats, DashboardStats};
use crate::state::AppState;

/// Email recorded for manually entered applications; the intake form has no
/// email field.
const MANUAL_ENTRY_EMAIL: &str = "manual.entry@example.com";

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub name: String,
    #[serde(default)]
    pub role: String,
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Debug, Deserialize)]
pub struct ModelsQuery {
    /// Unsaved key typed into the settings form; overrides the stored one.
    pub api_key: Option<String>,
}

/// Settings as returned to clients. The key itself is never echoed back.
#[derive(Debug, Serialize)]
pub struct SettingsView {
    pub api_key_configured: bool,
    pub model: String,
}

impl From<Settings> for SettingsView {
    fn from(settings: Settings) -> Self {
        Self {
            api_key_configured: !settings.api_key.is_empty(),
            model: settings.model,
        }
    }
}

/// POST /api/v1/analyze
///
/// Runs one screening: validates input, delegates scoring to the analysis
/// provider, maps the recommendation to a status and appends the resulting
/// candidate. On any failure the store is left untouched.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<Candidate>, AppError> {
    if req.name.trim().is_empty()
        || req.resume_text.trim().is_empty()
        || req.job_description.trim().is_empty()
    {
        return Err(AppError::Validation(
            "name, resume_text and job_description are required".to_string(),
        ));
    }

    let settings = state.store.settings();
    if settings.api_key.is_empty() {
        return Err(AppError::MissingApiKey);
    }

    let token = state.store.begin_analysis();
    let analysis = state
        .provider
        .analyze_resume(
            &settings.api_key,
            &settings.model,
            &req.resume_text,
            &req.job_description,
        )
        .await?;

    let candidate = Candidate::from_analysis(
        req.name,
        req.role,
        MANUAL_ENTRY_EMAIL.to_string(),
        req.resume_text,
        req.job_description,
        analysis,
    );

    if !state.store.insert_if_current(token, candidate.clone()) {
        warn!("discarding analysis result superseded by a newer request");
        return Err(AppError::Superseded);
    }

    info!(
        candidate = %candidate.id,
        score = candidate.score,
        "candidate screened"
    );
    Ok(Json(candidate))
}

/// GET /api/v1/candidates — full collection, newest first.
pub async fn handle_list_candidates(State(state): State<AppState>) -> Json<Vec<Candidate>> {
    Json(state.store.candidates())
}

/// GET /api/v1/models
///
/// Lists usable models from the provider catalog, using the query-string key
/// if one was supplied (the settings form probes with an unsaved key) and the
/// stored key otherwise. A stale catalog response is discarded.
pub async fn handle_list_models(
    State(state): State<AppState>,
    Query(query): Query<ModelsQuery>,
) -> Result<Json<Vec<ModelOption>>, AppError> {
    let api_key = match query.api_key {
        Some(key) if !key.is_empty() => key,
        _ => state.store.settings().api_key,
    };
    if api_key.is_empty() {
        return Err(AppError::MissingApiKey);
    }

    let token = state.store.begin_catalog_fetch();
    let models = state.provider.list_models(&api_key).await?;
    if !state.store.catalog_token_current(token) {
        warn!("discarding model catalog superseded by a newer request");
        return Err(AppError::Superseded);
    }

    Ok(Json(models))
}

/// GET /api/v1/settings
pub async fn handle_get_settings(State(state): State<AppState>) -> Json<SettingsView> {
    Json(state.store.settings().into())
}

/// PUT /api/v1/settings — wholesale replacement, no validation; a bad key
/// surfaces on the next analysis call.
pub async fn handle_update_settings(
    State(state): State<AppState>,
    Json(settings): Json<Settings>,
) -> Json<SettingsView> {
    state.store.update_settings(settings.clone());
    info!(model = %settings.model, "settings updated");
    Json(settings.into())
}

/// GET /api/v1/dashboard
pub async fn handle_dashboard(State(state): State<AppState>) -> Json<DashboardStats> {
    Json(compute_dashboard_stats(&state.store.candidates()))
}

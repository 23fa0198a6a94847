/// Gemini client — the single point of entry for all Gemini API calls in
/// ResumeRank.
///
/// ARCHITECTURAL RULE: No other module may call the Gemini API directly.
/// All provider interactions MUST go through this module.
///
/// The client carries no credential: the API key lives in mutable session
/// Settings and travels with each call. Each request is single-shot — no
/// retry, no backoff, no cancellation beyond the store's request tokens.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::candidate::{AnalysisResponse, ModelOption};

pub mod prompts;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const REQUEST_TIMEOUT_SECS: u64 = 120;
/// Catalog entries must advertise this method to be usable for analysis.
const GENERATE_CONTENT_METHOD: &str = "generateContent";

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("model returned no text payload")]
    EmptyResponse,

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("response violates the analysis contract: {0}")]
    Schema(String),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    system_instruction: Content<'a>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<GeneratedCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeneratedCandidate {
    content: Option<GeneratedContent>,
}

#[derive(Debug, Deserialize)]
struct GeneratedContent {
    #[serde(default)]
    parts: Vec<GeneratedPart>,
}

#[derive(Debug, Deserialize)]
struct GeneratedPart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Extracts the text of the first non-empty part, if any.
    fn text(&self) -> Option<&str> {
        self.candidates
            .iter()
            .filter_map(|c| c.content.as_ref())
            .flat_map(|c| c.parts.iter())
            .filter_map(|p| p.text.as_deref())
            .find(|t| !t.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct ModelCatalog {
    #[serde(default)]
    models: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogEntry {
    name: String,
    #[serde(default)]
    display_name: String,
    #[serde(default)]
    version: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    supported_generation_methods: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiApiError {
    error: GeminiApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiApiErrorBody {
    message: String,
}

/// Response schema directive for the analysis call. The provider is asked to
/// emit JSON with exactly these required fields; deserialization re-checks
/// them rather than trusting the shape.
fn analysis_response_schema() -> serde_json::Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "score": {
                "type": "NUMBER",
                "description": "Match score between 0 and 100"
            },
            "reasoning": {
                "type": "STRING",
                "description": "Brief explanation of the score"
            },
            "key_skills": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "List of matching skills found"
            },
            "recommendation": {
                "type": "STRING",
                "enum": ["Shortlist", "Reject", "Review"],
                "description": "Final hiring recommendation"
            }
        },
        "required": ["score", "reasoning", "key_skills", "recommendation"]
    })
}

/// Seam over the analysis provider so handlers can be exercised without a
/// network. Carried in `AppState` as `Arc<dyn AnalysisProvider>`.
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    async fn list_models(&self, api_key: &str) -> Result<Vec<ModelOption>, GeminiError>;

    async fn analyze_resume(
        &self,
        api_key: &str,
        model: &str,
        resume_text: &str,
        job_description: &str,
    ) -> Result<AnalysisResponse, GeminiError>;
}

/// The single Gemini client used by all handlers in ResumeRank.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
}

impl GeminiClient {
    pub fn new() -> Self {
        Self::with_base_url(GEMINI_API_BASE)
    }

    /// Points the client at an alternate endpoint (mock server in tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.into(),
        }
    }

    /// Queries the provider's model catalog and returns, in provider order,
    /// every model that supports free-form content generation. The result
    /// may be empty; a non-success status is an error, never a default list.
    pub async fn list_models(&self, api_key: &str) -> Result<Vec<ModelOption>, GeminiError> {
        let response = self
            .client
            .get(format!("{}/models", self.base_url))
            .query(&[("key", api_key)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("model catalog request failed with {status}");
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message: extract_api_error(&body),
            });
        }

        let catalog: ModelCatalog = response.json().await?;
        let models = catalog
            .models
            .into_iter()
            .filter(|m| {
                m.supported_generation_methods
                    .iter()
                    .any(|method| method == GENERATE_CONTENT_METHOD)
            })
            .map(|m| ModelOption {
                name: m
                    .name
                    .strip_prefix("models/")
                    .map(str::to_string)
                    .unwrap_or(m.name),
                display_name: m.display_name,
                version: m.version,
                description: m.description,
            })
            .collect::<Vec<_>>();

        debug!("model catalog returned {} usable models", models.len());
        Ok(models)
    }

    /// Scores one resume against one job description. Returns a fully
    /// populated `AnalysisResponse` or fails with a single terminal error —
    /// never a partial result.
    pub async fn analyze_resume(
        &self,
        api_key: &str,
        model: &str,
        resume_text: &str,
        job_description: &str,
    ) -> Result<AnalysisResponse, GeminiError> {
        let prompt = prompts::build_analysis_prompt(job_description, resume_text);
        let request_body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: &prompt }],
            }],
            system_instruction: Content {
                parts: vec![Part {
                    text: prompts::SYSTEM_INSTRUCTION,
                }],
            },
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema: analysis_response_schema(),
            },
        };

        let response = self
            .client
            .post(format!("{}/models/{}:generateContent", self.base_url, model))
            .query(&[("key", api_key)])
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("generateContent request failed with {status}");
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message: extract_api_error(&body),
            });
        }

        let body: GenerateContentResponse = response.json().await?;
        let text = body.text().ok_or(GeminiError::EmptyResponse)?;
        let text = strip_json_fences(text);

        let analysis: AnalysisResponse = serde_json::from_str(text)?;
        if !(0.0..=100.0).contains(&analysis.score) {
            return Err(GeminiError::Schema(format!(
                "score {} outside [0, 100]",
                analysis.score
            )));
        }

        debug!(score = analysis.score, "resume analysis completed");
        Ok(analysis)
    }
}

#[async_trait]
impl AnalysisProvider for GeminiClient {
    async fn list_models(&self, api_key: &str) -> Result<Vec<ModelOption>, GeminiError> {
        GeminiClient::list_models(self, api_key).await
    }

    async fn analyze_resume(
        &self,
        api_key: &str,
        model: &str,
        resume_text: &str,
        job_description: &str,
    ) -> Result<AnalysisResponse, GeminiError> {
        GeminiClient::analyze_resume(self, api_key, model, resume_text, job_description).await
    }
}

/// Pulls the provider's error message out of an error body, falling back to
/// the raw body when it is not the documented shape.
fn extract_api_error(body: &str) -> String {
    serde_json::from_str::<GeminiApiError>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string())
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

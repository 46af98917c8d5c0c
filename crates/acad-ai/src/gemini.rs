//! Gemini REST client.

use std::time::Duration;

use acad_config::AiConfig;
use acad_core::analysis::AnalysisResult;
use acad_core::entities::{MappedQuestion, StudyRecommendation, Topic};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::StudyAssistant;
use crate::error::AiError;
use crate::http::check_response;
use crate::{parse, prompts, schema};

// ── Wire types ─────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

impl GenerateRequest {
    fn new(prompt: String, response_schema: Value) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                response_schema,
            },
        }
    }
}

impl GenerateResponse {
    /// Concatenated text parts of the first candidate, empty if none.
    fn into_text(self) -> String {
        self.candidates
            .into_iter()
            .next()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

// ── Client ─────────────────────────────────────────────────────────

/// [`StudyAssistant`] backed by the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// Build a client from the `ai` config section.
    ///
    /// # Errors
    ///
    /// [`AiError::NotConfigured`] without an API key, [`AiError::Http`] if
    /// the HTTP client cannot be built.
    pub fn from_config(config: &AiConfig) -> Result<Self, AiError> {
        if !config.is_configured() {
            return Err(AiError::NotConfigured);
        }
        let http = reqwest::Client::builder()
            .user_agent(concat!("academisync/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()?;

        tracing::debug!(model = %config.model, endpoint = %config.endpoint, "gemini client ready");

        Ok(Self {
            http,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.endpoint,
            urlencoding::encode(&self.model),
            urlencoding::encode(&self.api_key)
        )
    }

    /// Send one prompt and return the raw model text.
    async fn generate(&self, prompt: String, response_schema: Value) -> Result<String, AiError> {
        let request = GenerateRequest::new(prompt, response_schema);
        tracing::debug!(model = %self.model, "sending generateContent request");

        let resp = check_response(self.http.post(self.url()).json(&request).send().await?).await?;
        read_text(resp).await
    }
}

/// Decode a successful `generateContent` response into its text.
async fn read_text(resp: reqwest::Response) -> Result<String, AiError> {
    let body = resp.text().await?;
    let decoded: GenerateResponse =
        serde_json::from_str(&body).map_err(|e| AiError::Parse(e.to_string()))?;
    let text = decoded.into_text();
    tracing::debug!(chars = text.len(), "received model output");
    Ok(text)
}

impl StudyAssistant for GeminiClient {
    async fn generate_syllabus(
        &self,
        subject_name: &str,
        syllabus_text: Option<&str>,
    ) -> Result<Vec<Topic>, AiError> {
        let text = self
            .generate(prompts::syllabus(subject_name, syllabus_text), schema::syllabus())
            .await?;
        Ok(parse::syllabus(&text)?)
    }

    async fn map_questions(
        &self,
        paper_text: &str,
        syllabus: &[Topic],
    ) -> Result<Vec<MappedQuestion>, AiError> {
        let prompt = prompts::map_questions(paper_text, syllabus)
            .map_err(|e| AiError::Parse(e.to_string()))?;
        let text = self.generate(prompt, schema::mapped_questions()).await?;
        Ok(parse::mapped_questions(&text))
    }

    async fn generate_study_recommendations(
        &self,
        results: &[AnalysisResult],
        subject_name: &str,
    ) -> Result<Vec<StudyRecommendation>, AiError> {
        let prompt = prompts::recommendations(results, subject_name)
            .map_err(|e| AiError::Parse(e.to_string()))?;
        let text = self.generate(prompt, schema::recommendations()).await?;
        Ok(parse::recommendations(&text))
    }
}

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::{DEFAULT_GEMINI_BASE_URL, LLMConfig},
    recommendation::{entities::ModelError, ports::LLMClient},
};

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    model_name: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: Option<String>,
}

impl GeminiLLMClient {
    pub fn new(api_key: String, model_name: String) -> Self {
        Self {
            api_key,
            model_name,
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            client: Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model_name
        )
    }

    async fn call_gemini_api(&self, request: GeminiRequest) -> Result<String, ModelError> {
        if self.api_key.trim().is_empty() {
            return Err(ModelError::Authentication(
                "GOOGLE_API_KEY is not configured".to_string(),
            ));
        }

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                tracing::error!("Gemini API request failed: {}", e);
                ModelError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(classify_status(status, error_text));
        }

        let body = response.text().await.map_err(|e| {
            let e = e.without_url();
            tracing::error!("Failed to read Gemini response: {}", e);
            ModelError::Transport(e.to_string())
        })?;

        extract_text(&body)
    }
}

impl From<&LLMConfig> for GeminiLLMClient {
    fn from(config: &LLMConfig) -> Self {
        GeminiLLMClient::new(config.gemini_api_key.clone(), config.gemini_model.clone())
            .with_base_url(config.gemini_base_url.clone())
    }
}

impl LLMClient for GeminiLLMClient {
    async fn generate(&self, prompt: String) -> Result<String, ModelError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
        };

        self.call_gemini_api(request).await
    }
}

fn classify_status(status: StatusCode, body: String) -> ModelError {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ModelError::Authentication(body),
        StatusCode::TOO_MANY_REQUESTS => ModelError::QuotaExceeded(body),
        _ => ModelError::Remote {
            status: status.as_u16(),
            body,
        },
    }
}

/// Joins the text parts of the first candidate.
fn extract_text(body: &str) -> Result<String, ModelError> {
    let gemini_response: GeminiResponse = serde_json::from_str(body).map_err(|e| {
        tracing::error!("Failed to parse Gemini response: {}", e);
        ModelError::MalformedResponse(format!("Failed to parse LLM response: {}", e))
    })?;

    let text = gemini_response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<String>()
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(ModelError::MalformedResponse(
            "No response from LLM".to_string(),
        ));
    }

    Ok(text)
}

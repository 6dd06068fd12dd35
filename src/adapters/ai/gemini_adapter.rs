//! Gemini `generateContent` adapter.
//!
//! Implements `ModelPort` over the Generative Language REST API. Structured
//! output is requested with `responseMimeType` + `responseSchema`.

use crate::domain::{DomainError, ImagePayload, Role};
use crate::ports::{ModelPort, ModelRequest};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info, warn};

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Gemini REST adapter.
///
/// `api_base` can point at any endpoint speaking the same protocol (a proxy or
/// a regional host).
pub struct GeminiAdapter {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
    model: String,
}

impl GeminiAdapter {
    /// Create a new Gemini adapter.
    ///
    /// # Arguments
    /// * `api_base` - API root (e.g., "https://generativelanguage.googleapis.com/v1beta")
    /// * `api_key` - API key sent as `x-goog-api-key`
    /// * `model` - Model name (e.g., "gemini-2.5-flash")
    /// * `timeout` - Per-request timeout
    pub fn new(
        api_base: String,
        api_key: String,
        model: String,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DomainError::Config(format!("HTTP client: {}", e)))?;
        Ok(Self {
            client,
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key,
            model,
        })
    }

    fn endpoint(&self) -> String {
        let model = self.model.trim();
        let model_path = if model.starts_with("models/") {
            model.to_string()
        } else {
            format!("models/{}", model)
        };
        format!("{}/{}:generateContent", self.api_base, model_path)
    }

    /// Map a port request onto the wire body. The user turn carries the image
    /// part (if any) before the prompt text.
    fn build_body(request: &ModelRequest) -> GenerateContentRequest {
        let mut contents: Vec<Content> = request
            .history
            .iter()
            .map(|turn| Content {
                role: Some(turn.role.as_str().to_string()),
                parts: vec![Part::Text {
                    text: turn.text.clone(),
                }],
            })
            .collect();

        let mut parts = Vec::with_capacity(2);
        if let Some(image) = &request.image {
            parts.push(Part::from(image));
        }
        parts.push(Part::Text {
            text: request.prompt.clone(),
        });
        contents.push(Content {
            role: Some(Role::User.as_str().to_string()),
            parts,
        });

        GenerateContentRequest {
            system_instruction: request.system_instruction.as_ref().map(|text| Content {
                role: None,
                parts: vec![Part::Text { text: text.clone() }],
            }),
            contents,
            generation_config: request.schema.as_ref().map(|schema| GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: schema.clone(),
            }),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: Value,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

/// Variant order matters for untagged decoding.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
    Other(Value),
}

impl From<&ImagePayload> for Part {
    fn from(image: &ImagePayload) -> Self {
        Part::InlineData {
            inline_data: InlineData {
                mime_type: image.mime_type.clone(),
                data: image.data.clone(),
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

/// Concatenated text of the first candidate.
fn reply_text(response: GenerateContentResponse) -> Result<String, DomainError> {
    if let Some(reason) = response.prompt_feedback.and_then(|f| f.block_reason) {
        return Err(DomainError::Ai(format!("prompt blocked: {}", reason)));
    }
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| DomainError::Ai("No candidates returned".to_string()))?;
    let text: String = candidate
        .content
        .map(|c| c.parts)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|p| match p {
            Part::Text { text } => Some(text),
            _ => None,
        })
        .collect();
    if text.trim().is_empty() {
        return Err(DomainError::Ai(format!(
            "empty reply (finish reason: {})",
            candidate.finish_reason.as_deref().unwrap_or("unknown")
        )));
    }
    Ok(text)
}

#[async_trait::async_trait]
impl ModelPort for GeminiAdapter {
    async fn generate(&self, request: ModelRequest) -> Result<String, DomainError> {
        info!(
            kind = %request.kind,
            model = %self.model,
            history = request.history.len(),
            with_image = request.image.is_some(),
            structured = request.schema.is_some(),
            "sending request to model"
        );

        let body = Self::build_body(&request);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::Ai(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            let snippet: String = text.chars().take(200).collect();
            warn!(status = %status, body = %snippet, "model API returned error");
            return Err(DomainError::Ai(format!("API error {}: {}", status, snippet)));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Ai(format!("Failed to parse API response: {}", e)))?;

        let text = reply_text(parsed)?;
        debug!(kind = %request.kind, reply_len = text.len(), "received model reply");
        Ok(text)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{ChatMessage, DomainError, ImagePayload, Role};
use serde_json::Value;
use std::fmt;
use std::path::Path;

/// Which use case a model request serves. Drives logging and the mock adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    DailyOutfit,
    Chat,
    BodyShape,
    Workout,
    Beauty,
    ColorPalette,
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RequestKind::DailyOutfit => "daily_outfit",
            RequestKind::Chat => "chat",
            RequestKind::BodyShape => "body_shape",
            RequestKind::Workout => "workout",
            RequestKind::Beauty => "beauty",
            RequestKind::ColorPalette => "color_palette",
        })
    }
}

/// A prior conversation turn passed to the model as context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryTurn {
    pub role: Role,
    pub text: String,
}

impl From<&ChatMessage> for HistoryTurn {
    fn from(msg: &ChatMessage) -> Self {
        Self {
            role: msg.role,
            text: msg.text.clone(),
        }
    }
}

/// One request to the generative model.
///
/// `schema`, when set, is the structured-output constraint: the service must
/// reply with JSON matching it.
#[derive(Debug, Clone)]
pub struct ModelRequest {
    pub kind: RequestKind,
    pub system_instruction: Option<String>,
    pub history: Vec<HistoryTurn>,
    pub prompt: String,
    pub image: Option<ImagePayload>,
    pub schema: Option<Value>,
}

impl ModelRequest {
    pub fn new(kind: RequestKind, prompt: impl Into<String>) -> Self {
        Self {
            kind,
            system_instruction: None,
            history: Vec::new(),
            prompt: prompt.into(),
            image: None,
            schema: None,
        }
    }

    pub fn system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn history(mut self, history: Vec<HistoryTurn>) -> Self {
        self.history = history;
        self
    }

    pub fn image(mut self, image: ImagePayload) -> Self {
        self.image = Some(image);
        self
    }

    pub fn schema(mut self, schema: Value) -> Self {
        self.schema = Some(schema);
        self
    }
}

/// Hosted generative model. Given text, an optional image and an optional
/// output shape, returns the reply text (JSON when a schema was given).
#[async_trait::async_trait]
pub trait ModelPort: Send + Sync {
    async fn generate(&self, request: ModelRequest) -> Result<String, DomainError>;

    /// Model identifier for logs.
    fn model_name(&self) -> &str;
}

/// Photo source standing in for the camera. Access is acquired and released
/// within a single call.
#[async_trait::async_trait]
pub trait CapturePort: Send + Sync {
    async fn capture(&self, source: &Path) -> Result<ImagePayload, DomainError>;
}

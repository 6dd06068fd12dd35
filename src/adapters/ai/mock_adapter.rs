//! Mock model adapter for running without API calls.
//!
//! Returns canned replies per request kind, or a scripted sequence of replies
//! and failures for tests. Every request is recorded for inspection.

use super::extract::{OUTFIT_CLOSE, OUTFIT_OPEN};
use crate::domain::{BodyShape, DomainError};
use crate::ports::{ModelPort, ModelRequest, RequestKind};
use serde_json::json;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;
use tracing::info;

/// Mock model adapter.
///
/// Scripted replies are consumed first, in order; once exhausted the adapter
/// falls back to canned replies. Simulates network latency with a
/// configurable delay.
pub struct MockModelAdapter {
    /// Simulated network delay in milliseconds.
    delay_ms: u64,
    script: Mutex<VecDeque<Result<String, DomainError>>>,
    requests: Mutex<Vec<ModelRequest>>,
}

impl MockModelAdapter {
    /// Create a new mock adapter with default delay (100ms).
    pub fn new() -> Self {
        Self::with_delay(100)
    }

    pub fn with_delay(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            script: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a raw reply.
    pub fn with_reply(self, reply: impl Into<String>) -> Self {
        self.push(Ok(reply.into()));
        self
    }

    /// Queue a transport failure.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        self.push(Err(DomainError::Ai(message.into())));
        self
    }

    fn push(&self, item: Result<String, DomainError>) {
        if let Ok(mut script) = self.script.lock() {
            script.push_back(item);
        }
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<ModelRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    fn canned(request: &ModelRequest) -> String {
        match request.kind {
            RequestKind::DailyOutfit => canned_outfit().to_string(),
            RequestKind::Chat => canned_chat(&request.prompt),
            RequestKind::BodyShape => json!({
                "identifiedShape": "Rectangle",
                "reasoning": "[MOCK] Shoulders and hips appear similar in width with a softly defined waist."
            })
            .to_string(),
            RequestKind::Workout => canned_workout(&request.prompt).to_string(),
            RequestKind::Beauty => json!({
                "faceShape": "Oval",
                "skinTone": "Medium",
                "undertone": "Warm",
                "recommendedLipColors": ["#B5533C", "#C8675A", "#8E3B46", "#D98E73"],
                "recommendedBlushColors": ["#E39A7B", "#C97B63"],
                "recommendedEyeColors": ["#8A6642", "#5E6B3A"],
                "recommendedHairStyles": ["soft layers", "face-framing curtain bangs"],
                "placementTips": ["[MOCK] Sweep blush from the apples of the cheeks toward the temples."]
            })
            .to_string(),
            RequestKind::ColorPalette => json!({
                "season": "Deep Autumn",
                "description": "[MOCK] Rich, warm and deep colours echo warm undertones and high contrast.",
                "bestColors": [
                    { "name": "Rust", "hex": "#B7410E" },
                    { "name": "Olive", "hex": "#708238" },
                    { "name": "Teal", "hex": "#1F6F6F" },
                    { "name": "Mustard", "hex": "#D4A017" }
                ],
                "neutrals": [
                    { "name": "Chocolate", "hex": "#4E2A1E" },
                    { "name": "Camel", "hex": "#C19A6B" }
                ],
                "avoidColors": [
                    { "name": "Icy Pink", "hex": "#F8D7E3" },
                    { "name": "Pure White", "hex": "#FFFFFF" }
                ]
            })
            .to_string(),
        }
    }
}

impl Default for MockModelAdapter {
    fn default() -> Self {
        Self::new()
    }
}

fn canned_outfit() -> serde_json::Value {
    json!({
        "title": "[MOCK] Soft Tailoring",
        "description": "Relaxed structure with a touch of polish.",
        "reasoning": "A belted trench marks the waist and a V-neck lengthens the torso.",
        "tags": ["Casual", "Transitional"],
        "items": [
            {
                "id": "1",
                "name": "Belted Trench Coat",
                "brand": "Mango",
                "price": 149.99,
                "currency": "USD",
                "imageUrl": "https://picsum.photos/300/400?random=1",
                "url": "https://example.com/trench",
                "tracking": false
            },
            {
                "id": "2",
                "name": "Straight-Leg Jeans",
                "brand": "Levi's",
                "price": 98.0,
                "currency": "USD",
                "imageUrl": "https://picsum.photos/300/400?random=2",
                "url": "https://example.com/jeans",
                "tracking": false
            }
        ]
    })
}

fn canned_chat(message: &str) -> String {
    let lower = message.to_lowercase();
    let wants_look = ["outfit", "look", "wear"]
        .iter()
        .any(|w| lower.contains(w));
    if wants_look && (lower.contains("fabric") || lower.contains("for a") || lower.len() > 60) {
        format!(
            "[MOCK] Here's a look built around your proportions.\n{}\n{}\n{}",
            OUTFIT_OPEN,
            canned_outfit(),
            OUTFIT_CLOSE
        )
    } else if wants_look {
        "[MOCK] Love that! What's the occasion, and do you prefer natural fabrics like linen or something structured?".to_string()
    } else {
        "[MOCK] Tell me more about what you're planning and I'll suggest a direction.".to_string()
    }
}

/// Emphasis the mock "model" reads out of the workout prompt.
fn canned_workout(prompt: &str) -> serde_json::Value {
    let shape = BodyShape::ALL
        .into_iter()
        .find(|s| prompt.contains(&format!("with a {} body shape", s)))
        .unwrap_or(BodyShape::Hourglass);
    let (focus, goal) = match shape {
        BodyShape::Pear => (
            "Upper Body & Shoulders",
            "Build upper body width to balance fuller hips",
        ),
        BodyShape::Apple => (
            "Core & Legs",
            "Define the core and tone the legs",
        ),
        BodyShape::InvertedTriangle => (
            "Lower Body & Glutes",
            "Add lower body volume to balance broad shoulders",
        ),
        BodyShape::Rectangle => (
            "Waist & Curves",
            "Create waist definition with glute and shoulder work",
        ),
        BodyShape::Hourglass => (
            "Full Body Balance",
            "Keep proportions even with full-body toning",
        ),
    };
    json!({
        "focusArea": focus,
        "goal": goal,
        "frequency": "3x per week",
        "warmup": ["Arm circles, 30s", "Jumping jacks, 60s"],
        "mainCircuit": [
            {
                "name": "Pike Push-Ups",
                "reps": "3 x 10",
                "description": "Hips high, lower the head toward the floor.",
                "benefit": format!("[MOCK] Supports the {} emphasis.", focus.to_lowercase())
            },
            {
                "name": "Glute Bridge",
                "reps": "3 x 15",
                "description": "Drive through the heels and squeeze at the top.",
                "benefit": "[MOCK] Keeps the posterior chain engaged."
            }
        ],
        "cooldown": ["Child's pose, 60s", "Chest opener stretch, 30s"]
    })
}

#[async_trait::async_trait]
impl ModelPort for MockModelAdapter {
    async fn generate(&self, request: ModelRequest) -> Result<String, DomainError> {
        info!(kind = %request.kind, "[MOCK] Simulating model request");

        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;

        let scripted = self.script.lock().ok().and_then(|mut s| s.pop_front());
        let reply = match scripted {
            Some(item) => item,
            None => Ok(Self::canned(&request)),
        };
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request);
        }
        reply
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_script_consumed_before_canned() {
        let adapter = MockModelAdapter::with_delay(0)
            .with_reply("first")
            .with_failure("boom");

        let a = adapter
            .generate(ModelRequest::new(RequestKind::Chat, "hi"))
            .await
            .unwrap();
        assert_eq!(a, "first");

        let b = adapter
            .generate(ModelRequest::new(RequestKind::Chat, "hi"))
            .await;
        assert!(matches!(b, Err(DomainError::Ai(_))));

        let c = adapter
            .generate(ModelRequest::new(RequestKind::Chat, "hi"))
            .await
            .unwrap();
        assert!(c.starts_with("[MOCK]"));
        assert_eq!(adapter.requests().len(), 3);
    }

    #[test]
    fn test_canned_workout_reads_shape() {
        let plan = canned_workout("... with a Inverted Triangle body shape ...");
        assert_eq!(plan["focusArea"], "Lower Body & Glutes");
    }

    #[test]
    fn test_canned_chat_asks_before_suggesting() {
        assert!(canned_chat("what should I wear?").contains("occasion"));
        assert!(canned_chat("I need an outfit for a summer wedding").contains(OUTFIT_OPEN));
    }
}

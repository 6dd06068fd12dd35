//! Stylist service. Translates styling intents into model requests and
//! decodes the replies.
//!
//! Every operation makes a single attempt and never returns an error: any
//! transport or decode failure is logged and degrades to `None` (or the
//! fallback text for chat).

use crate::adapters::ai::{decode_complete, prompts, schemas, split_chat_reply};
use crate::domain::{
    BeautyAnalysis, BodyShapeAnalysis, ChatMessage, ChatReply, ColorPaletteAnalysis, Complete,
    DomainError, ImagePayload, Outfit, UserProfile, WeatherData, WorkoutPlan, context_window,
};
use crate::ports::{HistoryTurn, ModelPort, ModelRequest, RequestKind};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{info, warn};

/// Shown when the chat request fails.
pub const FALLBACK_CHAT_REPLY: &str =
    "I'm having a little trouble connecting to my fashion sense right now. Please try again.";

pub struct StylistService {
    model: Arc<dyn ModelPort>,
}

impl StylistService {
    pub fn new(model: Arc<dyn ModelPort>) -> Self {
        Self { model }
    }

    /// One structured request; `None` on any failure or half-filled reply.
    async fn structured<T>(&self, request: ModelRequest) -> Option<T>
    where
        T: DeserializeOwned + Complete,
    {
        let kind = request.kind;
        let result = match self.model.generate(request).await {
            Ok(raw) => decode_complete::<T>(&raw),
            Err(e) => Err(e),
        };
        match result {
            Ok(value) => {
                info!(kind = %kind, model = %self.model.model_name(), "structured reply decoded");
                Some(value)
            }
            Err(e) => {
                warn!(kind = %kind, error = %e, "request failed, returning no result");
                None
            }
        }
    }

    /// Complete look for today's weather.
    pub async fn generate_daily_outfit(
        &self,
        profile: &UserProfile,
        weather: &WeatherData,
    ) -> Option<Outfit> {
        let request = ModelRequest::new(
            RequestKind::DailyOutfit,
            prompts::daily_outfit(profile, weather),
        )
        .system_instruction(prompts::STYLIST_PERSONA)
        .schema(schemas::outfit());
        self.structured(request).await
    }

    /// One chat turn. Only the last `CHAT_CONTEXT_WINDOW` messages of
    /// `history` are sent as context.
    pub async fn chat_with_stylist(
        &self,
        history: &[ChatMessage],
        profile: &UserProfile,
        new_message: &str,
    ) -> ChatReply {
        let turns: Vec<HistoryTurn> = context_window(history)
            .iter()
            .map(HistoryTurn::from)
            .collect();
        let request = ModelRequest::new(RequestKind::Chat, new_message)
            .system_instruction(prompts::chat_system_instruction(profile, &schemas::outfit()))
            .history(turns);

        match self.model.generate(request).await {
            Ok(raw) => {
                let reply = split_chat_reply(&raw);
                info!(
                    reply_len = reply.text.len(),
                    with_outfit = reply.outfit.is_some(),
                    "chat reply received"
                );
                reply
            }
            Err(e) => {
                warn!(error = %e, "chat request failed");
                ChatReply::text_only(FALLBACK_CHAT_REPLY)
            }
        }
    }

    /// Classify body shape from a photo (bare base64 or data URL).
    pub async fn analyze_body_shape(&self, image: &str) -> Option<BodyShapeAnalysis> {
        let image = decode_image(image)?;
        let request = ModelRequest::new(RequestKind::BodyShape, prompts::BODY_SHAPE_INSTRUCTION)
            .image(image)
            .schema(schemas::body_shape_analysis());
        self.structured(request).await
    }

    /// Workout balancing the user's proportions.
    pub async fn generate_workout_plan(&self, profile: &UserProfile) -> Option<WorkoutPlan> {
        let request = ModelRequest::new(RequestKind::Workout, prompts::workout_plan(profile))
            .schema(schemas::workout_plan());
        self.structured(request).await
    }

    /// Face shape, undertone and colour recommendations from a portrait.
    pub async fn analyze_beauty_profile(&self, image: &str) -> Option<BeautyAnalysis> {
        let image = decode_image(image)?;
        let request = ModelRequest::new(RequestKind::Beauty, prompts::BEAUTY_INSTRUCTION)
            .image(image)
            .schema(schemas::beauty_analysis());
        self.structured(request).await
    }

    /// Seasonal colour analysis from a portrait.
    pub async fn analyze_color_palette(&self, image: &str) -> Option<ColorPaletteAnalysis> {
        let image = decode_image(image)?;
        let request = ModelRequest::new(
            RequestKind::ColorPalette,
            prompts::COLOR_PALETTE_INSTRUCTION,
        )
        .image(image)
        .schema(schemas::color_palette());
        self.structured(request).await
    }
}

fn decode_image(image: &str) -> Option<ImagePayload> {
    ImagePayload::from_capture(image)
        .map_err(|e: DomainError| warn!(error = %e, "rejected image payload"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockModelAdapter;
    use crate::domain::{BodyShape, Role};
    use base64::Engine as _;
    use base64::engine::general_purpose::STANDARD as BASE64;

    fn service(mock: MockModelAdapter) -> (StylistService, Arc<MockModelAdapter>) {
        let mock = Arc::new(mock);
        (StylistService::new(mock.clone()), mock)
    }

    fn weather() -> WeatherData {
        WeatherData {
            temp: 18.0,
            condition: "Partly Cloudy".to_string(),
            location: "New York".to_string(),
        }
    }

    fn photo() -> String {
        BASE64.encode([0xffu8, 0xd8, 0xff, 0xe0])
    }

    #[tokio::test]
    async fn test_daily_outfit_complete_or_none() {
        let (svc, _) = service(MockModelAdapter::with_delay(0));
        let outfit = svc
            .generate_daily_outfit(&UserProfile::default(), &weather())
            .await
            .unwrap();
        assert!(!outfit.items.is_empty());
        assert!(!outfit.title.is_empty());

        let (svc, _) = service(MockModelAdapter::with_delay(0).with_reply(
            r#"{"title":"Half","description":"d","reasoning":"r","items":[]}"#,
        ));
        assert!(
            svc.generate_daily_outfit(&UserProfile::default(), &weather())
                .await
                .is_none()
        );
    }

    #[tokio::test]
    async fn test_daily_outfit_request_shape() {
        let (svc, mock) = service(MockModelAdapter::with_delay(0));
        svc.generate_daily_outfit(&UserProfile::default(), &weather())
            .await;
        let requests = mock.requests();
        let req = &requests[0];
        assert_eq!(req.kind, RequestKind::DailyOutfit);
        assert!(req.schema.is_some());
        assert!(req.prompt.contains("Partly Cloudy"));
    }

    #[tokio::test]
    async fn test_failures_degrade_to_none() {
        let (svc, _) = service(
            MockModelAdapter::with_delay(0)
                .with_failure("quota exceeded")
                .with_reply("not json at all"),
        );
        let profile = UserProfile::default();
        assert!(svc.generate_daily_outfit(&profile, &weather()).await.is_none());
        assert!(svc.generate_workout_plan(&profile).await.is_none());
    }

    #[tokio::test]
    async fn test_chat_sends_last_ten_messages() {
        let (svc, mock) = service(MockModelAdapter::with_delay(0).with_reply("Linen or silk?"));
        let history: Vec<ChatMessage> = (0..23)
            .map(|i| ChatMessage::user(format!("message {}", i)))
            .collect();

        let reply = svc
            .chat_with_stylist(&history, &UserProfile::default(), "Dinner outfit?")
            .await;
        assert_eq!(reply.text, "Linen or silk?");
        assert!(reply.outfit.is_none());

        let requests = mock.requests();
        let req = &requests[0];
        assert_eq!(req.history.len(), 10);
        assert_eq!(req.history[0].text, "message 13");
        assert_eq!(req.history[9].text, "message 22");
        assert_eq!(req.prompt, "Dinner outfit?");
        assert!(
            req.system_instruction
                .as_deref()
                .unwrap()
                .contains("clarifying questions")
        );
    }

    #[tokio::test]
    async fn test_chat_splits_embedded_outfit() {
        let raw = r#"Here's your look! {"title":"Brunch Ease","description":"d","reasoning":"r","items":[{"name":"Linen shirt","brand":"Arket","price":59}]}"#;
        let (svc, _) = service(MockModelAdapter::with_delay(0).with_reply(raw));
        let reply = svc
            .chat_with_stylist(&[], &UserProfile::default(), "Brunch outfit in linen")
            .await;
        assert_eq!(reply.text, "Here's your look!");
        assert_eq!(reply.outfit.unwrap().title, "Brunch Ease");

        let msg = ChatMessage::from_reply(ChatReply::text_only("ok"));
        assert_eq!(msg.role, Role::Model);
    }

    #[tokio::test]
    async fn test_chat_failure_returns_fallback() {
        let (svc, _) = service(MockModelAdapter::with_delay(0).with_failure("offline"));
        let reply = svc
            .chat_with_stylist(&[], &UserProfile::default(), "hello")
            .await;
        assert_eq!(reply.text, FALLBACK_CHAT_REPLY);
        assert!(reply.outfit.is_none());
    }

    #[tokio::test]
    async fn test_image_prefix_stripped_before_sending() {
        let (svc, mock) = service(MockModelAdapter::with_delay(0));
        let data_url = format!("data:image/jpeg;base64,{}", photo());

        let analysis = svc.analyze_body_shape(&data_url).await.unwrap();
        assert_eq!(analysis.shape, BodyShape::Rectangle);
        svc.analyze_beauty_profile(&photo()).await.unwrap();

        let requests = mock.requests();
        let first = requests[0].image.as_ref().unwrap();
        let second = requests[1].image.as_ref().unwrap();
        assert_eq!(first.data, photo());
        assert_eq!(second.data, photo());
        assert_eq!(BASE64.decode(&first.data).unwrap(), vec![0xffu8, 0xd8, 0xff, 0xe0]);
    }

    #[tokio::test]
    async fn test_invalid_image_skips_request() {
        let (svc, mock) = service(MockModelAdapter::with_delay(0));
        assert!(svc.analyze_color_palette("data:image/jpeg;base64,%%%").await.is_none());
        assert!(mock.requests().is_empty());
    }

    #[tokio::test]
    async fn test_body_shape_outside_enum_is_none() {
        let (svc, _) = service(
            MockModelAdapter::with_delay(0)
                .with_reply(r#"{"identifiedShape":"Spoon","reasoning":"curvy"}"#),
        );
        assert!(svc.analyze_body_shape(&photo()).await.is_none());
    }

    #[tokio::test]
    async fn test_color_palette() {
        let (svc, mock) = service(MockModelAdapter::with_delay(0));
        let palette = svc.analyze_color_palette(&photo()).await.unwrap();
        assert_eq!(palette.season, "Deep Autumn");
        assert!(!palette.best_colors.is_empty());
        assert!(!palette.avoid_colors.is_empty());
        assert_eq!(mock.requests()[0].kind, RequestKind::ColorPalette);
    }

    #[tokio::test]
    async fn test_pear_workout_emphasizes_upper_body() {
        let (svc, mock) = service(MockModelAdapter::with_delay(0));
        let profile = UserProfile::default().with_body_shape(BodyShape::Pear);

        let plan = svc.generate_workout_plan(&profile).await.unwrap();

        let focus = format!("{} {}", plan.focus_area, plan.goal).to_lowercase();
        assert!(focus.contains("upper body"));
        assert!(!plan.main_circuit.is_empty());
        assert!(mock.requests()[0].prompt.contains("Pear: focus on upper body width"));
    }
}

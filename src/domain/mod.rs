//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod analysis;
pub mod chat;
pub mod entities;
pub mod errors;
pub mod image;
pub mod session;

pub use analysis::{
    BeautyAnalysis, BodyShapeAnalysis, ColorPaletteAnalysis, Exercise, PaletteColor, WorkoutPlan,
};
pub use chat::{
    CHAT_CONTEXT_WINDOW, ChatMessage, ChatReply, Role, Transcript, context_window,
};
pub use entities::{
    BodyShape, Budget, Complete, Gender, Marketplace, Outfit, ProductItem, STYLE_TAGS, SkinTone,
    UserProfile, WeatherData, normalize_hex,
};
pub use errors::DomainError;
pub use image::ImagePayload;
pub use session::SessionState;

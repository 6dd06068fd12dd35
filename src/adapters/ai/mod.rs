//! AI adapter module. Implements ModelPort for the hosted generative model.
//!
//! Provides the Gemini adapter, a mock adapter for testing, and the request
//! shaping (prompts, output schemas) and reply decoding shared by both.

pub mod extract;
pub mod gemini_adapter;
pub mod mock_adapter;
pub mod prompts;
pub mod schemas;

pub use extract::{
    EmbeddedOutfit, decode_complete, decode_structured, extract_embedded_outfit, split_chat_reply,
};
pub use gemini_adapter::GeminiAdapter;
pub use mock_adapter::MockModelAdapter;

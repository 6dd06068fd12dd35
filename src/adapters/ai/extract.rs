//! Decoding model replies into typed values.
//!
//! Structured replies go through `decode_structured` / `decode_complete`.
//! Chat replies mix prose with an optional outfit block; `extract_embedded_outfit`
//! finds it, first by the explicit `<outfit>` markers the prompt asks for,
//! then by scanning for the first JSON object.

use crate::domain::{ChatReply, Complete, DomainError, Outfit};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

pub const OUTFIT_OPEN: &str = "<outfit>";
pub const OUTFIT_CLOSE: &str = "</outfit>";

/// Strip markdown code fences the model sometimes wraps JSON in.
pub fn sanitize_json(raw_text: &str) -> &str {
    let trimmed = raw_text.trim();
    if !trimmed.starts_with("```") {
        return trimmed;
    }
    let without_prefix = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    match without_prefix.rfind("```") {
        Some(end_idx) => without_prefix[..end_idx].trim(),
        None => without_prefix.trim(),
    }
}

/// Deserialize a structured reply. Shape mismatches become `DomainError::Decode`.
pub fn decode_structured<T: DeserializeOwned>(raw: &str) -> Result<T, DomainError> {
    let clean = sanitize_json(raw);
    serde_json::from_str(clean).map_err(|e| {
        DomainError::Decode(format!(
            "{} (reply starts: {})",
            e,
            clean.chars().take(200).collect::<String>()
        ))
    })
}

/// Like `decode_structured`, but also rejects half-filled values.
pub fn decode_complete<T: DeserializeOwned + Complete>(raw: &str) -> Result<T, DomainError> {
    let value: T = decode_structured(raw)?;
    if !value.is_complete() {
        return Err(DomainError::Decode(format!(
            "incomplete {}",
            std::any::type_name::<T>()
                .rsplit("::")
                .next()
                .unwrap_or("value")
        )));
    }
    Ok(value)
}

/// An outfit found inside a chat reply, plus the prose around it.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedOutfit {
    pub outfit: Outfit,
    pub text: String,
}

/// Find a structured outfit inside free text.
///
/// Returns `None` when no block parses into an object carrying both `title`
/// and `items`; truncated or malformed blocks are treated as prose.
pub fn extract_embedded_outfit(reply: &str) -> Option<EmbeddedOutfit> {
    from_markers(reply).or_else(|| from_first_object(reply))
}

/// Split a chat reply into prose and optional outfit. Without a usable block
/// the text is the reply, unchanged.
pub fn split_chat_reply(reply: &str) -> ChatReply {
    match extract_embedded_outfit(reply) {
        Some(found) => ChatReply {
            text: found.text,
            outfit: Some(found.outfit),
        },
        None => ChatReply::text_only(reply),
    }
}

fn from_markers(reply: &str) -> Option<EmbeddedOutfit> {
    let open = reply.find(OUTFIT_OPEN)?;
    let body_start = open + OUTFIT_OPEN.len();
    let close = body_start + reply[body_start..].find(OUTFIT_CLOSE)?;
    let outfit = outfit_from_str(sanitize_json(&reply[body_start..close]))?;
    Some(EmbeddedOutfit {
        outfit,
        text: join_prose(&reply[..open], &reply[close + OUTFIT_CLOSE.len()..]),
    })
}

fn from_first_object(reply: &str) -> Option<EmbeddedOutfit> {
    let start = reply.find('{')?;
    let mut stream = serde_json::Deserializer::from_str(&reply[start..]).into_iter::<Value>();
    let value = match stream.next()? {
        Ok(value) => value,
        Err(e) => {
            debug!(error = %e, "object-like block in reply did not parse");
            return None;
        }
    };
    let end = start + stream.byte_offset();
    let outfit = outfit_from_value(value)?;
    Some(EmbeddedOutfit {
        outfit,
        text: join_prose(&reply[..start], &reply[end..]),
    })
}

fn outfit_from_str(block: &str) -> Option<Outfit> {
    serde_json::from_str::<Value>(block)
        .ok()
        .and_then(outfit_from_value)
}

fn outfit_from_value(value: Value) -> Option<Outfit> {
    let obj = value.as_object()?;
    if !(obj.contains_key("title") && obj.contains_key("items")) {
        return None;
    }
    serde_json::from_value::<Outfit>(value)
        .ok()
        .filter(Complete::is_complete)
}

/// Rejoin the prose around a removed block, dropping fence remnants.
fn join_prose(before: &str, after: &str) -> String {
    let before = before.trim_end();
    let before = before
        .strip_suffix("```json")
        .or_else(|| before.strip_suffix("```"))
        .unwrap_or(before)
        .trim();
    let after = after.trim_start();
    let after = after.strip_prefix("```").unwrap_or(after).trim();
    match (before.is_empty(), after.is_empty()) {
        (false, false) => format!("{}\n\n{}", before, after),
        (false, true) => before.to_string(),
        (true, false) => after.to_string(),
        (true, true) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WorkoutPlan;

    const OUTFIT_JSON: &str = r#"{"title":"Gallery Night","description":"Sharp and soft","reasoning":"A wrap top defines the waist","items":[{"name":"Silk wrap top","brand":"Reformation","price":148}],"tags":["Evening"]}"#;

    #[test]
    fn test_partial_outfit_block_stays_plain_text() {
        let reply = r#"Here: {"title":"","description":"","reasoning":"","items":[]}"#;
        let split = split_chat_reply(reply);
        assert!(split.outfit.is_none());
        assert_eq!(split.text, reply);

        let marked = "Try this <outfit>{\"title\":\"Brunch\",\"description\":\"Easy\",\"reasoning\":\"Soft lines\",\"items\":[]}</outfit>";
        let split = split_chat_reply(marked);
        assert!(split.outfit.is_none());
        assert_eq!(split.text, marked);
    }

    #[test]
    fn test_sanitize_json_clean() {
        assert_eq!(sanitize_json(r#"{"a":1}"#), r#"{"a":1}"#);
    }

    #[test]
    fn test_sanitize_json_markdown() {
        let input = "```json\n{\"a\":1}\n```";
        assert_eq!(sanitize_json(input), "{\"a\":1}");
        let input = "```\n{\"a\":1}\n```";
        assert_eq!(sanitize_json(input), "{\"a\":1}");
    }

    #[test]
    fn test_split_prose_then_block() {
        let reply = format!("Here's a look for Friday.\n{}", OUTFIT_JSON);
        let split = split_chat_reply(&reply);
        assert_eq!(split.text, "Here's a look for Friday.");
        let outfit = split.outfit.unwrap();
        assert_eq!(outfit.title, "Gallery Night");
        assert_eq!(outfit.items.len(), 1);
    }

    #[test]
    fn test_split_with_markers_and_trailing_prose() {
        let reply = format!(
            "Try this.\n{}\n{}\n{}\nWant shoes too?",
            OUTFIT_OPEN, OUTFIT_JSON, OUTFIT_CLOSE
        );
        let split = split_chat_reply(&reply);
        assert_eq!(split.text, "Try this.\n\nWant shoes too?");
        assert!(split.outfit.is_some());
    }

    #[test]
    fn test_split_fenced_block() {
        let reply = format!("Love this for you:\n```json\n{}\n```", OUTFIT_JSON);
        let split = split_chat_reply(&reply);
        assert_eq!(split.text, "Love this for you:");
        assert!(split.outfit.is_some());
    }

    #[test]
    fn test_no_block_returns_full_text() {
        let reply = "  What fabrics do you enjoy wearing? Is this for work?  ";
        let split = split_chat_reply(reply);
        assert_eq!(split.text, reply);
        assert!(split.outfit.is_none());
    }

    #[test]
    fn test_truncated_block_falls_back_to_text() {
        let reply = r#"Here you go: {"title":"Gallery Night","items":[{"name":"Silk"#;
        let split = split_chat_reply(reply);
        assert_eq!(split.text, reply);
        assert!(split.outfit.is_none());
    }

    #[test]
    fn test_unclosed_marker_falls_back_to_text() {
        let reply = format!("Sure! {}{{\"title\":\"x\"", OUTFIT_OPEN);
        let split = split_chat_reply(&reply);
        assert_eq!(split.text, reply);
        assert!(split.outfit.is_none());
    }

    #[test]
    fn test_object_without_identifying_fields_is_text() {
        let reply = r#"Your palette: {"season":"Deep Autumn"}"#;
        let split = split_chat_reply(reply);
        assert_eq!(split.text, reply);
        assert!(split.outfit.is_none());
    }

    #[test]
    fn test_brace_in_prose_before_block_is_text() {
        let reply = format!("Pick {{one}} of these. {}", OUTFIT_JSON);
        assert!(extract_embedded_outfit(&reply).is_none());
    }

    #[test]
    fn test_decode_structured_reports_decode_error() {
        let err = decode_structured::<WorkoutPlan>(r#"{"focusArea":1}"#).unwrap_err();
        assert!(matches!(err, DomainError::Decode(_)));
    }

    #[test]
    fn test_decode_complete_rejects_empty_items() {
        let raw = r#"{"title":"t","description":"d","reasoning":"r","items":[]}"#;
        let err = decode_complete::<Outfit>(raw).unwrap_err();
        assert!(err.to_string().contains("incomplete Outfit"));
        assert!(decode_complete::<Outfit>(OUTFIT_JSON).is_ok());
    }
}

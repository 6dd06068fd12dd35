//! Structured-output constraints handed to the model.
//!
//! Gemini's `responseSchema` dialect (OpenAPI subset, upper-case type names).
//! Field names match the serde wire names of the domain types.

use crate::domain::BodyShape;
use serde_json::{Value, json};

fn string_list(description: &str) -> Value {
    json!({
        "type": "ARRAY",
        "items": { "type": "STRING" },
        "description": description,
    })
}

fn palette_list(description: &str) -> Value {
    json!({
        "type": "ARRAY",
        "description": description,
        "items": {
            "type": "OBJECT",
            "properties": {
                "name": { "type": "STRING" },
                "hex": { "type": "STRING", "description": "Hex code, e.g. #8B4513" },
            },
            "required": ["name", "hex"],
        },
    })
}

pub fn outfit() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING", "description": "A catchy name for the look" },
            "description": { "type": "STRING", "description": "A brief, evocative description of the vibe" },
            "reasoning": { "type": "STRING", "description": "Specific explanation of why this fits the user's body shape and skin tone" },
            "tags": { "type": "ARRAY", "items": { "type": "STRING" } },
            "items": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": { "type": "STRING" },
                        "name": { "type": "STRING", "description": "Name of the garment" },
                        "price": { "type": "NUMBER" },
                        "currency": { "type": "STRING" },
                        "brand": { "type": "STRING" },
                        "imageUrl": { "type": "STRING", "description": "A placeholder URL" },
                        "url": { "type": "STRING", "description": "A placeholder purchase URL" },
                        "tracking": { "type": "BOOLEAN" },
                    },
                    "required": ["name", "brand", "price"],
                },
            },
        },
        "required": ["title", "description", "reasoning", "items"],
    })
}

pub fn workout_plan() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "focusArea": { "type": "STRING" },
            "goal": { "type": "STRING" },
            "frequency": { "type": "STRING" },
            "warmup": { "type": "ARRAY", "items": { "type": "STRING" } },
            "mainCircuit": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "name": { "type": "STRING" },
                        "reps": { "type": "STRING" },
                        "description": { "type": "STRING" },
                        "benefit": { "type": "STRING" },
                    },
                    "required": ["name", "reps", "description", "benefit"],
                },
            },
            "cooldown": { "type": "ARRAY", "items": { "type": "STRING" } },
        },
        "required": ["focusArea", "goal", "warmup", "mainCircuit", "cooldown"],
    })
}

pub fn body_shape_analysis() -> Value {
    let shapes: Vec<&str> = BodyShape::ALL.iter().map(BodyShape::as_str).collect();
    json!({
        "type": "OBJECT",
        "properties": {
            "identifiedShape": { "type": "STRING", "enum": shapes },
            "reasoning": { "type": "STRING" },
        },
        "required": ["identifiedShape", "reasoning"],
    })
}

pub fn beauty_analysis() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "faceShape": { "type": "STRING", "description": "Oval, round, square, heart, diamond or oblong" },
            "skinTone": { "type": "STRING" },
            "undertone": { "type": "STRING" },
            "recommendedLipColors": string_list("Array of 4 hex color codes"),
            "recommendedBlushColors": string_list("Array of 2-3 hex color codes"),
            "recommendedEyeColors": string_list("Array of 2-3 hex color codes for eyeshadow"),
            "recommendedHairStyles": string_list("Hairstyle keywords"),
            "placementTips": string_list("Short advice on where to place blush, contour and liner"),
        },
        "required": [
            "faceShape",
            "skinTone",
            "undertone",
            "recommendedLipColors",
            "recommendedHairStyles",
        ],
    })
}

pub fn color_palette() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "season": { "type": "STRING", "description": "Seasonal type, e.g. Deep Autumn" },
            "description": { "type": "STRING" },
            "bestColors": palette_list("6-8 colors that flatter most"),
            "neutrals": palette_list("3-4 wardrobe neutrals"),
            "avoidColors": palette_list("3-4 colors to keep away from the face"),
        },
        "required": ["season", "description", "bestColors", "neutrals", "avoidColors"],
    })
}

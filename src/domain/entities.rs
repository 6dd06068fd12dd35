//! Domain entities. Pure data structures for the core business.
//!
//! Wire names follow the model's output contract (camelCase, display strings
//! for enums), so the same types decode model replies and render cards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Marks values the model may return half-filled.
///
/// A value is complete when every required string is non-empty and every
/// required list has at least one entry. Incomplete values never leave the
/// adapter.
pub trait Complete {
    fn is_complete(&self) -> bool;
}

pub(crate) fn filled(s: &str) -> bool {
    !s.trim().is_empty()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyShape {
    Hourglass,
    Pear,
    Apple,
    Rectangle,
    #[serde(rename = "Inverted Triangle")]
    InvertedTriangle,
}

impl BodyShape {
    pub const ALL: [BodyShape; 5] = [
        BodyShape::Hourglass,
        BodyShape::Pear,
        BodyShape::Apple,
        BodyShape::Rectangle,
        BodyShape::InvertedTriangle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BodyShape::Hourglass => "Hourglass",
            BodyShape::Pear => "Pear",
            BodyShape::Apple => "Apple",
            BodyShape::Rectangle => "Rectangle",
            BodyShape::InvertedTriangle => "Inverted Triangle",
        }
    }
}

impl fmt::Display for BodyShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkinTone {
    #[serde(rename = "Fair (Cool Undertone)")]
    FairCool,
    #[serde(rename = "Fair (Warm Undertone)")]
    FairWarm,
    #[serde(rename = "Medium (Neutral)")]
    MediumNeutral,
    #[serde(rename = "Medium (Warm)")]
    MediumWarm,
    #[serde(rename = "Deep (Cool)")]
    DeepCool,
    #[serde(rename = "Deep (Warm)")]
    DeepWarm,
}

impl SkinTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkinTone::FairCool => "Fair (Cool Undertone)",
            SkinTone::FairWarm => "Fair (Warm Undertone)",
            SkinTone::MediumNeutral => "Medium (Neutral)",
            SkinTone::MediumWarm => "Medium (Warm)",
            SkinTone::DeepCool => "Deep (Cool)",
            SkinTone::DeepWarm => "Deep (Warm)",
        }
    }
}

impl fmt::Display for SkinTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
    #[serde(rename = "Non-Binary")]
    NonBinary,
    #[serde(rename = "Prefer not to say")]
    PreferNotToSay,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
            Gender::NonBinary => "Non-Binary",
            Gender::PreferNotToSay => "Prefer not to say",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Budget {
    Low,
    Medium,
    High,
    Luxury,
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Budget::Low => "Low",
            Budget::Medium => "Medium",
            Budget::High => "High",
            Budget::Luxury => "Luxury",
        })
    }
}

/// Style tags offered by the profile editor.
pub const STYLE_TAGS: [&str; 8] = [
    "Minimalist",
    "Bohemian",
    "Streetwear",
    "Classic",
    "Avant-Garde",
    "Athleisure",
    "Preppy",
    "Vintage",
];

/// The user's styling profile. Lives in memory for the session only.
///
/// Never mutated in place: the `with_*` methods consume the value and return
/// the replacement, which the session then swaps in whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub age: u32,
    pub gender: Gender,
    pub body_shape: BodyShape,
    pub skin_tone: SkinTone,
    pub height_cm: u32,
    /// Used for weather context.
    pub location: String,
    pub style_preferences: Vec<String>,
    pub budget: Budget,
    /// Hex codes, e.g. `#B03A48`.
    pub favorite_shades: Vec<String>,
}

impl UserProfile {
    pub fn with_body_shape(self, body_shape: BodyShape) -> Self {
        Self { body_shape, ..self }
    }

    /// Adds the shade if absent, removes it if present. Hex codes compare
    /// case-insensitively; invalid codes leave the profile unchanged.
    pub fn with_favorite_shade_toggled(self, hex: &str) -> Self {
        let Some(hex) = normalize_hex(hex) else {
            return self;
        };
        let mut favorite_shades = self.favorite_shades.clone();
        if let Some(pos) = favorite_shades
            .iter()
            .position(|s| s.eq_ignore_ascii_case(&hex))
        {
            favorite_shades.remove(pos);
        } else {
            favorite_shades.push(hex);
        }
        Self {
            favorite_shades,
            ..self
        }
    }

    /// Replaces the style tags, dropping blanks and duplicates.
    pub fn with_style_preferences(self, styles: Vec<String>) -> Self {
        let mut style_preferences: Vec<String> = Vec::with_capacity(styles.len());
        for style in styles {
            let style = style.trim().to_string();
            if !style.is_empty() && !style_preferences.contains(&style) {
                style_preferences.push(style);
            }
        }
        Self {
            style_preferences,
            ..self
        }
    }
}

impl Default for UserProfile {
    /// Demo profile used until the user edits their own.
    fn default() -> Self {
        Self {
            name: "Alex".to_string(),
            age: 28,
            gender: Gender::Female,
            body_shape: BodyShape::Hourglass,
            skin_tone: SkinTone::MediumNeutral,
            height_cm: 165,
            location: "New York".to_string(),
            style_preferences: vec!["Minimalist".to_string(), "Chic".to_string()],
            budget: Budget::Medium,
            favorite_shades: Vec::new(),
        }
    }
}

/// Returns `#RRGGBB` (upper-case) for `#rgb`/`#rrggbb` input with or without `#`.
pub fn normalize_hex(input: &str) -> Option<String> {
    let digits = input.trim().trim_start_matches('#');
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let expanded = match digits.len() {
        3 => digits.chars().flat_map(|c| [c, c]).collect::<String>(),
        6 => digits.to_string(),
        _ => return None,
    };
    Some(format!("#{}", expanded.to_ascii_uppercase()))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    /// Degrees Celsius.
    pub temp: f64,
    pub condition: String,
    pub location: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Marketplace {
    Amazon,
    Myntra,
    Ajio,
    Other,
}

/// A purchasable garment or accessory inside an outfit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductItem {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub brand: String,
    pub price: f64,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub url: String,
    /// Price tracking enabled.
    #[serde(default)]
    pub tracking: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<Marketplace>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outfit {
    pub title: String,
    pub description: String,
    /// "Why it works for you".
    pub reasoning: String,
    pub items: Vec<ProductItem>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Complete for Outfit {
    fn is_complete(&self) -> bool {
        filled(&self.title)
            && filled(&self.description)
            && filled(&self.reasoning)
            && !self.items.is_empty()
            && self
                .items
                .iter()
                .all(|i| filled(&i.name) && filled(&i.brand))
    }
}

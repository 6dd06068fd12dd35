//! Plain-text cards for results shown in the terminal.

use crate::domain::{
    BeautyAnalysis, BodyShapeAnalysis, ColorPaletteAnalysis, Outfit, PaletteColor, UserProfile,
    WeatherData, WorkoutPlan,
};
use std::fmt::Write as _;

const RULE: &str = "────────────────────────────────────────";

pub fn weather_card(weather: &WeatherData) -> String {
    let hint = if weather.condition.to_lowercase().contains("rain") {
        "Bring a layer that can handle the rain."
    } else {
        "Good day for your favourite pieces."
    };
    format!(
        "Forecast for {}: {}°C, {}\n{}",
        weather.location, weather.temp, weather.condition, hint
    )
}

pub fn outfit_card(outfit: &Outfit) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "✦ {}", outfit.title);
    let _ = writeln!(out, "{}", outfit.description);
    if !outfit.tags.is_empty() {
        let _ = writeln!(out, "[{}]", outfit.tags.join("] ["));
    }
    let _ = writeln!(out);
    for item in &outfit.items {
        let currency = if item.currency.is_empty() {
            "USD"
        } else {
            item.currency.as_str()
        };
        let _ = write!(out, "  • {} ({}): {:.2} {}", item.name, item.brand, item.price, currency);
        if let Some(rating) = item.rating {
            let _ = write!(out, " ★{:.1}", rating);
        }
        let _ = writeln!(out);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Why it works for you: {}", outfit.reasoning);
    let _ = write!(out, "{}", RULE);
    out
}

pub fn workout_card(plan: &WorkoutPlan) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "Focus: {}", plan.focus_area);
    let _ = writeln!(out, "Goal: {}", plan.goal);
    if !plan.frequency.is_empty() {
        let _ = writeln!(out, "Frequency: {}", plan.frequency);
    }
    let _ = writeln!(out, "\nWarm-up");
    for step in &plan.warmup {
        let _ = writeln!(out, "  - {}", step);
    }
    let _ = writeln!(out, "\nMain circuit");
    for (i, ex) in plan.main_circuit.iter().enumerate() {
        let _ = writeln!(out, "  {}. {} ({})", i + 1, ex.name, ex.reps);
        let _ = writeln!(out, "     {}", ex.description);
        let _ = writeln!(out, "     Why: {}", ex.benefit);
    }
    let _ = writeln!(out, "\nCool-down");
    for step in &plan.cooldown {
        let _ = writeln!(out, "  - {}", step);
    }
    let _ = write!(out, "{}", RULE);
    out
}

pub fn body_shape_card(analysis: &BodyShapeAnalysis) -> String {
    format!(
        "Detected shape: {}\n{}",
        analysis.shape, analysis.reasoning
    )
}

pub fn beauty_card(analysis: &BeautyAnalysis) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", RULE);
    if !analysis.face_shape.is_empty() {
        let _ = writeln!(out, "Face shape: {}", analysis.face_shape);
    }
    let _ = writeln!(out, "{} ({})", analysis.skin_tone, analysis.undertone);
    let _ = writeln!(out, "Lips:  {}", analysis.recommended_lip_colors.join("  "));
    if !analysis.recommended_blush_colors.is_empty() {
        let _ = writeln!(out, "Blush: {}", analysis.recommended_blush_colors.join("  "));
    }
    if !analysis.recommended_eye_colors.is_empty() {
        let _ = writeln!(out, "Eyes:  {}", analysis.recommended_eye_colors.join("  "));
    }
    let _ = writeln!(out, "Hair:  {}", analysis.recommended_hair_styles.join(", "));
    for tip in &analysis.placement_tips {
        let _ = writeln!(out, "  · {}", tip);
    }
    let _ = write!(out, "{}", RULE);
    out
}

fn swatches(colors: &[PaletteColor]) -> String {
    colors
        .iter()
        .map(|c| format!("{} {}", c.name, c.hex))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn palette_card(analysis: &ColorPaletteAnalysis) -> String {
    format!(
        "{rule}\n{season}\n{description}\n\nBest:     {best}\nNeutrals: {neutrals}\nAvoid:    {avoid}\n{rule}",
        rule = RULE,
        season = analysis.season,
        description = analysis.description,
        best = swatches(&analysis.best_colors),
        neutrals = swatches(&analysis.neutrals),
        avoid = swatches(&analysis.avoid_colors),
    )
}

pub fn profile_card(profile: &UserProfile) -> String {
    format!(
        "{name}, {age} · {gender} · {height} cm · {location}\nBody: {shape} · Skin: {skin} · Budget: {budget}\nStyle: {styles}\nFavourite shades: {shades}",
        name = profile.name,
        age = profile.age,
        gender = profile.gender,
        height = profile.height_cm,
        location = profile.location,
        shape = profile.body_shape,
        skin = profile.skin_tone,
        budget = profile.budget,
        styles = profile.style_preferences.join(", "),
        shades = if profile.favorite_shades.is_empty() {
            "none yet".to_string()
        } else {
            profile.favorite_shades.join(" ")
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BodyShape, Exercise, ProductItem};

    #[test]
    fn test_outfit_card_lists_items() {
        let outfit = Outfit {
            title: "Rainy Commute".to_string(),
            description: "Waterproof polish".to_string(),
            reasoning: "A longline coat elongates the frame".to_string(),
            items: vec![ProductItem {
                id: "1".to_string(),
                name: "Longline Raincoat".to_string(),
                brand: "Rains".to_string(),
                price: 120.0,
                currency: String::new(),
                image_url: String::new(),
                url: String::new(),
                tracking: false,
                rating: Some(4.5),
                review_count: None,
                source: None,
            }],
            tags: vec!["Rainy Day".to_string()],
        };
        let card = outfit_card(&outfit);
        assert!(card.contains("✦ Rainy Commute"));
        assert!(card.contains("Longline Raincoat (Rains): 120.00 USD ★4.5"));
        assert!(card.contains("[Rainy Day]"));
        assert!(card.contains("Why it works for you: A longline coat"));
    }

    #[test]
    fn test_workout_card_numbers_exercises() {
        let plan = WorkoutPlan {
            focus_area: "Upper Body".to_string(),
            goal: "Balance hips".to_string(),
            frequency: String::new(),
            warmup: vec!["Arm circles".to_string()],
            main_circuit: vec![Exercise {
                name: "Push-Ups".to_string(),
                reps: "3 x 10".to_string(),
                description: "Chest to floor".to_string(),
                benefit: "Broadens shoulders".to_string(),
            }],
            cooldown: vec![],
        };
        let card = workout_card(&plan);
        assert!(card.contains("1. Push-Ups (3 x 10)"));
        assert!(!card.contains("Frequency"));
    }

    #[test]
    fn test_weather_hint() {
        let weather = WeatherData {
            temp: 12.0,
            condition: "Light Rain".to_string(),
            location: "London".to_string(),
        };
        assert!(weather_card(&weather).contains("rain"));
    }

    #[test]
    fn test_profile_card() {
        let profile = UserProfile::default().with_body_shape(BodyShape::Apple);
        let card = profile_card(&profile);
        assert!(card.contains("Body: Apple"));
        assert!(card.contains("none yet"));
    }
}

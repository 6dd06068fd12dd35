//! Prompt builders for each stylist use case.

use super::extract::{OUTFIT_CLOSE, OUTFIT_OPEN};
use crate::domain::{UserProfile, WeatherData};

/// Persona shared by outfit and chat requests.
pub const STYLIST_PERSONA: &str = "\
You are Ixora, a world-class personal fashion designer and stylist.
Your goal is to help the user feel seen and styled.
You understand body types, skin tones (color analysis), and face shapes deeply.
You are empathetic, direct, and confident. Avoid fluff.
When suggesting outfits, explain \"Why it works for you\" based on their specific profile.
Respect budget and constraints.
Do NOT give medical advice.";

/// Proportion-balancing guidance for every body shape. Sent verbatim; the
/// model picks the line matching the user.
pub const WORKOUT_SHAPE_POLICY: &str = "\
- Pear: focus on upper body width (shoulders, back, arms) to balance fuller hips.
- Apple: focus on core definition and leg toning.
- Inverted Triangle: focus on lower body volume (glutes, legs) and keep shoulder work light.
- Rectangle: focus on waist definition and building curves through glutes and shoulders.
- Hourglass: focus on balanced full-body toning that keeps proportions even.";

pub fn daily_outfit(profile: &UserProfile, weather: &WeatherData) -> String {
    format!(
        "Create a daily outfit for {name}.
Profile: Age {age}, {gender}, Body: {shape}, Skin: {skin}.
Style: {styles}. Budget: {budget}.
Context: Weather is {condition}, {temp}°C in {location}.

Provide a complete look including accessories.
For image URLs, use \"https://picsum.photos/300/400?random=1\" (increment the random number per item).",
        name = profile.name,
        age = profile.age,
        gender = profile.gender,
        shape = profile.body_shape,
        skin = profile.skin_tone,
        styles = profile.style_preferences.join(", "),
        budget = profile.budget,
        condition = weather.condition,
        temp = weather.temp,
        location = weather.location,
    )
}

/// System instruction for the stylist chat. Carries the profile, the
/// clarify-first policy, and the delimited outfit block contract.
pub fn chat_system_instruction(profile: &UserProfile, outfit_schema: &serde_json::Value) -> String {
    let profile_json =
        serde_json::to_string(profile).unwrap_or_else(|_| format!("{{\"name\":\"{}\"}}", profile.name));
    format!(
        "{persona}
User Profile: {profile_json}

Before proposing concrete items, ask one or two short clarifying questions
(preferred fabrics, the occasion, dress code) unless the request already
states them.

If the user asks for an outfit recommendation, specific clothing items, or a \"look\"
and you have enough detail, end your reply with exactly one JSON object strictly
following this schema, wrapped on its own lines between {open} and {close}:
{schema}

Otherwise, just reply with helpful text advice and no JSON.",
        persona = STYLIST_PERSONA,
        profile_json = profile_json,
        open = OUTFIT_OPEN,
        close = OUTFIT_CLOSE,
        schema = outfit_schema,
    )
}

pub const BODY_SHAPE_INSTRUCTION: &str = "Analyze the body shape of the person in this photo. \
Determine if they are Hourglass, Pear, Apple, Rectangle, or Inverted Triangle. \
Be objective and kind.";

pub fn workout_plan(profile: &UserProfile) -> String {
    format!(
        "Create a body-type specific workout plan for a {age} year old {gender} with a {shape} body shape.
The goal is aesthetic symmetry and general fitness, not bodybuilding.
Focus on balancing proportions suitable for a {shape} body shape:
{policy}
State the emphasis in focusArea and goal, and explain in each exercise's benefit why it helps a {shape} shape.
Keep it accessible for a home workout.",
        age = profile.age,
        gender = profile.gender,
        shape = profile.body_shape,
        policy = WORKOUT_SHAPE_POLICY,
    )
}

pub const BEAUTY_INSTRUCTION: &str = "Analyze this face for personal color analysis. \
Determine face shape, skin tone and undertone. \
Suggest 4 specific lipstick hex color codes that would suit them best, \
2-3 blush hex codes and 2-3 eyeshadow hex codes. \
Suggest 2 hairstyle keywords and short placement advice for blush, contour and liner.";

pub const COLOR_PALETTE_INSTRUCTION: &str = "Perform a seasonal color analysis of the person in this photo. \
Consider skin undertone, hair and eye color, and contrast level. \
Name the season (e.g. \"Deep Autumn\", \"Light Summer\") and describe why. \
List the best colors, wardrobe neutrals, and colors to avoid near the face, each with a name and hex code.";

//! Results of photo analyses and plan generation.

use super::entities::{BodyShape, Complete, filled};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyShapeAnalysis {
    #[serde(rename = "identifiedShape")]
    pub shape: BodyShape,
    pub reasoning: String,
}

impl Complete for BodyShapeAnalysis {
    fn is_complete(&self) -> bool {
        filled(&self.reasoning)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub name: String,
    pub reps: String,
    pub description: String,
    /// Why this helps the specific body shape.
    pub benefit: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    /// e.g. "Lower Body & Core".
    pub focus_area: String,
    pub goal: String,
    #[serde(default)]
    pub frequency: String,
    pub warmup: Vec<String>,
    pub main_circuit: Vec<Exercise>,
    pub cooldown: Vec<String>,
}

impl Complete for WorkoutPlan {
    fn is_complete(&self) -> bool {
        filled(&self.focus_area)
            && filled(&self.goal)
            && !self.main_circuit.is_empty()
            && self.main_circuit.iter().all(|e| filled(&e.name))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeautyAnalysis {
    #[serde(default)]
    pub face_shape: String,
    pub skin_tone: String,
    pub undertone: String,
    /// Hex codes.
    pub recommended_lip_colors: Vec<String>,
    #[serde(default)]
    pub recommended_blush_colors: Vec<String>,
    #[serde(default)]
    pub recommended_eye_colors: Vec<String>,
    pub recommended_hair_styles: Vec<String>,
    /// Where and how to apply colour (contour, blush placement, liner).
    #[serde(default)]
    pub placement_tips: Vec<String>,
}

impl Complete for BeautyAnalysis {
    fn is_complete(&self) -> bool {
        filled(&self.skin_tone)
            && filled(&self.undertone)
            && !self.recommended_lip_colors.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteColor {
    pub name: String,
    pub hex: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPaletteAnalysis {
    /// Seasonal type, e.g. "Deep Autumn".
    pub season: String,
    pub description: String,
    pub best_colors: Vec<PaletteColor>,
    pub neutrals: Vec<PaletteColor>,
    pub avoid_colors: Vec<PaletteColor>,
}

impl Complete for ColorPaletteAnalysis {
    fn is_complete(&self) -> bool {
        filled(&self.season) && !self.best_colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_shape_analysis_decodes_identified_shape() {
        let parsed: BodyShapeAnalysis = serde_json::from_str(
            r#"{"identifiedShape":"Inverted Triangle","reasoning":"Broad shoulders"}"#,
        )
        .unwrap();
        assert_eq!(parsed.shape, BodyShape::InvertedTriangle);
        assert!(parsed.is_complete());
    }

    #[test]
    fn test_workout_plan_requires_main_circuit() {
        let plan: WorkoutPlan = serde_json::from_str(
            r#"{"focusArea":"Upper Body","goal":"Balance","warmup":[],"mainCircuit":[],"cooldown":[]}"#,
        )
        .unwrap();
        assert_eq!(plan.frequency, "");
        assert!(!plan.is_complete());
    }

    #[test]
    fn test_beauty_analysis_optional_categories_default() {
        let parsed: BeautyAnalysis = serde_json::from_str(
            r##"{"skinTone":"Medium","undertone":"Warm","recommendedLipColors":["#B5533C"],"recommendedHairStyles":["soft layers"]}"##,
        )
        .unwrap();
        assert!(parsed.face_shape.is_empty());
        assert!(parsed.placement_tips.is_empty());
        assert!(parsed.is_complete());
    }

    #[test]
    fn test_palette_requires_season_and_best_colors() {
        let palette = ColorPaletteAnalysis {
            season: "Deep Autumn".to_string(),
            description: "Rich and warm".to_string(),
            best_colors: vec![],
            neutrals: vec![],
            avoid_colors: vec![],
        };
        assert!(!palette.is_complete());
    }
}

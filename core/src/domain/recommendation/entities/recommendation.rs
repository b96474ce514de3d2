use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::recommendation::prompts::{
    build_classification_prompt, build_diet_prompt, build_meal_plan_prompt,
};

pub const DOWNLOAD_FILE_NAME: &str = "diet_recommendations.txt";

/// The three prompts of a recommendation cycle, in the order they are sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptKind {
    Classification,
    DietSuggestions,
    MealPlan,
}

impl PromptKind {
    pub const ALL: [PromptKind; 3] = [
        PromptKind::Classification,
        PromptKind::DietSuggestions,
        PromptKind::MealPlan,
    ];

    pub fn build(&self, disease: &str, language: &str) -> String {
        match self {
            PromptKind::Classification => build_classification_prompt(disease, language),
            PromptKind::DietSuggestions => build_diet_prompt(disease, language),
            PromptKind::MealPlan => build_meal_plan_prompt(disease, language),
        }
    }

    /// Section heading used on the page and in the downloaded document.
    pub fn label(&self) -> &'static str {
        match self {
            PromptKind::Classification => "Disease Classification",
            PromptKind::DietSuggestions => "Diet Suggestions",
            PromptKind::MealPlan => "Meal Plan",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PromptKind::Classification => "classification",
            PromptKind::DietSuggestions => "diet_suggestions",
            PromptKind::MealPlan => "meal_plan",
        }
    }
}

impl fmt::Display for PromptKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecommendationResult {
    pub classification: String,
    pub diet_suggestions: String,
    pub meal_plan: String,
}

impl RecommendationResult {
    pub fn new(classification: String, diet_suggestions: String, meal_plan: String) -> Self {
        Self {
            classification,
            diet_suggestions,
            meal_plan,
        }
    }

    pub fn text_for(&self, kind: PromptKind) -> &str {
        match kind {
            PromptKind::Classification => &self.classification,
            PromptKind::DietSuggestions => &self.diet_suggestions,
            PromptKind::MealPlan => &self.meal_plan,
        }
    }

    pub fn sections(&self) -> impl Iterator<Item = (PromptKind, &str)> {
        PromptKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.text_for(kind)))
    }

    /// Plain-text document offered as `diet_recommendations.txt`.
    pub fn to_document(&self) -> String {
        self.sections()
            .map(|(kind, text)| format!("{}:\n{}", kind.label(), text))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_layout_is_exact() {
        let result = RecommendationResult::new(
            "Viral infection".to_string(),
            "Eat soup".to_string(),
            "Day 1: oats".to_string(),
        );

        assert_eq!(
            result.to_document(),
            "Disease Classification:\nViral infection\n\nDiet Suggestions:\nEat soup\n\nMeal Plan:\nDay 1: oats"
        );
    }

    #[test]
    fn test_document_keeps_multiline_text_verbatim() {
        let result = RecommendationResult::new(
            "line 1\nline 2".to_string(),
            String::new(),
            "  padded  ".to_string(),
        );

        assert_eq!(
            result.to_document(),
            "Disease Classification:\nline 1\nline 2\n\nDiet Suggestions:\n\n\nMeal Plan:\n  padded  "
        );
    }

    #[test]
    fn test_sections_follow_prompt_order() {
        let result = RecommendationResult::new("A".into(), "B".into(), "C".into());
        let sections: Vec<_> = result.sections().collect();

        assert_eq!(
            sections,
            vec![
                (PromptKind::Classification, "A"),
                (PromptKind::DietSuggestions, "B"),
                (PromptKind::MealPlan, "C"),
            ]
        );
    }
}

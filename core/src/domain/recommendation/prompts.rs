//! Prompt templates for the three calls of a recommendation cycle.
//!
//! Inputs are interpolated verbatim. Callers are responsible for rejecting
//! empty values before building a prompt.

pub fn build_classification_prompt(disease: &str, language: &str) -> String {
    format!(
        "Classify the disease '{disease}' (e.g., genetic, fungal, viral, bacterial, or other). \
         Provide a simple explanation in {language} for a layperson."
    )
}

pub fn build_diet_prompt(disease: &str, language: &str) -> String {
    format!(
        "Provide detailed diet suggestions for the disease '{disease}' in {language}. \
         List specific foods to eat and avoid, explaining why they are beneficial or harmful."
    )
}

pub fn build_meal_plan_prompt(disease: &str, language: &str) -> String {
    format!(
        "Create a personalized weekly meal plan for someone with '{disease}' in {language}. \
         Include breakfast, lunch, and dinner with specific food items and simple recipes."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recommendation::entities::{Language, PromptKind};

    #[test]
    fn test_every_prompt_mentions_disease_and_language() {
        let diseases = ["Flu", "Type 2 diabetes", "Crohn's disease", "மலேரியா"];

        for disease in diseases {
            for language in Language::ALL {
                for kind in PromptKind::ALL {
                    let prompt = kind.build(disease, language.as_str());
                    assert!(prompt.contains(disease), "{kind} prompt lost disease");
                    assert!(
                        prompt.contains(language.as_str()),
                        "{kind} prompt lost language"
                    );
                }
            }
        }
    }

    #[test]
    fn test_classification_prompt_text() {
        assert_eq!(
            build_classification_prompt("Flu", "English"),
            "Classify the disease 'Flu' (e.g., genetic, fungal, viral, bacterial, or other). \
             Provide a simple explanation in English for a layperson."
        );
    }

    #[test]
    fn test_diet_prompt_asks_for_foods_to_eat_and_avoid() {
        let prompt = build_diet_prompt("Gout", "Spanish");
        assert!(prompt.starts_with("Provide detailed diet suggestions for the disease 'Gout' in Spanish."));
        assert!(prompt.contains("foods to eat and avoid"));
    }

    #[test]
    fn test_meal_plan_prompt_covers_every_meal() {
        let prompt = build_meal_plan_prompt("Anemia", "Hindi");
        assert!(prompt.contains("weekly meal plan"));
        for meal in ["breakfast", "lunch", "dinner"] {
            assert!(prompt.contains(meal));
        }
    }

    #[test]
    fn test_prompts_do_not_filter_input() {
        let prompt = build_diet_prompt("  ", "");
        assert!(prompt.contains("disease '  ' in ."));
    }
}

use dietwise_core::domain::recommendation::{
    entities::{Gender, Language, RecommendationResult},
    value_objects::SubmitFormInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Fields posted by the HTML form. Every field may be missing or empty.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SubmitRecommendationForm {
    pub language: Option<String>,
    pub disease: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub allergies: Option<String>,
}

impl From<SubmitRecommendationForm> for SubmitFormInput {
    fn from(form: SubmitRecommendationForm) -> Self {
        SubmitFormInput {
            language: form.language,
            disease: form.disease,
            age: form.age,
            gender: form.gender,
            allergies: form.allergies,
        }
    }
}

/// Results posted back by the "Download Recommendations" button.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DownloadRecommendationsForm {
    #[serde(default)]
    pub classification: String,
    #[serde(default)]
    pub diet_suggestions: String,
    #[serde(default)]
    pub meal_plan: String,
}

impl From<DownloadRecommendationsForm> for RecommendationResult {
    // Browsers send form line breaks as CRLF.
    fn from(form: DownloadRecommendationsForm) -> Self {
        RecommendationResult::new(
            form.classification.replace("\r\n", "\n"),
            form.diet_suggestions.replace("\r\n", "\n"),
            form.meal_plan.replace("\r\n", "\n"),
        )
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct GetRecommendationsRequest {
    #[validate(length(
        min = 1,
        max = 500,
        message = "disease_name must be between 1 and 500 characters"
    ))]
    pub disease_name: String,
    pub language: Language,
    #[validate(range(max = 120, message = "age must be between 0 and 120"))]
    pub age: Option<u8>,
    pub gender: Option<Gender>,
    #[validate(length(max = 1000, message = "allergies must be at most 1000 characters"))]
    pub allergies: Option<String>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GetRecommendationsResponse {
    pub data: RecommendationResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(age: Option<u8>) -> GetRecommendationsRequest {
        GetRecommendationsRequest {
            disease_name: "Flu".to_string(),
            language: Language::Hindi,
            age,
            gender: Some(Gender::Female),
            allergies: None,
        }
    }

    #[test]
    fn test_age_range_is_enforced() {
        assert!(request(None).validate().is_ok());
        assert!(request(Some(0)).validate().is_ok());
        assert!(request(Some(120)).validate().is_ok());
        assert!(request(Some(121)).validate().is_err());
    }

    #[test]
    fn test_empty_disease_is_rejected() {
        let mut payload = request(Some(30));
        payload.disease_name = String::new();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn test_unknown_language_does_not_deserialize() {
        let payload = serde_json::from_str::<GetRecommendationsRequest>(
            r#"{"disease_name": "Flu", "language": "German"}"#,
        );
        assert!(payload.is_err());
    }

    #[test]
    fn test_download_form_normalizes_line_breaks() {
        let result = RecommendationResult::from(DownloadRecommendationsForm {
            classification: "a\r\nb".to_string(),
            diet_suggestions: "c".to_string(),
            meal_plan: "d\r\n".to_string(),
        });

        assert_eq!(result.classification, "a\nb");
        assert_eq!(result.meal_plan, "d\n");
    }
}

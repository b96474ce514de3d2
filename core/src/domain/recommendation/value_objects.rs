use crate::domain::recommendation::entities::{FormInput, Language};

#[derive(Debug, Clone)]
pub struct GetRecommendationsInput {
    pub disease_name: String,
    pub language: Language,
}

impl From<&FormInput> for GetRecommendationsInput {
    fn from(input: &FormInput) -> Self {
        Self {
            disease_name: input.disease_name.clone(),
            language: input.language,
        }
    }
}

/// Raw form fields exactly as posted by the browser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitFormInput {
    pub language: Option<String>,
    pub disease: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub allergies: Option<String>,
}

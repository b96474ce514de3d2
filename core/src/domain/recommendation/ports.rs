use std::future::Future;

use crate::domain::recommendation::{
    entities::{FormOutcome, ModelError, RecommendationResult},
    value_objects::{GetRecommendationsInput, SubmitFormInput},
};

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Sends one prompt and returns the generated text verbatim.
    fn generate(&self, prompt: String)
    -> impl Future<Output = Result<String, ModelError>> + Send;
}

/// Service trait for recommendation business logic
#[cfg_attr(test, mockall::automock)]
pub trait RecommendationService: Send + Sync {
    fn get_recommendations(
        &self,
        input: GetRecommendationsInput,
    ) -> impl Future<Output = Result<RecommendationResult, ModelError>> + Send;

    fn submit_form(
        &self,
        input: SubmitFormInput,
    ) -> impl Future<Output = Result<FormOutcome, ModelError>> + Send;
}

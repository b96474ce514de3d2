use std::time::Instant;

use tracing::{Instrument, debug, error, info, info_span, warn};

use crate::domain::{
    common::{generate_uuid_v7, services::Service},
    recommendation::{
        entities::{FormInput, FormOutcome, ModelError, PromptKind, RecommendationResult},
        ports::{LLMClient, RecommendationService},
        value_objects::{GetRecommendationsInput, SubmitFormInput},
    },
};

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    async fn run_step(
        &self,
        kind: PromptKind,
        input: &GetRecommendationsInput,
    ) -> Result<String, ModelError> {
        let prompt = kind.build(&input.disease_name, input.language.as_str());
        let started = Instant::now();
        debug!(step = %kind, prompt_len = prompt.len(), "sending prompt");

        match self.llm_client.generate(prompt).await {
            Ok(text) => {
                debug!(
                    step = %kind,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "received model response"
                );
                Ok(text)
            }
            Err(e) => {
                error!(step = %kind, error = %e, "recommendation step failed");
                Err(e)
            }
        }
    }
}

impl<LLM> RecommendationService for Service<LLM>
where
    LLM: LLMClient,
{
    async fn get_recommendations(
        &self,
        input: GetRecommendationsInput,
    ) -> Result<RecommendationResult, ModelError> {
        let cycle_id = generate_uuid_v7();
        let span = info_span!("recommendation_cycle", %cycle_id, language = %input.language);

        async move {
            // Strictly sequential: a failure stops the cycle and drops earlier results.
            let classification = self.run_step(PromptKind::Classification, &input).await?;
            let diet_suggestions = self.run_step(PromptKind::DietSuggestions, &input).await?;
            let meal_plan = self.run_step(PromptKind::MealPlan, &input).await?;

            info!("recommendation cycle completed");
            Ok(RecommendationResult::new(
                classification,
                diet_suggestions,
                meal_plan,
            ))
        }
        .instrument(span)
        .await
    }

    async fn submit_form(&self, input: SubmitFormInput) -> Result<FormOutcome, ModelError> {
        let form = match FormInput::parse(&input) {
            Ok(form) => form,
            Err(e) => {
                warn!(reason = %e, "form submission rejected");
                return Ok(FormOutcome::Warning(e));
            }
        };

        debug!(
            age = form.age.value(),
            gender = %form.gender,
            has_allergies = form.allergies.is_some(),
            "form submission accepted"
        );

        let result = self
            .get_recommendations(GetRecommendationsInput::from(&form))
            .await?;

        Ok(FormOutcome::Recommendations {
            input: form,
            result,
        })
    }
}

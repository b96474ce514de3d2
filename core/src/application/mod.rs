use crate::{
    domain::common::{DietwiseConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::llm::GeminiLLMClient,
};

pub type DietwiseService = Service<GeminiLLMClient>;

pub fn create_service(config: DietwiseConfig) -> Result<DietwiseService, CoreError> {
    if config.llm.gemini_model.trim().is_empty() {
        return Err(CoreError::InvalidConfiguration(
            "gemini model name must not be empty".to_string(),
        ));
    }

    let base_url = &config.llm.gemini_base_url;
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(CoreError::InvalidConfiguration(format!(
            "gemini base url must be http(s), got '{}'",
            base_url
        )));
    }

    tracing::info!(
        model = %config.llm.gemini_model,
        credential_present = !config.llm.gemini_api_key.trim().is_empty(),
        "creating recommendation service"
    );

    Ok(Service::new(GeminiLLMClient::from(&config.llm)))
}

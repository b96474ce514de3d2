use axum::{Form, extract::State, response::Html};
use dietwise_core::domain::{
    common::entities::app_errors::CoreError,
    recommendation::{
        entities::FormOutcome, ports::RecommendationService, value_objects::SubmitFormInput,
    },
};

use crate::application::http::{
    recommendation::{
        validators::SubmitRecommendationForm,
        views::{PageView, render_page},
    },
    server::{api_entities::api_error::ApiError, app_state::AppState},
};

/// Handles the "Get Recommendations" button.
///
/// Missing or invalid fields re-render the form with a warning and make no
/// model calls. Model failures surface as the default error response.
pub async fn submit_form(
    State(state): State<AppState>,
    Form(payload): Form<SubmitRecommendationForm>,
) -> Result<Html<String>, ApiError> {
    let input = SubmitFormInput::from(payload);

    let outcome = state
        .service
        .submit_form(input.clone())
        .await
        .map_err(CoreError::from)?;

    let page = PageView::new(&state.args.server, &input);
    let page = match &outcome {
        FormOutcome::Warning(warning) => page.with_warning(warning.to_string()),
        FormOutcome::Recommendations { result, .. } => page.with_result(result),
    };

    Ok(Html(render_page(&page)))
}

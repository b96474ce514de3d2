use axum::extract::State;
use dietwise_core::domain::{
    common::entities::app_errors::CoreError,
    recommendation::{ports::RecommendationService, value_objects::GetRecommendationsInput},
};

use crate::application::http::{
    recommendation::validators::{GetRecommendationsRequest, GetRecommendationsResponse},
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/recommendations",
    tag = "recommendations",
    summary = "Classify a disease and suggest a diet and a weekly meal plan",
    description = "Runs the three model calls in order: classification, diet suggestions, meal plan. Any failing call aborts the request.",
    responses(
        (status = 200, body = GetRecommendationsResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 502, body = ApiErrorResponse)
    ),
    request_body = GetRecommendationsRequest
)]
pub async fn get_recommendations(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GetRecommendationsRequest>,
) -> Result<Response<GetRecommendationsResponse>, ApiError> {
    if payload.disease_name.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "disease_name must not be blank".to_string(),
        ));
    }

    tracing::debug!(
        age = ?payload.age,
        gender = ?payload.gender,
        has_allergies = payload.allergies.is_some(),
        "recommendation request accepted"
    );

    let result = state
        .service
        .get_recommendations(GetRecommendationsInput {
            disease_name: payload.disease_name,
            language: payload.language,
        })
        .await
        .map_err(CoreError::from)?;

    Ok(Response::OK(GetRecommendationsResponse { data: result }))
}

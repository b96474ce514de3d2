use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dietwise_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{message}")]
    BadGateway { code: &'static str, message: String },

    #[error("{0}")]
    InternalServerError(String),
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    pub code: String,
    pub status: u16,
    pub message: String,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::BadGateway { .. } => StatusCode::BAD_GATEWAY,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "E_BAD_REQUEST",
            ApiError::BadGateway { code, .. } => *code,
            ApiError::InternalServerError(_) => "E_INTERNAL_SERVER_ERROR",
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::ModelError(e) => ApiError::BadGateway {
                code: e.code(),
                message: e.to_string(),
            },
            CoreError::InvalidConfiguration(message) => ApiError::InternalServerError(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.code(), "request failed: {}", self);
        }

        let body = ApiErrorResponse {
            code: self.code().to_string(),
            status: status.as_u16(),
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// JSON extractor that runs `validator` rules before reaching the handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|e| ApiError::BadRequest(e.to_string().replace('\n', ", ")))?;

        Ok(ValidateJson(value))
    }
}

#[cfg(test)]
mod tests {
    use dietwise_core::domain::recommendation::entities::ModelError;

    use super::*;

    #[test]
    fn test_model_errors_become_bad_gateway() {
        let error = ApiError::from(CoreError::from(ModelError::QuotaExceeded(
            "try later".to_string(),
        )));

        assert_eq!(error.status_code(), StatusCode::BAD_GATEWAY);
        assert_eq!(error.code(), "E_MODEL_QUOTA_EXCEEDED");
        assert!(error.to_string().contains("try later"));
    }

    #[test]
    fn test_configuration_errors_are_internal() {
        let error = ApiError::from(CoreError::InvalidConfiguration("bad".to_string()));

        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

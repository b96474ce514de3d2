use axum::{
    Form,
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::IntoResponse,
};
use dietwise_core::domain::recommendation::entities::{DOWNLOAD_FILE_NAME, RecommendationResult};

use crate::application::http::recommendation::validators::DownloadRecommendationsForm;

pub async fn download_recommendations(
    Form(payload): Form<DownloadRecommendationsForm>,
) -> impl IntoResponse {
    let document = RecommendationResult::from(payload).to_document();

    (
        [
            (CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", DOWNLOAD_FILE_NAME),
            ),
        ],
        document,
    )
}

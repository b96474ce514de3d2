use axum::{Json, extract::State};
use dietwise_core::domain::recommendation::entities::{
    Age, DOWNLOAD_FILE_NAME, Gender, Language,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::application::http::server::app_state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct PublicConfig {
    pub model: String,
    pub languages: Vec<Language>,
    pub genders: Vec<Gender>,
    pub age_min: u8,
    pub age_max: u8,
    pub download_file_name: String,
    pub contact_email: String,
}

#[utoipa::path(
    get,
    path = "/config",
    tag = "config",
    summary = "Public configuration of the recommendation form",
    responses(
        (status = 200, body = PublicConfig)
    )
)]
pub async fn get_config(State(state): State<AppState>) -> Json<PublicConfig> {
    Json(PublicConfig {
        model: state.args.llm.gemini_model.clone(),
        languages: Language::ALL.to_vec(),
        genders: Gender::ALL.to_vec(),
        age_min: Age::MIN,
        age_max: Age::MAX,
        download_file_name: DOWNLOAD_FILE_NAME.to_string(),
        contact_email: state.args.server.contact_email.clone(),
    })
}

use super::handlers::{
    download_recommendations::download_recommendations,
    get_recommendations::{__path_get_recommendations, get_recommendations},
    show_form::show_form,
    submit_form::submit_form,
};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_recommendations))]
pub struct RecommendationApiDoc;

pub fn recommendation_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    let router = Router::new()
        .route(&format!("{}/", root_path), get(show_form))
        .route(&format!("{}/recommendations", root_path), post(submit_form))
        .route(
            &format!("{}/recommendations/download", root_path),
            post(download_recommendations),
        )
        .route(
            &format!("{}/api/recommendations", root_path),
            post(get_recommendations),
        );

    if root_path.is_empty() {
        router
    } else {
        router.route(root_path, get(show_form))
    }
}

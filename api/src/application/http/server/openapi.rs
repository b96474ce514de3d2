use crate::application::http::recommendation::router::RecommendationApiDoc;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Dietwise API"
    ),
    paths(
        crate::application::http::health::get_health,
        crate::application::http::server::config::get_config,
    ),
    nest(
        (path = "/api", api = RecommendationApiDoc),
    )
)]
pub struct ApiDoc;

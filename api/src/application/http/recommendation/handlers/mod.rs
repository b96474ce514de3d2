pub mod download_recommendations;
pub mod get_recommendations;
pub mod show_form;
pub mod submit_form;

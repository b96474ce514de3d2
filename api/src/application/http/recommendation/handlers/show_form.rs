use axum::{extract::State, response::Html};
use dietwise_core::domain::recommendation::value_objects::SubmitFormInput;

use crate::application::http::{
    recommendation::views::{PageView, render_page},
    server::app_state::AppState,
};

pub async fn show_form(State(state): State<AppState>) -> Html<String> {
    let form = SubmitFormInput::default();

    Html(render_page(&PageView::new(&state.args.server, &form)))
}

use std::sync::Arc;

use dietwise_core::application::DietwiseService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: DietwiseService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: DietwiseService) -> Self {
        Self { args, service }
    }
}

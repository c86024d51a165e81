use std::sync::Arc;

use aircook_core::application::AirCookService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: AirCookService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: AirCookService) -> Self {
        Self { args, service }
    }
}

use std::sync::Arc;

use heuksal_core::application::HeuksalService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: HeuksalService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: HeuksalService) -> Self {
        Self { args, service }
    }
}

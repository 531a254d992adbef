use std::sync::Arc;

use recipe_chat_core::application::RecipeChatService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: RecipeChatService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: RecipeChatService) -> Self {
        Self { args, service }
    }
}

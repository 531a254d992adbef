use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;

/// LLM Client trait for calling a chat model with a single user message
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate_with_text(
        &self,
        prompt: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

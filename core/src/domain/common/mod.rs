use std::time::Duration;

pub mod entities;
pub mod services;

#[derive(Clone, Debug)]
pub struct RecipeChatConfig {
    pub dataset: DatasetConfig,
    pub llm: LLMConfig,
}

#[derive(Clone, Debug)]
pub struct DatasetConfig {
    pub path: String,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub base_url: String,
    pub model: String,
    /// No timeout is applied when unset; the request waits for the model.
    pub request_timeout: Option<Duration>,
}

use std::future::Future;

use crate::domain::chat::value_objects::ChatInput;

#[cfg_attr(test, mockall::automock)]
pub trait ChatService: Send + Sync {
    /// Always produces a reply; empty input, no match and an unavailable
    /// model each have their own fixed text.
    fn chat(&self, input: ChatInput) -> impl Future<Output = String> + Send;
}

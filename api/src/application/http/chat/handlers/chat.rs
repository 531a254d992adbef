use axum::extract::State;
use recipe_chat_core::domain::chat::{ports::ChatService, value_objects::ChatInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    chat::validators::ChatRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    pub response: String,
}

#[utoipa::path(
    post,
    path = "/chat",
    tag = "chat",
    summary = "Chat with the recipe assistant",
    description = "Ingredient lists get a recipe suggestion; anything else gets a canned or LLM-generated reply.",
    responses(
        (status = 200, body = ChatResponse)
    ),
    request_body = ChatRequest
)]
pub async fn chat(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ChatRequest>,
) -> Result<Response<ChatResponse>, ApiError> {
    let response = state
        .service
        .chat(ChatInput {
            query: payload.query,
        })
        .await;

    Ok(Response::OK(ChatResponse { response }))
}

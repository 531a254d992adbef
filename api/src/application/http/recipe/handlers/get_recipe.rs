use axum::extract::State;
use recipe_chat_core::domain::recipe::{
    ports::RecipeService,
    value_objects::{
        GetRecipeInput, GetRecipeOutcome, MISSING_INGREDIENTS_MESSAGE, NO_SIMILAR_RECIPE_MESSAGE,
        RecipeSuggestion,
    },
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::{
    recipe::validators::GetRecipeRequest,
    server::{
        api_entities::{
            api_error::{ApiError, ApiJson},
            response::Response,
        },
        app_state::AppState,
    },
};

/// One of three shapes, distinguished by their fields.
#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum GetRecipeResponse {
    Suggestion(RecipeSuggestion),
    Message { message: String },
    Error { error: String },
}

impl From<GetRecipeOutcome> for GetRecipeResponse {
    fn from(outcome: GetRecipeOutcome) -> Self {
        match outcome {
            GetRecipeOutcome::MissingIngredients => GetRecipeResponse::Error {
                error: MISSING_INGREDIENTS_MESSAGE.to_string(),
            },
            GetRecipeOutcome::NoMatch => GetRecipeResponse::Message {
                message: NO_SIMILAR_RECIPE_MESSAGE.to_string(),
            },
            GetRecipeOutcome::Suggestion(suggestion) => GetRecipeResponse::Suggestion(suggestion),
        }
    }
}

#[utoipa::path(
    post,
    path = "/get_recipe",
    tag = "recipe",
    summary = "Suggest a recipe from ingredients",
    description = "Finds the dataset recipe whose ingredients are most similar to the input and asks the local LLM for a short description inspired by its cuisine.",
    responses(
        (status = 200, body = GetRecipeResponse)
    ),
    request_body = GetRecipeRequest
)]
pub async fn get_recipe(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<GetRecipeRequest>,
) -> Result<Response<GetRecipeResponse>, ApiError> {
    let outcome = state
        .service
        .get_recipe(GetRecipeInput {
            ingredients: payload.ingredients,
        })
        .await;

    Ok(Response::OK(GetRecipeResponse::from(outcome)))
}

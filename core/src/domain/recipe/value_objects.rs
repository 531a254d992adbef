use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const MISSING_INGREDIENTS_MESSAGE: &str = "Please provide ingredients.";
pub const NO_SIMILAR_RECIPE_MESSAGE: &str = "No similar recipe found.";

#[derive(Debug, Clone)]
pub struct GetRecipeInput {
    pub ingredients: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeSuggestion {
    pub best_cuisine: String,
    pub matched_ingredients: Vec<String>,
    pub similarity_score: u8,
    pub llm_recipe: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GetRecipeOutcome {
    /// Ingredients were empty once trimmed.
    MissingIngredients,
    NoMatch,
    Suggestion(RecipeSuggestion),
}

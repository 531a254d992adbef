use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GetRecipeRequest {
    /// Free-text ingredient list, e.g. `egg, onion, tomato`. A missing field
    /// is treated as empty.
    #[serde(default)]
    #[schema(example = "egg, onion, tomato")]
    pub ingredients: String,
}

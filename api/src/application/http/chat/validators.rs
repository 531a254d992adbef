use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ChatRequest {
    #[serde(default)]
    #[schema(example = "egg, onion")]
    pub query: String,
}

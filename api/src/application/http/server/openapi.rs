use crate::application::http::{
    chat::router::ChatApiDoc, health::router::HealthApiDoc, recipe::router::RecipeApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(info(
    title = "Recipe Chat API",
    description = "Suggest recipes based on entered ingredients using a local LLM and similarity search"
))]
pub struct ApiDoc;

impl ApiDoc {
    /// The document with every router's paths merged in.
    pub fn full() -> utoipa::openapi::OpenApi {
        let mut openapi = ApiDoc::openapi();
        openapi.merge(RecipeApiDoc::openapi());
        openapi.merge(ChatApiDoc::openapi());
        openapi.merge(HealthApiDoc::openapi());
        openapi
    }
}

use crate::{
    domain::{
        common::{RecipeChatConfig, services::Service},
        recipe::ports::RecipeRepository,
    },
    infrastructure::{llm::ollama_client::OllamaLLMClient, recipe::InMemoryRecipeRepository},
};

pub type RecipeChatService = Service<InMemoryRecipeRepository, OllamaLLMClient>;

/// Loads the dataset and wires the Ollama client. A missing or malformed
/// dataset fails here, before the server binds.
pub async fn create_service(config: RecipeChatConfig) -> Result<RecipeChatService, anyhow::Error> {
    let recipe_repository = InMemoryRecipeRepository::from_json_file(&config.dataset.path).await?;
    tracing::info!(
        "Loaded {} recipes from {}",
        recipe_repository.count(),
        config.dataset.path
    );

    let llm_client = OllamaLLMClient::new(
        config.llm.base_url,
        config.llm.model,
        config.llm.request_timeout,
    )?;
    tracing::info!(
        "Using model {} at {}",
        llm_client.model_name(),
        llm_client.base_url()
    );

    Ok(Service::new(recipe_repository, llm_client))
}

use crate::domain::{generation::ports::LLMClient, recipe::ports::RecipeRepository};

/// Holds the adapters every domain service is implemented against.
///
/// The recipe repository is loaded once at startup and only read afterwards,
/// so cloning a `Service` shares the same dataset.
#[derive(Clone)]
pub struct Service<RR, LLM>
where
    RR: RecipeRepository,
    LLM: LLMClient,
{
    pub(crate) recipe_repository: RR,
    pub(crate) llm_client: LLM,
}

impl<RR, LLM> Service<RR, LLM>
where
    RR: RecipeRepository,
    LLM: LLMClient,
{
    pub fn new(recipe_repository: RR, llm_client: LLM) -> Self {
        Self {
            recipe_repository,
            llm_client,
        }
    }
}

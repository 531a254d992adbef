use crate::domain::{
    common::services::Service,
    generation::{
        entities::{ComposeStyle, Generation},
        ports::LLMClient,
        prompts::{chat_recipe_fallback, recipe_fallback, recipe_prompt},
    },
    recipe::{entities::Recipe, ports::RecipeRepository},
};

impl<RR, LLM> Service<RR, LLM>
where
    RR: RecipeRepository,
    LLM: LLMClient,
{
    /// Issue exactly one call to the collaborator. No retries.
    pub(crate) async fn generate(&self, prompt: String) -> Generation {
        match self.llm_client.generate_with_text(prompt).await {
            Ok(text) => Generation::Success(text),
            Err(e) => {
                tracing::warn!("Text generation unavailable: {}", e);
                Generation::Unavailable
            }
        }
    }

    /// Turn a matched recipe into the text shown to the user, asking the model
    /// for a short description and falling back to a fixed template.
    pub async fn compose(&self, user_text: &str, recipe: &Recipe, style: ComposeStyle) -> String {
        self.generate(recipe_prompt(user_text, &recipe.cuisine))
            .await
            .or_fallback(|| match style {
                ComposeStyle::Recipe => recipe_fallback(recipe),
                ComposeStyle::Chat => chat_recipe_fallback(user_text, recipe),
            })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::{
        common::entities::app_errors::CoreError, generation::ports::MockLLMClient,
        recipe::ports::MockRecipeRepository,
    };

    fn greek() -> Recipe {
        Recipe::new("greek", vec!["egg".into(), "onion".into(), "tomato".into()])
    }

    fn service(llm: MockLLMClient) -> Service<MockRecipeRepository, MockLLMClient> {
        let mut repository = MockRecipeRepository::new();
        repository
            .expect_all()
            .returning(|| Arc::from(Vec::<Recipe>::new()));
        Service::new(repository, llm)
    }

    #[tokio::test]
    async fn test_compose_returns_model_reply_verbatim() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .withf(|prompt| prompt.contains("greek cuisine"))
            .times(1)
            .returning(|_| Box::pin(async { Ok("Bake it.".to_string()) }));

        let text = service(llm)
            .compose("egg, onion, tomato", &greek(), ComposeStyle::Recipe)
            .await;
        assert_eq!(text, "Bake it.");
    }

    #[tokio::test]
    async fn test_compose_falls_back_per_style() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().times(2).returning(|_| {
            Box::pin(async { Err(CoreError::ExternalServiceError("down".to_string())) })
        });
        let service = service(llm);

        let recipe_text = service
            .compose("egg, onion, tomato", &greek(), ComposeStyle::Recipe)
            .await;
        assert_eq!(recipe_text, "(Local LLM unavailable) Suggested cuisine: greek.");

        let chat_text = service
            .compose("egg, onion, tomato", &greek(), ComposeStyle::Chat)
            .await;
        assert!(chat_text.contains("greek"));
        assert!(chat_text.contains("egg, onion, tomato"));
    }

}

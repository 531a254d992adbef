use crate::domain::{
    chat::{
        entities::Intent,
        intent::classify,
        ports::ChatService,
        value_objects::{CHAT_NO_MATCH_MESSAGE, ChatInput, EMPTY_QUERY_MESSAGE, canned_reply},
    },
    common::services::Service,
    generation::{
        entities::ComposeStyle,
        ports::LLMClient,
        prompts::{CHAT_UNAVAILABLE_MESSAGE, chat_prompt},
    },
    recipe::ports::{RecipeRepository, RecipeService},
};

impl<RR, LLM> ChatService for Service<RR, LLM>
where
    RR: RecipeRepository,
    LLM: LLMClient,
{
    async fn chat(&self, input: ChatInput) -> String {
        let query = input.query.trim();
        if query.is_empty() {
            return EMPTY_QUERY_MESSAGE.to_string();
        }

        match classify(query) {
            Intent::Ingredients => {
                let ingredients = query.to_lowercase();
                let matched = self.find_best_match(ingredients.clone()).await;
                let Some(recipe) = matched.recipe.as_ref() else {
                    return CHAT_NO_MATCH_MESSAGE.to_string();
                };

                self.compose(&ingredients, recipe, ComposeStyle::Chat).await
            }
            Intent::Chat => {
                if let Some(reply) = canned_reply(query) {
                    return reply.to_string();
                }

                self.generate(chat_prompt(query))
                    .await
                    .or_fallback(|| CHAT_UNAVAILABLE_MESSAGE.to_string())
            }
        }
    }
}

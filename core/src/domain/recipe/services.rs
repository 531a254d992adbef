use crate::domain::{
    common::services::Service,
    generation::{entities::ComposeStyle, ports::LLMClient},
    recipe::{
        entities::MatchResult,
        helpers::find_best_match,
        ports::{RecipeRepository, RecipeService},
        value_objects::{GetRecipeInput, GetRecipeOutcome, RecipeSuggestion},
    },
};

impl<RR, LLM> RecipeService for Service<RR, LLM>
where
    RR: RecipeRepository,
    LLM: LLMClient,
{
    async fn find_best_match(&self, ingredients: String) -> MatchResult {
        let recipes = self.recipe_repository.all();
        let total = recipes.len();

        let matched = match tokio::task::spawn_blocking(move || {
            find_best_match(&ingredients, &recipes)
        })
        .await
        {
            Ok(matched) => matched,
            Err(e) => {
                tracing::error!("Recipe scan task failed: {}", e);
                MatchResult::none()
            }
        };

        tracing::debug!(
            cuisine = matched.recipe.as_ref().map(|r| r.cuisine.as_str()),
            score = matched.score,
            "best match computed over {} recipes",
            total
        );

        matched
    }

    async fn get_recipe(&self, input: GetRecipeInput) -> GetRecipeOutcome {
        let ingredients = input.ingredients.trim().to_lowercase();
        if ingredients.is_empty() {
            return GetRecipeOutcome::MissingIngredients;
        }

        let matched = self.find_best_match(ingredients.clone()).await;
        let Some(recipe) = matched.recipe.as_ref() else {
            return GetRecipeOutcome::NoMatch;
        };

        let llm_recipe = self
            .compose(&ingredients, recipe, ComposeStyle::Recipe)
            .await;

        GetRecipeOutcome::Suggestion(RecipeSuggestion {
            best_cuisine: recipe.cuisine.clone(),
            matched_ingredients: recipe.ingredients.clone(),
            similarity_score: matched.score,
            llm_recipe,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::{
        common::entities::app_errors::CoreError, generation::ports::MockLLMClient,
        recipe::entities::Recipe, recipe::ports::MockRecipeRepository,
    };

    fn repository(recipes: Vec<Recipe>) -> MockRecipeRepository {
        let recipes: Arc<[Recipe]> = Arc::from(recipes);
        let mut repository = MockRecipeRepository::new();
        repository.expect_all().returning(move || recipes.clone());
        repository
    }

    fn dataset() -> Vec<Recipe> {
        vec![
            Recipe::new("indian", vec!["rice".into(), "lentils".into()]),
            Recipe::new("greek", vec!["egg".into(), "onion".into(), "tomato".into()]),
        ]
    }

    #[tokio::test]
    async fn test_blank_ingredients_are_rejected() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().never();
        let service = Service::new(repository(dataset()), llm);

        let outcome = service
            .get_recipe(GetRecipeInput {
                ingredients: " \t ".to_string(),
            })
            .await;
        assert_eq!(outcome, GetRecipeOutcome::MissingIngredients);
    }

    #[tokio::test]
    async fn test_empty_dataset_yields_no_match() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().never();
        let service = Service::new(repository(vec![]), llm);

        let outcome = service
            .get_recipe(GetRecipeInput {
                ingredients: "egg".to_string(),
            })
            .await;
        assert_eq!(outcome, GetRecipeOutcome::NoMatch);
    }

    #[tokio::test]
    async fn test_suggestion_carries_match_and_model_text() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text()
            .withf(|prompt| prompt.contains("egg, onion, tomato") && prompt.contains("greek"))
            .times(1)
            .returning(|_| Box::pin(async { Ok("Make a shakshuka.".to_string()) }));
        let service = Service::new(repository(dataset()), llm);

        let outcome = service
            .get_recipe(GetRecipeInput {
                ingredients: "Egg, Onion, Tomato".to_string(),
            })
            .await;

        assert_eq!(
            outcome,
            GetRecipeOutcome::Suggestion(RecipeSuggestion {
                best_cuisine: "greek".to_string(),
                matched_ingredients: vec!["egg".into(), "onion".into(), "tomato".into()],
                similarity_score: 100,
                llm_recipe: "Make a shakshuka.".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_repeated_requests_are_stable() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().returning(|_| {
            Box::pin(async { Err(CoreError::ExternalServiceError("offline".into())) })
        });
        let service = Service::new(repository(dataset()), llm);
        let input = GetRecipeInput {
            ingredients: "rice, lentils, onion".to_string(),
        };

        let first = service.get_recipe(input.clone()).await;
        let second = service.get_recipe(input).await;
        assert_eq!(first, second);

        let GetRecipeOutcome::Suggestion(suggestion) = first else {
            panic!("expected a suggestion");
        };
        assert_eq!(suggestion.best_cuisine, "indian");
        assert_eq!(
            suggestion.llm_recipe,
            "(Local LLM unavailable) Suggested cuisine: indian."
        );
    }

    #[tokio::test]
    async fn test_large_scan_runs_off_the_runtime_thread() {
        let mut recipes: Vec<Recipe> = (0..40_000)
            .map(|i| {
                Recipe::new(
                    format!("generated-{i}"),
                    (0..11).map(|j| format!("ingredient{}", i * 11 + j)).collect(),
                )
            })
            .collect();
        recipes.push(Recipe::new(
            "persian",
            vec!["saffron".into(), "rice".into(), "barberries".into()],
        ));

        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_text().never();
        let service = Arc::new(Service::new(repository(recipes), llm));

        let scan = tokio::spawn({
            let service = Arc::clone(&service);
            async move {
                service
                    .find_best_match("saffron, rice, barberries".to_string())
                    .await
            }
        });
        tokio::task::yield_now().await;
        assert!(!scan.is_finished());

        let matched = scan.await.expect("scan task panicked");
        assert_eq!(
            matched.recipe.map(|r| r.cuisine),
            Some("persian".to_string())
        );
        assert_eq!(matched.score, 100);
    }
}

use std::{future::Future, sync::Arc};

use crate::domain::recipe::{
    entities::{MatchResult, Recipe},
    value_objects::{GetRecipeInput, GetRecipeOutcome},
};

/// Read-only access to the recipe dataset loaded at startup.
#[cfg_attr(test, mockall::automock)]
pub trait RecipeRepository: Send + Sync {
    fn all(&self) -> Arc<[Recipe]>;

    fn count(&self) -> usize;
}

#[cfg_attr(test, mockall::automock)]
pub trait RecipeService: Send + Sync {
    /// Scan the whole dataset for the closest recipe. The scan runs on a
    /// blocking thread.
    fn find_best_match(&self, ingredients: String) -> impl Future<Output = MatchResult> + Send;

    fn get_recipe(&self, input: GetRecipeInput)
    -> impl Future<Output = GetRecipeOutcome> + Send;
}

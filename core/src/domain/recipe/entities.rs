use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub cuisine: String,
    pub ingredients: Vec<String>,
}

impl Recipe {
    pub fn new(cuisine: impl Into<String>, ingredients: Vec<String>) -> Self {
        Self {
            cuisine: cuisine.into(),
            ingredients,
        }
    }

    /// Ingredients joined the way they are compared against user input.
    pub fn ingredients_text(&self) -> String {
        self.ingredients.join(", ")
    }
}

/// Outcome of scanning the dataset for the closest recipe.
///
/// `recipe` is `None` when the dataset is empty or nothing scored above zero,
/// in which case `score` is always `0`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchResult {
    pub recipe: Option<Recipe>,
    pub score: u8,
}

impl MatchResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_match(&self) -> bool {
        self.recipe.is_some()
    }
}

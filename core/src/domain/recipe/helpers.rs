use crate::domain::recipe::{
    entities::{MatchResult, Recipe},
    similarity::token_set_ratio,
};

/// Scan every recipe and keep the one whose joined ingredients score highest
/// against `user_text`.
///
/// Only a strictly greater score replaces the current best, so the first of
/// several equally scored recipes wins. Nothing is returned unless some
/// recipe scores above zero.
pub fn find_best_match(user_text: &str, recipes: &[Recipe]) -> MatchResult {
    let mut best_score = 0u8;
    let mut best_recipe: Option<&Recipe> = None;

    for recipe in recipes {
        let score = token_set_ratio(user_text, &recipe.ingredients_text());
        if score > best_score {
            best_score = score;
            best_recipe = Some(recipe);
        }
    }

    match best_recipe {
        Some(recipe) => MatchResult {
            recipe: Some(recipe.clone()),
            score: best_score,
        },
        None => MatchResult::none(),
    }
}

use crate::domain::chat::entities::Intent;

const COMMON_INGREDIENTS: [&str; 23] = [
    "egg", "onion", "tomato", "chicken", "beef", "rice", "potato", "carrot", "milk", "cheese",
    "bread", "butter", "oil", "salt", "pepper", "sugar", "flour", "garlic", "ginger", "lemon",
    "apple", "banana", "orange",
];

/// Ingredient words needed before a comma-free message counts as a list.
const MIN_INGREDIENT_WORDS: usize = 2;

/// Classify a chat message. Any comma means an ingredient list; otherwise at
/// least two whitespace tokens must be common ingredient words.
pub fn classify(query: &str) -> Intent {
    if query.contains(',') {
        return Intent::Ingredients;
    }

    let ingredient_words = query
        .to_lowercase()
        .split_whitespace()
        .filter(|word| COMMON_INGREDIENTS.contains(word))
        .count();

    if ingredient_words >= MIN_INGREDIENT_WORDS {
        Intent::Ingredients
    } else {
        Intent::Chat
    }
}

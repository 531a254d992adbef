use crate::domain::recipe::entities::Recipe;

pub const CHAT_UNAVAILABLE_MESSAGE: &str =
    "I'm sorry, I can't chat right now. Try asking for recipes with ingredients like 'egg, onion'!";

pub fn recipe_prompt(ingredients: &str, cuisine: &str) -> String {
    format!(
        "Suggest a recipe using these ingredients: {ingredients}.\n\
         You can take inspiration from {cuisine} cuisine.\n\
         Give a short cooking description."
    )
}

pub fn chat_prompt(query: &str) -> String {
    format!("Respond to this query: {query}")
}

pub fn recipe_fallback(recipe: &Recipe) -> String {
    format!(
        "(Local LLM unavailable) Suggested cuisine: {}.",
        recipe.cuisine
    )
}

pub fn chat_recipe_fallback(ingredients: &str, recipe: &Recipe) -> String {
    format!(
        "(Local LLM unavailable) Try a simple {} dish using your ingredients: {}. \
         Suggested ingredients from match: {}. \
         Basic idea: Cook the ingredients together with spices for a quick meal.",
        recipe.cuisine,
        ingredients,
        recipe.ingredients_text()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_prompt_embeds_inputs() {
        let prompt = recipe_prompt("egg, onion", "greek");
        assert!(prompt.contains("these ingredients: egg, onion."));
        assert!(prompt.contains("inspiration from greek cuisine"));
    }

    #[test]
    fn test_chat_recipe_fallback_lists_ingredients() {
        let recipe = Recipe::new("greek", vec!["egg".into(), "onion".into(), "tomato".into()]);
        let text = chat_recipe_fallback("egg, onion, tomato", &recipe);
        assert_eq!(
            text,
            "(Local LLM unavailable) Try a simple greek dish using your ingredients: egg, onion, tomato. \
             Suggested ingredients from match: egg, onion, tomato. \
             Basic idea: Cook the ingredients together with spices for a quick meal."
        );
    }

    #[test]
    fn test_recipe_fallback_names_cuisine() {
        let recipe = Recipe::new("korean", vec!["kimchi".into()]);
        assert_eq!(
            recipe_fallback(&recipe),
            "(Local LLM unavailable) Suggested cuisine: korean."
        );
    }
}

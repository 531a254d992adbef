use std::{path::Path, sync::Arc};

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::{entities::Recipe, ports::RecipeRepository},
};

/// Recipe dataset held in memory for the whole process lifetime.
#[derive(Debug, Clone)]
pub struct InMemoryRecipeRepository {
    recipes: Arc<[Recipe]>,
}

impl InMemoryRecipeRepository {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self {
            recipes: Arc::from(recipes),
        }
    }

    /// Read a JSON array of `{ "cuisine": ..., "ingredients": [...] }` records.
    /// Other fields are ignored.
    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            tracing::error!("Failed to read dataset {}: {}", path.display(), e);
            CoreError::DatasetIo(format!("{}: {}", path.display(), e))
        })?;

        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CoreError> {
        let recipes: Vec<Recipe> = serde_json::from_str(raw).map_err(|e| {
            tracing::error!("Failed to parse dataset: {}", e);
            CoreError::DatasetParse(e.to_string())
        })?;

        Ok(Self::new(recipes))
    }
}

impl RecipeRepository for InMemoryRecipeRepository {
    fn all(&self) -> Arc<[Recipe]> {
        Arc::clone(&self.recipes)
    }

    fn count(&self) -> usize {
        self.recipes.len()
    }
}

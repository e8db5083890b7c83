//! Saved recipe operations.

use super::{Loaded, NutritionStore, SAVED_RECIPES_KEY};
use crate::error::Result;
use crate::recipe::SavedRecipe;

impl NutritionStore {
    /// All saved recipes in insertion order, reporting how the list was
    /// obtained.
    pub async fn load_recipes(&self) -> Loaded<Vec<SavedRecipe>> {
        self.load_json(SAVED_RECIPES_KEY, Vec::new).await
    }

    /// All saved recipes in insertion order; empty if unreadable.
    pub async fn get_recipes(&self) -> Vec<SavedRecipe> {
        self.load_recipes().await.into_value()
    }

    /// Look up one recipe by id.
    pub async fn find_recipe(&self, id: &str) -> Option<SavedRecipe> {
        self.get_recipes().await.into_iter().find(|r| r.id == id)
    }

    /// Append `recipe`. Names need not be unique; identity is the id.
    ///
    /// Fails with the read error, writing nothing, if the stored list cannot
    /// be read.
    pub async fn save_recipe(&self, recipe: SavedRecipe) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut recipes = self.load_recipes().await.strict()?;
        let (id, name) = (recipe.id.clone(), recipe.name.clone());
        recipes.push(recipe);
        self.save_json(SAVED_RECIPES_KEY, &recipes).await?;

        tracing::debug!(%id, %name, total = recipes.len(), "recipe saved");
        Ok(())
    }

    /// Delete the recipe with `id`. Returns whether one was removed; an
    /// unknown id writes nothing. An unreadable list fails like
    /// [`save_recipe`](Self::save_recipe).
    pub async fn delete_recipe(&self, id: &str) -> Result<bool> {
        let _guard = self.write_lock.lock().await;
        let mut recipes = self.load_recipes().await.strict()?;
        let before = recipes.len();
        recipes.retain(|r| r.id != id);
        if recipes.len() == before {
            return Ok(false);
        }
        self.save_json(SAVED_RECIPES_KEY, &recipes).await?;

        tracing::debug!(id, remaining = recipes.len(), "recipe deleted");
        Ok(true)
    }
}

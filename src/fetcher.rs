use crate::catalog::MealCatalog;
use crate::error::DetailError;
use crate::model::RecipeDetail;
use log::{debug, warn};
use std::sync::Arc;

/// Loads the full recipe for a meal previously returned by a search
pub struct RecipeFetcher {
    catalog: Arc<dyn MealCatalog>,
}

impl RecipeFetcher {
    pub fn new(catalog: Arc<dyn MealCatalog>) -> Self {
        Self { catalog }
    }

    /// Fetch one recipe by id.
    ///
    /// The id is passed through as-is. If the catalog returns several
    /// records, the first one wins.
    pub async fn fetch_detail(&self, id: &str) -> Result<RecipeDetail, DetailError> {
        let recipes = self.catalog.lookup_meal(id).await.map_err(|source| {
            warn!("Failed to fetch recipe {}: {}", id, source);
            DetailError::FetchFailed {
                id: id.to_string(),
                source,
            }
        })?;

        if recipes.len() > 1 {
            debug!("Lookup for {} returned {} records, using the first", id, recipes.len());
        }

        recipes
            .into_iter()
            .next()
            .ok_or_else(|| DetailError::NotFound(id.to_string()))
    }
}

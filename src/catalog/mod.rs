mod http;

pub use http::HttpCatalog;

use crate::error::CatalogError;
use crate::model::{MealSummary, RecipeDetail};
use async_trait::async_trait;

/// A remote source of meals.
///
/// Implementations answer exactly one question per call and never retry.
#[async_trait]
pub trait MealCatalog: Send + Sync {
    /// Name used in log output (e.g. "themealdb")
    fn catalog_name(&self) -> &str;

    /// Find meals that contain the given ingredient.
    ///
    /// An unknown ingredient is not an error: it yields an empty list.
    async fn filter_by_ingredient(
        &self,
        ingredient: &str,
    ) -> Result<Vec<MealSummary>, CatalogError>;

    /// Look up full recipes by meal id. The catalog returns at most one
    /// record for a valid id and none for an unknown one.
    async fn lookup_meal(&self, id: &str) -> Result<Vec<RecipeDetail>, CatalogError>;
}

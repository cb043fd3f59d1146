pub mod builder;
pub mod catalog;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod model;
pub mod outcome;
pub mod presentation;
pub mod query;
pub mod resolver;
pub mod session;

pub use builder::{MealFinder, MealFinderBuilder};
pub use catalog::{HttpCatalog, MealCatalog};
pub use config::{CatalogConfig, FailurePolicy};
pub use error::{CatalogError, DetailError, MealFinderError, SearchError, TokenFailure};
pub use fetcher::RecipeFetcher;
pub use model::{IngredientLine, MealSummary, MealSummarySet, RecipeDetail};
pub use outcome::{DetailOutcome, SearchOutcome};
pub use presentation::{JsonPresenter, Presenter, TerminalPresenter};
pub use query::parse_ingredients;
pub use resolver::IngredientResolver;
pub use session::{Delivery, Session, UiEvent};

use std::error::Error;
use std::sync::Arc;

/// Search the default catalog for meals containing any of the comma
/// separated ingredients in `query`
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
/// let meals = mealfinder::search_meals("chicken, garlic").await?;
/// println!("{} meal(s)", meals.len());
/// # Ok(())
/// # }
/// ```
pub async fn search_meals(query: &str) -> Result<MealSummarySet, Box<dyn Error + Send + Sync>> {
    Ok(default_finder()?.search(query).await?)
}

/// Fetch a full recipe from the default catalog
pub async fn lookup_recipe(id: &str) -> Result<RecipeDetail, Box<dyn Error + Send + Sync>> {
    Ok(default_finder()?.recipe(id).await?)
}

fn default_finder() -> Result<MealFinder, reqwest::Error> {
    let catalog = HttpCatalog::new(&CatalogConfig::default())?;
    Ok(MealFinder::new(Arc::new(catalog), FailurePolicy::default()))
}

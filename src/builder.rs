use std::sync::Arc;
use std::time::Duration;

use crate::catalog::{HttpCatalog, MealCatalog};
use crate::config::{CatalogConfig, FailurePolicy};
use crate::error::{DetailError, MealFinderError, SearchError};
use crate::fetcher::RecipeFetcher;
use crate::model::{MealSummarySet, RecipeDetail};
use crate::presentation::Presenter;
use crate::resolver::IngredientResolver;
use crate::session::Session;

/// Ingredient search and recipe lookup against one catalog
pub struct MealFinder {
    catalog: Arc<dyn MealCatalog>,
    policy: FailurePolicy,
}

impl MealFinder {
    pub fn new(catalog: Arc<dyn MealCatalog>, policy: FailurePolicy) -> Self {
        Self { catalog, policy }
    }

    /// Start configuring a finder
    ///
    /// # Example
    /// ```
    /// use mealfinder::MealFinder;
    ///
    /// let finder = MealFinder::builder()
    ///     .base_url("http://localhost:8080/api/json/v1/1")
    ///     .build();
    /// assert!(finder.is_ok());
    /// ```
    pub fn builder() -> MealFinderBuilder {
        MealFinderBuilder::default()
    }

    pub fn resolver(&self) -> IngredientResolver {
        IngredientResolver::new(self.catalog.clone(), self.policy)
    }

    pub fn fetcher(&self) -> RecipeFetcher {
        RecipeFetcher::new(self.catalog.clone())
    }

    /// Search for meals containing any of the comma separated ingredients
    ///
    /// # Example
    /// ```no_run
    /// # use mealfinder::MealFinder;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let finder = MealFinder::builder().build()?;
    /// let meals = finder.search("chicken, garlic").await?;
    /// for meal in &meals {
    ///     println!("{} {}", meal.id, meal.name);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn search(&self, query: &str) -> Result<MealSummarySet, SearchError> {
        self.resolver().resolve_query(query).await
    }

    /// Load the full recipe for a meal id
    pub async fn recipe(&self, id: &str) -> Result<RecipeDetail, DetailError> {
        self.fetcher().fetch_detail(id).await
    }

    /// Create an event driven session that renders into `presenter`
    pub fn session(&self, presenter: Arc<dyn Presenter>) -> Session {
        Session::new(self.resolver(), self.fetcher(), presenter)
    }
}

/// Builder for [`MealFinder`]
#[derive(Default)]
pub struct MealFinderBuilder {
    config: Option<CatalogConfig>,
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    failure_policy: Option<FailurePolicy>,
    catalog: Option<Arc<dyn MealCatalog>>,
}

impl MealFinderBuilder {
    /// Start from a loaded configuration; explicit setters still win
    pub fn config(mut self, config: CatalogConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set a timeout for HTTP requests
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = Some(policy);
        self
    }

    /// Use a custom catalog instead of the HTTP one.
    ///
    /// Network settings (`base_url`, `timeout`, `user_agent`) cannot be
    /// combined with a custom catalog.
    pub fn catalog(mut self, catalog: Arc<dyn MealCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// # Errors
    /// Returns `MealFinderError` if:
    /// - a custom catalog is combined with network settings
    /// - the base URL is empty
    /// - the HTTP client cannot be created
    pub fn build(self) -> Result<MealFinder, MealFinderError> {
        let mut config = self.config.unwrap_or_default();
        if let Some(policy) = self.failure_policy {
            config.failure_policy = policy;
        }

        if let Some(catalog) = self.catalog {
            if self.base_url.is_some() || self.timeout.is_some() || self.user_agent.is_some() {
                return Err(MealFinderError::BuilderError(
                    "base_url, timeout and user_agent cannot be used with a custom catalog"
                        .to_string(),
                ));
            }
            return Ok(MealFinder::new(catalog, config.failure_policy));
        }

        let timeout = self.timeout.unwrap_or_else(|| config.timeout_duration());
        let base_url = self.base_url.unwrap_or(config.base_url);
        let user_agent = self.user_agent.unwrap_or(config.user_agent);

        if base_url.trim().is_empty() {
            return Err(MealFinderError::BuilderError(
                "Catalog base URL cannot be empty".to_string(),
            ));
        }

        let catalog = HttpCatalog::with_settings(&base_url, timeout, &user_agent)?;
        Ok(MealFinder::new(Arc::new(catalog), config.failure_policy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_with_defaults() {
        let finder = MealFinder::builder().build().unwrap();
        assert_eq!(finder.policy, FailurePolicy::Partial);
        assert_eq!(finder.catalog.catalog_name(), "themealdb");
    }

    #[test]
    fn test_setters_override_config() {
        let config = CatalogConfig {
            failure_policy: FailurePolicy::Partial,
            ..Default::default()
        };
        let finder = MealFinder::builder()
            .config(config)
            .failure_policy(FailurePolicy::AllOrNothing)
            .build()
            .unwrap();
        assert_eq!(finder.resolver().policy(), FailurePolicy::AllOrNothing);
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let result = MealFinder::builder().base_url("  ").build();
        assert!(matches!(result, Err(MealFinderError::BuilderError(_))));
    }

    #[test]
    fn test_custom_catalog_conflicts_with_network_settings() {
        let catalog: Arc<dyn MealCatalog> = Arc::new(HttpCatalog::with_base_url("http://x"));
        let result = MealFinder::builder()
            .catalog(catalog)
            .timeout(Duration::from_secs(3))
            .build();
        assert!(matches!(result, Err(MealFinderError::BuilderError(_))));
    }
}

use crate::catalog::MealCatalog;
use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::model::{MealSummary, MealsEnvelope, RawRecipe, RecipeDetail};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

const FILTER_ENDPOINT: &str = "filter.php";
const LOOKUP_ENDPOINT: &str = "lookup.php";

/// [`MealCatalog`] backed by a TheMealDB-compatible HTTP API
pub struct HttpCatalog {
    client: Client,
    base_url: String,
}

impl HttpCatalog {
    /// Create a catalog client from configuration
    pub fn new(config: &CatalogConfig) -> Result<Self, reqwest::Error> {
        Self::with_settings(
            &config.base_url,
            config.timeout_duration(),
            &config.user_agent,
        )
    }

    pub fn with_settings(
        base_url: &str,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(HttpCatalog {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        HttpCatalog {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_meals<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        key: &str,
    ) -> Result<Vec<T>, CatalogError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        let response = self.client.get(&url).query(&[("i", key)]).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            });
        }

        let body = response.bytes().await?;
        let envelope: MealsEnvelope<T> = serde_json::from_slice(&body)?;
        let meals = envelope.into_meals();
        debug!("{} {} -> {} meal(s)", endpoint, key, meals.len());
        Ok(meals)
    }
}

#[async_trait]
impl MealCatalog for HttpCatalog {
    fn catalog_name(&self) -> &str {
        "themealdb"
    }

    async fn filter_by_ingredient(
        &self,
        ingredient: &str,
    ) -> Result<Vec<MealSummary>, CatalogError> {
        self.get_meals(FILTER_ENDPOINT, ingredient).await
    }

    async fn lookup_meal(&self, id: &str) -> Result<Vec<RecipeDetail>, CatalogError> {
        let records: Vec<RawRecipe> = self.get_meals(LOOKUP_ENDPOINT, id).await?;
        Ok(records.into_iter().map(RecipeDetail::from).collect())
    }
}

use crate::catalog::MealCatalog;
use crate::config::FailurePolicy;
use crate::error::{SearchError, TokenFailure};
use crate::model::MealSummarySet;
use crate::query::{clean_token, parse_ingredients};
use futures_util::stream::{FuturesUnordered, StreamExt};
use log::{debug, info, warn};
use std::sync::Arc;

/// Turns a list of ingredients into one deduplicated set of meals.
///
/// One catalog lookup is issued per ingredient and all of them run
/// concurrently. Results are merged in the order the lookups complete, so
/// the position of a meal in the output is not stable across runs; its
/// presence is.
pub struct IngredientResolver {
    catalog: Arc<dyn MealCatalog>,
    policy: FailurePolicy,
}

impl IngredientResolver {
    pub fn new(catalog: Arc<dyn MealCatalog>, policy: FailurePolicy) -> Self {
        Self { catalog, policy }
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Parse a raw comma separated query and resolve it
    pub async fn resolve_query(&self, raw: &str) -> Result<MealSummarySet, SearchError> {
        self.resolve(&parse_ingredients(raw)).await
    }

    /// Resolve already tokenized ingredients. Tokens are trimmed and blank
    /// ones are ignored.
    ///
    /// # Errors
    /// - `SearchError::EmptyQuery` if no token is left; no request is made
    /// - `SearchError::ResolutionFailed` if every lookup failed, or if any
    ///   lookup failed under `FailurePolicy::AllOrNothing`
    ///
    /// An `Ok` with an empty set means every lookup succeeded and none of
    /// them matched anything.
    pub async fn resolve<S>(&self, tokens: &[S]) -> Result<MealSummarySet, SearchError>
    where
        S: AsRef<str> + Sync,
    {
        let tokens: Vec<&str> = tokens
            .iter()
            .filter_map(|token| clean_token(token.as_ref()))
            .collect();
        if tokens.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        let catalog = &self.catalog;
        let mut lookups: FuturesUnordered<_> = tokens
            .iter()
            .map(|&token| async move { (token, catalog.filter_by_ingredient(token).await) })
            .collect();

        let mut merged = MealSummarySet::new();
        let mut failures = Vec::new();

        // Wait for every lookup to settle, merging in completion order
        while let Some((token, result)) = lookups.next().await {
            match result {
                Ok(meals) => {
                    debug!("Ingredient '{}' matched {} meal(s)", token, meals.len());
                    merged.extend(meals);
                }
                Err(error) => {
                    warn!(
                        "{} lookup for ingredient '{}' failed: {}",
                        catalog.catalog_name(),
                        token,
                        error
                    );
                    failures.push(TokenFailure {
                        token: token.to_string(),
                        error,
                    });
                }
            }
        }

        let all_failed = failures.len() == tokens.len();
        let fail = match self.policy {
            FailurePolicy::Partial => all_failed,
            FailurePolicy::AllOrNothing => !failures.is_empty(),
        };
        if fail {
            return Err(SearchError::ResolutionFailed { failures });
        }

        info!(
            "Resolved {} ingredient(s) to {} meal(s) ({} lookup(s) failed)",
            tokens.len(),
            merged.len(),
            failures.len()
        );
        Ok(merged)
    }
}

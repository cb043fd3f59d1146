use crate::error::{DetailError, SearchError};
use crate::model::{MealSummarySet, RecipeDetail};
use serde::Serialize;

/// What the meal list should show after a search
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchOutcome {
    Meals { meals: MealSummarySet },
    NoResults,
    EmptyQuery,
    Failed { message: String },
}

impl SearchOutcome {
    pub fn from_result(result: Result<MealSummarySet, SearchError>) -> Self {
        match result {
            Ok(meals) if meals.is_empty() => SearchOutcome::NoResults,
            Ok(meals) => SearchOutcome::Meals { meals },
            Err(SearchError::EmptyQuery) => SearchOutcome::EmptyQuery,
            Err(e @ SearchError::ResolutionFailed { .. }) => SearchOutcome::Failed {
                message: e.to_string(),
            },
        }
    }

    pub fn meals(&self) -> Option<&MealSummarySet> {
        match self {
            SearchOutcome::Meals { meals } => Some(meals),
            _ => None,
        }
    }
}

/// What the detail overlay should show after a recipe request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DetailOutcome {
    Found { recipe: RecipeDetail },
    NotFound { id: String },
    FetchFailed { id: String, message: String },
}

impl DetailOutcome {
    pub fn from_result(result: Result<RecipeDetail, DetailError>) -> Self {
        match result {
            Ok(recipe) => DetailOutcome::Found { recipe },
            Err(DetailError::NotFound(id)) => DetailOutcome::NotFound { id },
            Err(DetailError::FetchFailed { id, source }) => DetailOutcome::FetchFailed {
                id,
                message: source.to_string(),
            },
        }
    }
}

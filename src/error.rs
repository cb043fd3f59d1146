use thiserror::Error;

/// Errors raised by a single call to the remote meal catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Transport-level failure (connection, timeout, TLS, ...)
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The catalog answered with a non-success status code
    #[error("Catalog returned HTTP {status} for {url}")]
    Status { status: u16, url: String },

    /// The response body was not the expected JSON document
    #[error("Malformed catalog response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A lookup for one ingredient token that did not produce results
#[derive(Debug)]
pub struct TokenFailure {
    pub token: String,
    pub error: CatalogError,
}

/// Errors produced by an ingredient search
#[derive(Error, Debug)]
pub enum SearchError {
    /// The query contained no usable ingredient once trimmed
    #[error("Please enter at least one ingredient")]
    EmptyQuery,

    /// Lookups failed badly enough that no result set could be produced
    #[error("Ingredient search failed ({} lookup(s) failed)", .failures.len())]
    ResolutionFailed { failures: Vec<TokenFailure> },
}

/// Errors produced when loading a single recipe
#[derive(Error, Debug)]
pub enum DetailError {
    #[error("No recipe found for id {0}")]
    NotFound(String),

    #[error("Failed to fetch recipe {id}: {source}")]
    FetchFailed {
        id: String,
        #[source]
        source: CatalogError,
    },
}

/// Errors raised while assembling a [`crate::MealFinder`]
#[derive(Error, Debug)]
pub enum MealFinderError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// HTTP client could not be created
    #[error("Failed to create HTTP client: {0}")]
    ClientError(#[from] reqwest::Error),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    BuilderError(String),
}

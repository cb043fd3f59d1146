use config::{Config, ConfigError, Environment, File, FileFormat, Map};
use serde::Deserialize;
use std::time::Duration;

/// How an ingredient search treats lookups that fail
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Failed ingredients contribute nothing; the search only fails when
    /// every lookup failed
    #[default]
    Partial,
    /// Any failed lookup fails the whole search
    AllOrNothing,
}

impl std::str::FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "partial" => Ok(FailurePolicy::Partial),
            "all_or_nothing" | "all-or-nothing" => Ok(FailurePolicy::AllOrNothing),
            other => Err(format!(
                "Unknown failure policy '{}' (expected 'partial' or 'all_or_nothing')",
                other
            )),
        }
    }
}

/// Settings for talking to the remote meal catalog
#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Base URL of the catalog API, without a trailing endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Behavior when some ingredient lookups fail
    #[serde(default)]
    pub failure_policy: FailurePolicy,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
            failure_policy: FailurePolicy::default(),
        }
    }
}

// Default value functions
fn default_base_url() -> String {
    "https://www.themealdb.com/api/json/v1/1".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("mealfinder/{}", env!("CARGO_PKG_VERSION"))
}

impl CatalogConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with MEALFINDER__ prefix
    /// 2. mealfinder.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: MEALFINDER__BASE_URL
    pub fn load() -> Result<Self, ConfigError> {
        load_config()
    }

    /// Parse configuration from a TOML document, ignoring the environment
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Load configuration from file and environment variables
///
/// See [`CatalogConfig::load`] for the precedence rules.
pub fn load_config() -> Result<CatalogConfig, ConfigError> {
    load_config_from(None)
}

/// Like [`load_config`], but reads `MEALFINDER__*` variables from `vars`
/// instead of the process environment when given.
fn load_config_from(vars: Option<Map<String, String>>) -> Result<CatalogConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("mealfinder").required(false))
        .add_source(
            Environment::with_prefix("MEALFINDER")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .source(vars),
        )
        .build()?;

    settings.try_deserialize()
}

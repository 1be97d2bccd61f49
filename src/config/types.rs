// Configuration type definitions

use serde::Deserialize;

/// Search service configuration section
///
/// `url` is a template with `%PROPERTY%` and `%QUERY%` placeholders that are
/// substituted (percent-encoded) per request. `properties` is the allow-list
/// of external-id properties suggestions are activated for.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_search_url")]
    pub url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_properties")]
    pub properties: Vec<String>,
}

fn default_search_url() -> String {
    "https://tools.wmflabs.org/externalitemsuggester/search?property=%PROPERTY%&value=%QUERY%"
        .to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_properties() -> Vec<String> {
    // VIAF, Bibsys, GeoNames
    ["P214", "P1015", "P1566"]
        .iter()
        .map(|p| p.to_string())
        .collect()
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            url: default_search_url(),
            timeout_ms: default_timeout_ms(),
            properties: default_properties(),
        }
    }
}

/// Metadata service configuration section
///
/// The metadata API answers fetch-entity-by-id requests used to resolve a
/// property's formatter URL statement.
#[derive(Debug, Clone, Deserialize)]
pub struct MetadataConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    "https://www.wikidata.org/w/api.php".to_string()
}

impl Default for MetadataConfig {
    fn default() -> Self {
        MetadataConfig {
            api_url: default_api_url(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub metadata: MetadataConfig,
}

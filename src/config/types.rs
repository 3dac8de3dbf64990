use serde::Deserialize;

/// Listing page mined when no config file overrides it
pub const DEFAULT_URL: &str = "https://editorial.rottentomatoes.com/guide/popular-movies/";

/// Browser-like user agent; the site filters obvious bot strings
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/99.0 Safari/537.36";

/// Main configuration structure for reelrank
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub viewer: ViewerConfig,
}

/// Where and how the listing page is fetched
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    /// URL of the listing page to mine
    #[serde(default = "default_url")]
    pub url: String,

    /// User-Agent header sent with the request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

/// Paths the mined records are persisted to
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Path to the tabular (CSV) file
    #[serde(rename = "csv-path", default = "default_csv_path")]
    pub csv_path: String,

    /// Path to the structured (JSON) file
    #[serde(rename = "json-path", default = "default_json_path")]
    pub json_path: String,
}

/// Viewer behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewerConfig {
    /// Number of records shown per page
    #[serde(rename = "page-size", default = "default_page_size")]
    pub page_size: usize,
}

fn default_url() -> String {
    DEFAULT_URL.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_csv_path() -> String {
    "popular_movies.csv".to_string()
}

fn default_json_path() -> String {
    "popular_movies.json".to_string()
}

fn default_page_size() -> usize {
    10
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
            json_path: default_json_path(),
        }
    }
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

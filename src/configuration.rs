use std::{collections::HashMap, time::Duration};

use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::{domain::search_query::DEFAULT_TARGET_COUNT, services::CollectorOptions};

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

#[derive(Deserialize, Clone, Debug, Default)]
pub struct Settings {
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub http: HttpSettings,
    #[serde(default)]
    pub output: OutputSettings,
}

#[derive(Deserialize, Clone, Debug)]
pub struct SearchSettings {
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
    #[serde(
        default = "default_target_count",
        deserialize_with = "deserialize_number_from_string"
    )]
    pub target_count: usize,
    #[serde(default = "default_unwanted_domains")]
    pub unwanted_domains: Vec<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(
        default = "default_pagination_delay_secs",
        deserialize_with = "deserialize_number_from_string"
    )]
    pub pagination_delay_secs: u64,
    // None keeps paginating until the target is met or a fetch fails.
    // config parses string values such as env vars into the integer itself.
    #[serde(default)]
    pub max_rounds: Option<u32>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct HttpSettings {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(
        default = "default_timeout_secs",
        deserialize_with = "deserialize_number_from_string"
    )]
    pub timeout_secs: u64,
}

#[derive(Deserialize, Clone, Debug)]
pub struct OutputSettings {
    #[serde(default = "default_output_path")]
    pub path: String,
}

impl SearchSettings {
    pub fn collector_options(&self) -> CollectorOptions {
        CollectorOptions {
            base_url: self.base_url.clone(),
            page_delay: Duration::from_secs(self.pagination_delay_secs),
            max_rounds: self.max_rounds,
        }
    }
}

impl HttpSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for SearchSettings {
    fn default() -> Self {
        SearchSettings {
            keywords: default_keywords(),
            target_count: default_target_count(),
            unwanted_domains: default_unwanted_domains(),
            base_url: default_base_url(),
            pagination_delay_secs: default_pagination_delay_secs(),
            max_rounds: None,
        }
    }
}

impl Default for HttpSettings {
    fn default() -> Self {
        HttpSettings {
            user_agent: default_user_agent(),
            headers: HashMap::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        OutputSettings {
            path: default_output_path(),
        }
    }
}

fn default_keywords() -> Vec<String> {
    vec!["Sublimated Ribbons".to_string(), "Running Medals".to_string()]
}

fn default_target_count() -> usize {
    DEFAULT_TARGET_COUNT
}

fn default_unwanted_domains() -> Vec<String> {
    [
        "amazon.com",
        "ebay.com",
        "etsy.com",
        "alibaba.com",
        "madeinchina.com",
        "marketplace",
    ]
    .iter()
    .map(|d| d.to_string())
    .collect()
}

fn default_base_url() -> String {
    "https://www.google.com/search".to_string()
}

fn default_pagination_delay_secs() -> u64 {
    2
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_output_path() -> String {
    "web_scraping_results_full_text.csv".to_string()
}

/// Reads `configuration/base.yaml` (optional) and then `APP_` prefixed
/// environment variables, e.g. `APP_SEARCH__TARGET_COUNT=20`.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");

    let settings = config::Config::builder()
        .add_source(
            config::File::from(configuration_directory.join("base.yaml")).required(false),
        )
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, time::Duration};

    use super::Settings;

    #[test]
    fn empty_source_falls_back_to_defaults() {
        let settings = config::Config::builder()
            .build()
            .unwrap()
            .try_deserialize::<Settings>()
            .unwrap();

        assert_eq!(settings.search.target_count, 10);
        assert_eq!(settings.search.keywords.len(), 2);
        assert!(settings
            .search
            .unwanted_domains
            .contains(&"marketplace".to_string()));
        assert_eq!(settings.search.max_rounds, None);
        assert_eq!(settings.http.timeout(), Duration::from_secs(10));
        assert!(settings.http.user_agent.starts_with("Mozilla/5.0"));
        assert_eq!(settings.output.path, "web_scraping_results_full_text.csv");
    }

    #[test]
    fn numbers_are_accepted_as_strings() {
        let settings = config::Config::builder()
            .set_override("search.target_count", "25")
            .unwrap()
            .set_override("search.max_rounds", "4")
            .unwrap()
            .set_override("search.pagination_delay_secs", "0")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize::<Settings>()
            .unwrap();

        assert_eq!(settings.search.target_count, 25);
        assert_eq!(settings.search.max_rounds, Some(4));

        let options = settings.search.collector_options();
        assert_eq!(options.page_delay, Duration::ZERO);
        assert_eq!(options.max_rounds, Some(4));
    }

    #[test]
    fn round_cap_from_environment_variable() {
        let source = config::Environment::with_prefix("APP")
            .prefix_separator("_")
            .separator("__")
            .source(Some(HashMap::from([
                ("APP_SEARCH__MAX_ROUNDS".to_string(), "4".to_string()),
                ("APP_SEARCH__TARGET_COUNT".to_string(), "20".to_string()),
            ])));
        let settings = config::Config::builder()
            .add_source(source)
            .build()
            .unwrap()
            .try_deserialize::<Settings>()
            .unwrap();

        assert_eq!(settings.search.max_rounds, Some(4));
        assert_eq!(settings.search.target_count, 20);
    }
}

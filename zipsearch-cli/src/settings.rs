//! Settings read from the environment.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use simplelog::LevelFilter;
use zipwidgets::{AutocompleteConfig, ClientConfig};

const ENDPOINT_VAR: &str = "ZIPSEARCH_ENDPOINT";
const TIMEOUT_VAR: &str = "ZIPSEARCH_TIMEOUT_MS";
const MIN_QUERY_VAR: &str = "ZIPSEARCH_MIN_QUERY";
const LOG_VAR: &str = "ZIPSEARCH_LOG";
const LOG_LEVEL_VAR: &str = "ZIPSEARCH_LOG_LEVEL";

const DEFAULT_LOG_FILE: &str = "zipsearch.log";

#[derive(Debug, Clone)]
pub struct Settings {
    /// `None` runs against the built-in zip code list.
    pub client: Option<ClientConfig>,
    pub autocomplete: AutocompleteConfig,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build settings from any key lookup. Unparseable values fall back to
    /// their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let timeout = lookup(TIMEOUT_VAR)
            .and_then(|v| v.parse().ok())
            .map(Duration::from_millis);

        let client = lookup(ENDPOINT_VAR)
            .filter(|url| !url.trim().is_empty())
            .map(|url| {
                let config = ClientConfig::new(url.trim());
                match timeout {
                    Some(timeout) => config.with_timeout(timeout),
                    None => config,
                }
            });

        let mut autocomplete = AutocompleteConfig::default();
        if let Some(len) = lookup(MIN_QUERY_VAR).and_then(|v| v.parse().ok()) {
            autocomplete = autocomplete.with_min_query_len(len);
        }

        Self {
            client,
            autocomplete,
            log_file: lookup(LOG_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
            log_level: lookup(LOG_LEVEL_VAR)
                .and_then(|v| v.parse().ok())
                .unwrap_or(LevelFilter::Debug),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn settings(vars: &[(&str, &str)]) -> Settings {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let s = settings(&[]);
        assert!(s.client.is_none());
        assert_eq!(s.autocomplete.min_query_len, 1);
        assert_eq!(s.log_file, PathBuf::from("zipsearch.log"));
        assert_eq!(s.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_endpoint_and_timeout() {
        let s = settings(&[
            ("ZIPSEARCH_ENDPOINT", "http://localhost:5000"),
            ("ZIPSEARCH_TIMEOUT_MS", "250"),
        ]);
        let client = s.client.unwrap();
        assert_eq!(client.base_url, "http://localhost:5000");
        assert_eq!(client.timeout, Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_bad_values_fall_back() {
        let s = settings(&[
            ("ZIPSEARCH_TIMEOUT_MS", "soon"),
            ("ZIPSEARCH_MIN_QUERY", "-1"),
            ("ZIPSEARCH_LOG_LEVEL", "loud"),
        ]);
        assert_eq!(s.autocomplete.min_query_len, 1);
        assert_eq!(s.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_log_level() {
        assert_eq!(
            settings(&[("ZIPSEARCH_LOG_LEVEL", "warn")]).log_level,
            LevelFilter::Warn
        );
    }
}

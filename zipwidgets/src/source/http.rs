//! HTTP suggestion endpoint client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use super::SuggestionSource;
use crate::config::ClientConfig;
use crate::error::SourceError;

/// Client for `GET /autocomplete_zipcode?query=<text>`.
///
/// The query is percent-encoded. The response body must be a JSON array;
/// entries may be strings or numbers (numeric zip codes are rendered with
/// their decimal representation).
///
/// Cheap to clone; clones share the underlying connection pool.
///
/// # Example
///
/// ```ignore
/// let source = HttpSuggestionSource::new(ClientConfig::new("http://localhost:5000"))?;
/// let zips = source.suggest("100").await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpSuggestionSource {
    endpoint: Url,
    query_param: String,
    timeout: Option<Duration>,
    http_client: Client,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ZipEntry {
    Text(String),
    Number(serde_json::Number),
}

impl From<ZipEntry> for String {
    fn from(entry: ZipEntry) -> Self {
        match entry {
            ZipEntry::Text(text) => text,
            ZipEntry::Number(number) => number.to_string(),
        }
    }
}

impl HttpSuggestionSource {
    pub fn new(config: ClientConfig) -> Result<Self, SourceError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        let http_client = builder.build()?;
        Self::with_client(config, http_client)
    }

    /// Use a preconfigured reqwest client. `config.connect_timeout` is ignored.
    pub fn with_client(config: ClientConfig, http_client: Client) -> Result<Self, SourceError> {
        let base = Url::parse(&config.base_url)
            .map_err(|e| SourceError::InvalidUrl(format!("{}: {e}", config.base_url)))?;
        let endpoint = base
            .join(&config.endpoint_path)
            .map_err(|e| SourceError::InvalidUrl(format!("{}: {e}", config.endpoint_path)))?;

        Ok(Self {
            endpoint,
            query_param: config.query_param,
            timeout: config.timeout,
            http_client,
        })
    }

    /// The full request URL for a query.
    pub fn request_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.set_query(Some(&format!(
            "{}={}",
            self.query_param,
            urlencoding::encode(query)
        )));
        url
    }

    fn map_send_error(&self, error: reqwest::Error) -> SourceError {
        match self.timeout {
            Some(timeout) if error.is_timeout() => SourceError::Timeout(timeout),
            _ => SourceError::Network(error),
        }
    }
}

#[async_trait]
impl SuggestionSource for HttpSuggestionSource {
    async fn suggest(&self, query: &str) -> Result<Vec<String>, SourceError> {
        let url = self.request_url(query);
        log::debug!("HttpSuggestionSource::suggest url={}", url);

        let mut request = self.http_client.get(url);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| self.map_send_error(e))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| self.map_send_error(e))?;

        if !status.is_success() {
            return Err(SourceError::http(status.as_u16(), body));
        }

        let entries: Vec<ZipEntry> = serde_json::from_str(&body)
            .map_err(|e| SourceError::parse_with_body(e.to_string(), body.clone()))?;
        Ok(entries.into_iter().map(String::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> HttpSuggestionSource {
        HttpSuggestionSource::new(ClientConfig::new("http://localhost:5000")).unwrap()
    }

    #[test]
    fn test_request_url() {
        assert_eq!(
            source().request_url("900").as_str(),
            "http://localhost:5000/autocomplete_zipcode?query=900"
        );
    }

    #[test]
    fn test_request_url_encodes_query() {
        assert_eq!(
            source().request_url("10 0&x=1").as_str(),
            "http://localhost:5000/autocomplete_zipcode?query=10%200%26x%3D1"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let err = HttpSuggestionSource::new(ClientConfig::new("not a url")).unwrap_err();
        assert!(matches!(err, SourceError::InvalidUrl(_)));
    }

    #[test]
    fn test_numeric_entries() {
        let entries: Vec<ZipEntry> = serde_json::from_str(r#"["10001", 10002]"#).unwrap();
        let zips: Vec<String> = entries.into_iter().map(String::from).collect();
        assert_eq!(zips, vec!["10001", "10002"]);
    }
}

//! In-memory prefix source

use async_trait::async_trait;

use super::SuggestionSource;
use crate::error::SourceError;

/// A source that answers from a fixed list of zip codes.
///
/// Matches are the entries starting with the query, in list order.
///
/// # Example
///
/// ```ignore
/// let source = StaticSuggestionSource::new(["10001", "10002", "11201"]);
/// assert_eq!(source.suggest("100").await?, vec!["10001", "10002"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StaticSuggestionSource {
    zip_codes: Vec<String>,
    limit: Option<usize>,
}

impl StaticSuggestionSource {
    pub fn new(zip_codes: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            zip_codes: zip_codes.into_iter().map(Into::into).collect(),
            limit: None,
        }
    }

    /// Return at most `limit` matches per query.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn matches(&self, query: &str) -> Vec<String> {
        self.zip_codes
            .iter()
            .filter(|zip| zip.starts_with(query))
            .take(self.limit.unwrap_or(usize::MAX))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl SuggestionSource for StaticSuggestionSource {
    async fn suggest(&self, query: &str) -> Result<Vec<String>, SourceError> {
        Ok(self.matches(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_matches_keep_order() {
        let source = StaticSuggestionSource::new(["10002", "11201", "10001"]);
        assert_eq!(source.matches("100"), vec!["10002", "10001"]);
        assert!(source.matches("9").is_empty());
    }

    #[test]
    fn test_query_is_not_trimmed() {
        let source = StaticSuggestionSource::new(["10001", "10002"]);
        assert!(source.matches("   ").is_empty());
        assert!(source.matches(" 100").is_empty());
    }

    #[test]
    fn test_limit() {
        let source = StaticSuggestionSource::new(["10001", "10002", "10003"]).with_limit(2);
        assert_eq!(source.matches("1"), vec!["10001", "10002"]);
    }
}

//! Suggestion sources

mod fixed;
mod http;

pub use fixed::StaticSuggestionSource;
pub use http::HttpSuggestionSource;

use async_trait::async_trait;

use crate::error::SourceError;

/// Trait for anything that can complete a partial zip code.
///
/// Implementations return candidates in the order they should be shown.
/// The widget applies no ranking of its own.
#[async_trait]
pub trait SuggestionSource: Send + Sync {
    /// Returns the suggestions for `query`. `query` is the raw input text.
    async fn suggest(&self, query: &str) -> Result<Vec<String>, SourceError>;
}

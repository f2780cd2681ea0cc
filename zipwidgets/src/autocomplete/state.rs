//! Autocomplete widget state.

use crate::config::AutocompleteConfig;
use crate::error::{SourceError, WidgetError};

/// A suggestion lookup the owner must perform.
///
/// The generation identifies the request; pass it back to
/// [`Autocomplete::apply`] together with the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRequest {
    pub generation: u64,
    pub query: String,
}

/// What happened to a completed lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The list was replaced with this many suggestions.
    Applied(usize),
    /// A newer request was issued (or the query was cleared) since this one.
    Stale,
    /// The lookup failed; the previous list is kept and an error is shown.
    Failed,
}

/// Result of submitting the search form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Proceed with a full navigation to `url`.
    Navigate { url: String },
    /// Submission cancelled; show `message` to the user.
    Blocked { message: String },
}

impl SubmitOutcome {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Self::Blocked { .. })
    }
}

/// State machine behind the zip-code search input.
///
/// - Idle: query empty or shorter than `min_query_len`; no suggestions, no
///   request.
/// - Querying: every input event issues one [`SuggestionRequest`].
/// - Selected: a suggestion was picked; it becomes the query.
/// - Dismissed: a click landed outside the widget; suggestions cleared.
///
/// Every request bumps a generation counter. Only the response to the latest
/// request is applied; idle input, selection and dismissal also bump it so an
/// in-flight response can never reopen the list.
#[derive(Debug, Clone, Default)]
pub struct Autocomplete {
    config: AutocompleteConfig,
    query: String,
    suggestions: Vec<String>,
    generation: u64,
    error: Option<String>,
}

impl Autocomplete {
    pub fn new(config: AutocompleteConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Create an autocomplete whose input already holds `query`.
    /// No request is issued for it.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn config(&self) -> &AutocompleteConfig {
        &self.config
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    /// The dropdown is open while there is anything to pick.
    pub fn is_open(&self) -> bool {
        !self.suggestions.is_empty()
    }

    /// Generation of the most recently issued request.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Transient error from the last failed lookup, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------

    /// The input's value changed.
    ///
    /// Returns the request to perform, or `None` when the query is too short,
    /// in which case the suggestions are cleared immediately.
    pub fn on_input(&mut self, value: impl Into<String>) -> Option<SuggestionRequest> {
        self.query = value.into();
        self.error = None;
        self.generation += 1;

        if self.query.is_empty() || self.query.chars().count() < self.config.min_query_len {
            log::debug!(
                "Autocomplete::on_input idle generation={} query={:?}",
                self.generation,
                self.query
            );
            self.suggestions.clear();
            return None;
        }

        log::debug!(
            "Autocomplete::on_input request generation={} query={:?}",
            self.generation,
            self.query
        );
        Some(SuggestionRequest {
            generation: self.generation,
            query: self.query.clone(),
        })
    }

    /// Apply the result of a lookup.
    pub fn apply(
        &mut self,
        generation: u64,
        result: Result<Vec<String>, SourceError>,
    ) -> ApplyOutcome {
        if generation != self.generation {
            log::debug!(
                "Autocomplete::apply stale generation={} latest={}",
                generation,
                self.generation
            );
            return ApplyOutcome::Stale;
        }

        match result {
            Ok(mut suggestions) => {
                if let Some(max) = self.config.max_suggestions {
                    suggestions.truncate(max);
                }
                log::debug!(
                    "Autocomplete::apply generation={} count={}",
                    generation,
                    suggestions.len()
                );
                let count = suggestions.len();
                self.suggestions = suggestions;
                self.error = None;
                ApplyOutcome::Applied(count)
            }
            Err(e) => {
                log::warn!(
                    "suggestion lookup failed for {:?} (generation {}): {}",
                    self.query,
                    generation,
                    e
                );
                self.error = Some(e.user_message().to_string());
                ApplyOutcome::Failed
            }
        }
    }

    /// Pick the suggestion at `index`. Returns the chosen zip code.
    pub fn select(&mut self, index: usize) -> Result<String, WidgetError> {
        let chosen = self
            .suggestions
            .get(index)
            .cloned()
            .ok_or(WidgetError::NoSuggestion {
                index,
                len: self.suggestions.len(),
            })?;

        log::debug!("Autocomplete::select index={} value={}", index, chosen);
        self.query = chosen.clone();
        self.close();
        Ok(chosen)
    }

    /// A click landed outside the input and the list. The query is kept.
    pub fn dismiss(&mut self) {
        if self.is_open() || self.error.is_some() {
            log::debug!("Autocomplete::dismiss query={:?}", self.query);
        }
        self.close();
    }

    fn close(&mut self) {
        self.suggestions.clear();
        self.error = None;
        self.generation += 1;
    }

    /// The search form was submitted.
    pub fn submit(&self) -> SubmitOutcome {
        if self.query.is_empty() {
            log::debug!("Autocomplete::submit blocked: empty query");
            return SubmitOutcome::Blocked {
                message: self.config.empty_query_message.clone(),
            };
        }

        let url = format!(
            "{}?{}={}",
            self.config.search_action,
            self.config.search_param,
            urlencoding::encode(&self.query)
        );
        log::debug!("Autocomplete::submit url={}", url);
        SubmitOutcome::Navigate { url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_increases_on_every_input() {
        let mut ac = Autocomplete::default();
        let first = ac.on_input("9").unwrap();
        let second = ac.on_input("90").unwrap();
        assert!(second.generation > first.generation);
        assert_eq!(ac.generation(), second.generation);
    }

    #[test]
    fn test_min_query_len() {
        let mut ac = Autocomplete::new(AutocompleteConfig::default().with_min_query_len(3));
        assert!(ac.on_input("90").is_none());
        assert!(ac.on_input("900").is_some());
    }

    #[test]
    fn test_empty_query_idle_with_zero_min_len() {
        let mut ac = Autocomplete::new(AutocompleteConfig {
            min_query_len: 0,
            ..Default::default()
        });
        assert!(ac.on_input("").is_none());
        assert!(ac.on_input("9").is_some());
    }

    #[test]
    fn test_max_suggestions_truncates() {
        let mut ac = Autocomplete::new(AutocompleteConfig::default().with_max_suggestions(1));
        let req = ac.on_input("9").unwrap();
        let outcome = ac.apply(req.generation, Ok(vec!["90001".into(), "90002".into()]));
        assert_eq!(outcome, ApplyOutcome::Applied(1));
        assert_eq!(ac.suggestions(), ["90001"]);
    }

    #[test]
    fn test_select_out_of_range() {
        let mut ac = Autocomplete::default();
        assert_eq!(
            ac.select(0),
            Err(WidgetError::NoSuggestion { index: 0, len: 0 })
        );
    }
}

//! Widget and client configuration

use std::time::Duration;

/// Default message shown when the search form is submitted empty.
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a zip code to search.";

/// Behaviour of the autocomplete widget.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use zipwidgets::AutocompleteConfig;
///
/// let config = AutocompleteConfig::default()
///     .with_min_query_len(3)
///     .with_debounce(Duration::from_millis(150));
/// ```
#[derive(Debug, Clone)]
pub struct AutocompleteConfig {
    /// Queries shorter than this (in characters) never issue a request.
    ///
    /// Default: 1
    pub min_query_len: usize,

    /// Upper bound on rendered suggestions. `None` renders everything returned.
    ///
    /// Default: none
    pub max_suggestions: Option<usize>,

    /// Delay before a request is sent. A newer input during the delay
    /// cancels the pending request.
    ///
    /// Default: none, every input event sends immediately
    pub debounce: Option<Duration>,

    /// Path the search form navigates to on submit.
    ///
    /// Default: `/search`
    pub search_action: String,

    /// Query parameter carrying the zip code on submit.
    ///
    /// Default: `zipcode`
    pub search_param: String,

    /// Message surfaced when the form is submitted with an empty query.
    pub empty_query_message: String,
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        Self {
            min_query_len: 1,
            max_suggestions: None,
            debounce: None,
            search_action: "/search".into(),
            search_param: "zipcode".into(),
            empty_query_message: EMPTY_QUERY_MESSAGE.into(),
        }
    }
}

impl AutocompleteConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_query_len(mut self, len: usize) -> Self {
        self.min_query_len = len.max(1);
        self
    }

    pub fn with_max_suggestions(mut self, max: usize) -> Self {
        self.max_suggestions = Some(max);
        self
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = Some(debounce);
        self
    }

    pub fn with_search_action(mut self, action: impl Into<String>, param: impl Into<String>) -> Self {
        self.search_action = action.into();
        self.search_param = param.into();
        self
    }

    pub fn with_empty_query_message(mut self, message: impl Into<String>) -> Self {
        self.empty_query_message = message.into();
        self
    }
}

/// Connection settings for the HTTP suggestion endpoint.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Scheme and host of the server, e.g. `http://localhost:5000`.
    pub base_url: String,

    /// Default: `/autocomplete_zipcode`
    pub endpoint_path: String,

    /// Default: `query`
    pub query_param: String,

    /// Whole-request timeout.
    ///
    /// Default: 5 seconds
    pub timeout: Option<Duration>,

    /// Default: none
    pub connect_timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            endpoint_path: "/autocomplete_zipcode".into(),
            query_param: "query".into(),
            timeout: Some(Duration::from_secs(5)),
            connect_timeout: None,
        }
    }

    pub fn with_endpoint(mut self, path: impl Into<String>, query_param: impl Into<String>) -> Self {
        self.endpoint_path = path.into();
        self.query_param = query_param.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn without_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }
}

//! Headless table accordion and zip-code autocomplete widgets.
//!
//! Widgets own their state explicitly and project it onto a
//! [`zipdom::Document`]. Suggestion lookups go through a
//! [`source::SuggestionSource`]; [`autocomplete::AutocompleteDriver`] runs them
//! on tokio tasks and drops out-of-date responses.

pub mod accordion;
pub mod autocomplete;
pub mod config;
pub mod dom;
pub mod error;
pub mod page;
pub mod source;

pub use accordion::{Accordion, SectionState};
pub use autocomplete::{Autocomplete, AutocompleteDriver, Completion, SubmitOutcome};
pub use config::{AutocompleteConfig, ClientConfig};
pub use error::{Error, SourceError, WidgetError};
pub use page::{Page, PageBuilder, PageOutcome};

//! Autocomplete - a zip-code input with remotely sourced suggestions.

mod driver;
mod render;
mod state;

pub use driver::{AutocompleteDriver, Completion};
pub use state::{ApplyOutcome, Autocomplete, SubmitOutcome, SuggestionRequest};

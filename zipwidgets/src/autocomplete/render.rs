//! Projection of autocomplete state onto a document.

use zipdom::{Display, Document, Element};

use super::Autocomplete;
use crate::dom::{SUGGESTION_ERROR_ID, SEARCH_INPUT_ID, SUGGESTION_LIST_ID, suggestion_item_id};
use crate::error::WidgetError;

/// Data key holding the zip code on each suggestion row.
pub const SUGGESTION_DATA_KEY: &str = "suggestion";

impl Autocomplete {
    /// Write the query into the input and rebuild the suggestion list.
    ///
    /// The list is replaced wholesale with one clickable row per suggestion and
    /// hidden while empty. If the document has an `autocomplete-error`
    /// element it shows the transient lookup error.
    pub fn render(&self, doc: &mut Document) -> Result<(), WidgetError> {
        if doc.get(SEARCH_INPUT_ID).is_none() {
            return Err(WidgetError::MissingElement(SEARCH_INPUT_ID.into()));
        }
        if doc.get(SUGGESTION_LIST_ID).is_none() {
            return Err(WidgetError::MissingElement(SUGGESTION_LIST_ID.into()));
        }

        doc.set_value(SEARCH_INPUT_ID, self.query());

        let rows = self
            .suggestions()
            .iter()
            .enumerate()
            .map(|(index, zip)| {
                Element::text(zip.as_str())
                    .id(suggestion_item_id(index))
                    .clickable(true)
                    .data(SUGGESTION_DATA_KEY, zip.as_str())
            })
            .collect();
        doc.replace_children(SUGGESTION_LIST_ID, rows);
        let list_display = if self.is_open() {
            Display::Block
        } else {
            Display::None
        };
        doc.set_display(SUGGESTION_LIST_ID, list_display);

        if doc.get(SUGGESTION_ERROR_ID).is_some() {
            match self.error() {
                Some(message) => {
                    doc.set_text(SUGGESTION_ERROR_ID, message);
                    doc.set_display(SUGGESTION_ERROR_ID, Display::Block);
                }
                None => {
                    doc.set_text(SUGGESTION_ERROR_ID, "");
                    doc.set_display(SUGGESTION_ERROR_ID, Display::None);
                }
            }
        }

        log::debug!(
            "Autocomplete::render query={:?} rows={} error={}",
            self.query(),
            self.suggestions().len(),
            self.error().is_some()
        );
        Ok(())
    }
}

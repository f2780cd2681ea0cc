//! Projection of accordion state onto a document.

use zipdom::Document;

use super::Accordion;
use crate::dom::{EXTRA_COL_CLASS, button_id};
use crate::error::WidgetError;

impl Accordion {
    /// Write every section's display and button label, then the shared
    /// `extra-col` display.
    ///
    /// All section bodies and buttons are checked before anything is written,
    /// so a missing element leaves the document untouched.
    pub fn render(&self, doc: &mut Document) -> Result<(), WidgetError> {
        self.check_elements(doc)?;

        for (id, state) in self.sections() {
            doc.set_display(id, state.display());
            doc.set_text(&button_id(id), state.button_label());
        }

        let extra = self.extra_columns_display();
        let touched = doc.set_display_by_class(EXTRA_COL_CLASS, extra);
        log::debug!(
            "Accordion::render sections={} extra_cols={} display={}",
            self.len(),
            touched,
            extra
        );
        Ok(())
    }

    /// Toggle a section and project the result onto the document.
    ///
    /// Fails without touching either the accordion or the document when the
    /// section is unknown or any required element is missing.
    pub fn toggle_in(
        &mut self,
        doc: &mut Document,
        id: &str,
    ) -> Result<super::SectionState, WidgetError> {
        if !self.contains(id) {
            return Err(WidgetError::UnknownSection(id.to_string()));
        }
        self.check_elements(doc)?;

        let state = self.toggle(id)?;
        self.render(doc)?;
        Ok(state)
    }

    fn check_elements(&self, doc: &Document) -> Result<(), WidgetError> {
        for (id, _) in self.sections() {
            if doc.get(id).is_none() {
                return Err(WidgetError::MissingElement(id.to_string()));
            }
            let button = button_id(id);
            if doc.get(&button).is_none() {
                return Err(WidgetError::MissingElement(button));
            }
        }
        Ok(())
    }
}

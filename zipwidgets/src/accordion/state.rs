//! Accordion state.

use zipdom::{Display, Document};

use crate::dom::ACCORDION_CONTENT_CLASS;
use crate::error::WidgetError;

/// Visibility of one accordion section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionState {
    Expanded,
    #[default]
    Collapsed,
}

impl SectionState {
    pub fn is_expanded(self) -> bool {
        self == Self::Expanded
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Expanded => Self::Collapsed,
            Self::Collapsed => Self::Expanded,
        }
    }

    /// Display of the section body in this state.
    pub fn display(self) -> Display {
        match self {
            Self::Expanded => Display::TableRowGroup,
            Self::Collapsed => Display::None,
        }
    }

    /// Label of the section's toggle button: the action a click performs.
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Expanded => "Collapse",
            Self::Collapsed => "Expand",
        }
    }
}

/// Whether at least one of `states` is expanded.
pub fn any_expanded<I>(states: I) -> bool
where
    I: IntoIterator<Item = SectionState>,
{
    states.into_iter().any(SectionState::is_expanded)
}

/// Display of the `extra-col` cells given whether any section is expanded.
pub fn extra_columns_display(any_expanded: bool) -> Display {
    if any_expanded {
        Display::TableCell
    } else {
        Display::None
    }
}

/// Controller for a set of accordion sections.
///
/// Sections keep their registration order, which is also the order they are
/// rendered in.
///
/// # Example
///
/// ```
/// use zipwidgets::{Accordion, SectionState};
///
/// let mut accordion = Accordion::new()
///     .with_section("decile-1", SectionState::Collapsed)
///     .with_section("decile-2", SectionState::Collapsed);
///
/// assert_eq!(accordion.toggle("decile-1").unwrap(), SectionState::Expanded);
/// assert!(accordion.any_expanded());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Accordion {
    sections: Vec<(String, SectionState)>,
}

impl Accordion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Accordion::register`].
    pub fn with_section(mut self, id: impl Into<String>, state: SectionState) -> Self {
        self.register(id, state);
        self
    }

    /// Discover sections from the document.
    ///
    /// Every element carrying the `accordion-content` class becomes a section;
    /// its starting state is read from its computed display. This is the only
    /// place the document's display values are inspected.
    pub fn from_document(doc: &Document) -> Self {
        let mut accordion = Self::new();
        for id in doc.ids_by_class(ACCORDION_CONTENT_CLASS) {
            let hidden = doc.get(&id).map(|el| el.is_hidden()).unwrap_or(true);
            let state = if hidden {
                SectionState::Collapsed
            } else {
                SectionState::Expanded
            };
            accordion.register(id, state);
        }
        log::debug!("Accordion::from_document sections={}", accordion.len());
        accordion
    }

    /// Add a section, or reset the state of an existing one.
    pub fn register(&mut self, id: impl Into<String>, state: SectionState) {
        let id = id.into();
        match self.sections.iter_mut().find(|(existing, _)| *existing == id) {
            Some((_, existing)) => *existing = state,
            None => self.sections.push((id, state)),
        }
    }

    pub fn state(&self, id: &str) -> Option<SectionState> {
        self.sections
            .iter()
            .find(|(existing, _)| existing == id)
            .map(|(_, state)| *state)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.state(id).is_some()
    }

    /// Section ids with their states, in registration order.
    pub fn sections(&self) -> impl Iterator<Item = (&str, SectionState)> {
        self.sections.iter().map(|(id, state)| (id.as_str(), *state))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Flip a section and return its new state.
    pub fn toggle(&mut self, id: &str) -> Result<SectionState, WidgetError> {
        let (_, state) = self
            .sections
            .iter_mut()
            .find(|(existing, _)| existing == id)
            .ok_or_else(|| WidgetError::UnknownSection(id.to_string()))?;
        *state = state.toggled();
        log::debug!("Accordion::toggle id={} state={:?}", id, state);
        Ok(*state)
    }

    pub fn expand_all(&mut self) {
        self.set_all(SectionState::Expanded);
    }

    pub fn collapse_all(&mut self) {
        self.set_all(SectionState::Collapsed);
    }

    fn set_all(&mut self, state: SectionState) {
        for (_, existing) in &mut self.sections {
            *existing = state;
        }
    }

    /// Re-derived from every section on each call; never cached.
    pub fn any_expanded(&self) -> bool {
        any_expanded(self.sections.iter().map(|(_, state)| *state))
    }

    pub fn extra_columns_display(&self) -> Display {
        extra_columns_display(self.any_expanded())
    }
}

//! A search page: the zip-code form above a results table with accordion
//! sections.

use zipdom::{Document, Element, Event, Tag};

use crate::accordion::{Accordion, SectionState};
use crate::autocomplete::{ApplyOutcome, Autocomplete, Completion, SubmitOutcome, SuggestionRequest};
use crate::config::AutocompleteConfig;
use crate::dom::{
    ACCORDION_CONTENT_CLASS, EXTRA_COL_CLASS, SEARCH_FORM_ID, SEARCH_INPUT_ID,
    SUGGESTION_ERROR_ID, SUGGESTION_LIST_ID, button_id, section_of_button, suggestion_index,
};
use crate::error::WidgetError;

/// What a dispatched event did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// The event did not concern any widget.
    Ignored,
    /// The query became too short; suggestions were cleared.
    Idle,
    /// The caller must perform this lookup and hand the result to [`Page::apply`].
    Request(SuggestionRequest),
    /// A suggestion was picked.
    Selected(String),
    /// A click outside the autocomplete closed its list.
    Dismissed,
    /// An accordion section changed state.
    Toggled { section: String, state: SectionState },
    /// The search form was submitted.
    Submitted(SubmitOutcome),
}

/// Document plus the two widgets projected onto it.
///
/// Events are routed the way a browser would deliver them: a click reaches
/// both the element under the pointer and the document, so a click on an
/// accordion button also dismisses open suggestions.
#[derive(Debug, Clone)]
pub struct Page {
    document: Document,
    accordion: Accordion,
    autocomplete: Autocomplete,
}

impl Page {
    /// Attach widgets to an existing document.
    ///
    /// The search form, input and suggestion list must exist. Accordion
    /// sections are discovered by class. The widgets render once immediately.
    pub fn new(document: Document, config: AutocompleteConfig) -> Result<Self, WidgetError> {
        for id in [SEARCH_FORM_ID, SEARCH_INPUT_ID, SUGGESTION_LIST_ID] {
            if document.get(id).is_none() {
                return Err(WidgetError::MissingElement(id.to_string()));
            }
        }

        let query = document.value(SEARCH_INPUT_ID).unwrap_or_default().to_string();
        let accordion = Accordion::from_document(&document);
        let autocomplete = Autocomplete::new(config).with_query(query);

        let mut page = Self {
            document,
            accordion,
            autocomplete,
        };
        page.render()?;
        Ok(page)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn accordion(&self) -> &Accordion {
        &self.accordion
    }

    pub fn autocomplete(&self) -> &Autocomplete {
        &self.autocomplete
    }

    /// Re-project both widgets onto the document.
    pub fn render(&mut self) -> Result<(), WidgetError> {
        self.accordion.render(&mut self.document)?;
        self.autocomplete.render(&mut self.document)
    }

    /// Plain-text view of the visible document.
    pub fn to_text(&self) -> String {
        zipdom::render_text(self.document.root())
    }

    pub fn dispatch(&mut self, event: &Event) -> Result<PageOutcome, WidgetError> {
        log::debug!("Page::dispatch {:?}", event);
        match event {
            Event::Input { target, value } if target == SEARCH_INPUT_ID => {
                let request = self.autocomplete.on_input(value.as_str());
                self.autocomplete.render(&mut self.document)?;
                Ok(request.map_or(PageOutcome::Idle, PageOutcome::Request))
            }
            Event::Click { target } => self.dispatch_click(target.as_deref()),
            Event::Submit { target } if target == SEARCH_FORM_ID => {
                Ok(PageOutcome::Submitted(self.autocomplete.submit()))
            }
            _ => Ok(PageOutcome::Ignored),
        }
    }

    fn dispatch_click(&mut self, target: Option<&str>) -> Result<PageOutcome, WidgetError> {
        let in_list = target.is_some_and(|t| self.document.contains(SUGGESTION_LIST_ID, t));
        let in_input = target.is_some_and(|t| self.document.contains(SEARCH_INPUT_ID, t));

        if in_list {
            if let Some(index) = target.and_then(suggestion_index) {
                let chosen = self.autocomplete.select(index)?;
                self.autocomplete.render(&mut self.document)?;
                return Ok(PageOutcome::Selected(chosen));
            }
        }

        let mut outcome = PageOutcome::Ignored;
        let on_button = target
            .and_then(|t| self.document.get(t))
            .is_some_and(|el| el.tag == Tag::Button);
        if let Some(section) = target.and_then(section_of_button).filter(|_| on_button) {
            if self.accordion.contains(section) {
                let state = self.accordion.toggle_in(&mut self.document, section)?;
                outcome = PageOutcome::Toggled {
                    section: section.to_string(),
                    state,
                };
            }
        }

        if !in_list && !in_input {
            let was_open = self.autocomplete.is_open();
            self.autocomplete.dismiss();
            self.autocomplete.render(&mut self.document)?;
            if was_open && outcome == PageOutcome::Ignored {
                outcome = PageOutcome::Dismissed;
            }
        }

        Ok(outcome)
    }

    /// Apply a finished lookup and re-render the list.
    pub fn apply(&mut self, completion: Completion) -> Result<ApplyOutcome, WidgetError> {
        let outcome = self
            .autocomplete
            .apply(completion.generation, completion.result);
        if outcome != ApplyOutcome::Stale {
            self.autocomplete.render(&mut self.document)?;
        }
        Ok(outcome)
    }
}

/// One accordion section of the results table.
#[derive(Debug, Clone)]
pub struct Section {
    id: String,
    title: String,
    expanded: bool,
    rows: Vec<(Vec<String>, Vec<String>)>,
}

impl Section {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            expanded: false,
            rows: Vec::new(),
        }
    }

    /// Start the section expanded.
    pub fn expanded(mut self) -> Self {
        self.expanded = true;
        self
    }

    /// Add a row. `extra` cells belong to the extra columns.
    pub fn row<C, E>(mut self, cells: C, extra: E) -> Self
    where
        C: IntoIterator,
        C::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        self.rows.push((
            cells.into_iter().map(Into::into).collect(),
            extra.into_iter().map(Into::into).collect(),
        ));
        self
    }
}

/// Builds the standard search page document.
///
/// # Example
///
/// ```
/// use zipwidgets::PageBuilder;
/// use zipwidgets::page::Section;
///
/// let page = PageBuilder::new()
///     .columns(["Zip Code", "Accidents"])
///     .extra_columns(["Rank"])
///     .section(Section::new("decile-1", "Decile 1").row(["10001", "42"], ["1"]))
///     .build()
///     .unwrap();
///
/// assert_eq!(page.accordion().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PageBuilder {
    placeholder: Option<String>,
    columns: Vec<String>,
    extra_columns: Vec<String>,
    sections: Vec<Section>,
    config: AutocompleteConfig,
}

impl PageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn columns<I>(mut self, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Columns shown only while at least one section is expanded.
    pub fn extra_columns<I>(mut self, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.extra_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    pub fn config(mut self, config: AutocompleteConfig) -> Self {
        self.config = config;
        self
    }

    /// Assemble the document without attaching widgets.
    pub fn document(&self) -> Document {
        let mut input = Element::input("").id(SEARCH_INPUT_ID);
        if let Some(placeholder) = &self.placeholder {
            input = input.placeholder(placeholder.as_str());
        }

        let form = Element::form()
            .id(SEARCH_FORM_ID)
            .child(input)
            .child(Element::button("Search").id("search-submit"))
            .child(Element::div().id(SUGGESTION_LIST_ID).hidden())
            .child(Element::text("").id(SUGGESTION_ERROR_ID).hidden());

        Document::new(
            Element::div()
                .id("page")
                .child(form)
                .child(self.results_table()),
        )
    }

    /// Assemble the document and attach widgets to it.
    pub fn build(self) -> Result<Page, WidgetError> {
        let document = self.document();
        Page::new(document, self.config)
    }

    fn results_table(&self) -> Element {
        let header = self
            .columns
            .iter()
            .map(|c| Element::td(c.as_str()))
            .chain(std::iter::once(Element::td("")))
            .chain(self.extra_columns.iter().map(|c| extra_cell(c)))
            .collect();
        let mut table = Element::table()
            .id("results")
            .child(Element::thead().child(Element::tr().children(header)));

        for section in &self.sections {
            table = table
                .child(self.section_header(section))
                .child(self.section_body(section));
        }
        table
    }

    fn section_header(&self, section: &Section) -> Element {
        let initial = if section.expanded {
            SectionState::Expanded
        } else {
            SectionState::Collapsed
        };

        let mut cells = vec![Element::td(section.title.as_str())];
        cells.extend((1..self.columns.len()).map(|_| Element::td("")));
        cells.push(
            Element::td("").child(
                Element::button(initial.button_label()).id(button_id(&section.id)),
            ),
        );
        cells.extend(self.extra_columns.iter().map(|_| extra_cell("")));

        Element::tbody()
            .id(format!("{}-header", section.id))
            .child(Element::tr().children(cells))
    }

    fn section_body(&self, section: &Section) -> Element {
        let mut body = Element::tbody()
            .id(section.id.as_str())
            .class(ACCORDION_CONTENT_CLASS);
        if !section.expanded {
            body = body.hidden();
        }

        for (cells, extra) in &section.rows {
            let row: Vec<Element> = cells
                .iter()
                .map(|c| Element::td(c.as_str()))
                .chain(std::iter::once(Element::td("")))
                .chain(extra.iter().map(|c| extra_cell(c)))
                .collect();
            body = body.child(Element::tr().children(row));
        }
        body
    }
}

fn extra_cell(text: &str) -> Element {
    Element::td(text).class(EXTRA_COL_CLASS).hidden()
}

use zipdom::{Display, Document, Element};
use zipwidgets::dom::{EXTRA_COL_CLASS, button_id};
use zipwidgets::{Accordion, SectionState, WidgetError};

const SECTIONS: [&str; 3] = ["decile-1", "decile-2", "decile-3"];

fn document() -> Document {
    let mut table = Element::table().id("results").child(
        Element::thead().child(
            Element::tr()
                .child(Element::td("Zip"))
                .child(Element::td("Rank").id("head-extra").class("extra-col").hidden()),
        ),
    );
    for id in SECTIONS {
        table = table
            .child(Element::tbody().child(Element::tr().child(
                Element::td("").child(Element::button("Expand").id(button_id(id))),
            )))
            .child(
                Element::tbody()
                    .id(id)
                    .class("accordion-content")
                    .hidden()
                    .child(
                        Element::tr()
                            .child(Element::td("10001"))
                            .child(Element::td("3").class("extra-col").hidden()),
                    ),
            );
    }
    Document::new(Element::div().id("root").child(table))
}

fn button_label(doc: &Document, section: &str) -> String {
    doc.get(&button_id(section)).unwrap().text_content()
}

fn extra_cols_displays(doc: &Document) -> Vec<Display> {
    doc.ids_by_class(EXTRA_COL_CLASS)
        .iter()
        .map(|id| doc.get(id).unwrap().computed_display())
        .collect()
}

#[test]
fn test_from_document_reads_initial_state() {
    let mut doc = document();
    doc.set_display("decile-2", Display::TableRowGroup);

    let accordion = Accordion::from_document(&doc);

    let sections: Vec<_> = accordion.sections().collect();
    assert_eq!(
        sections,
        vec![
            ("decile-1", SectionState::Collapsed),
            ("decile-2", SectionState::Expanded),
            ("decile-3", SectionState::Collapsed),
        ]
    );
}

#[test]
fn test_toggle_expands_and_relabels() {
    let mut doc = document();
    let mut accordion = Accordion::from_document(&doc);

    let state = accordion.toggle_in(&mut doc, "decile-1").unwrap();

    assert_eq!(state, SectionState::Expanded);
    assert_eq!(
        doc.get("decile-1").unwrap().computed_display(),
        Display::TableRowGroup
    );
    assert_eq!(button_label(&doc, "decile-1"), "Collapse");
    assert_eq!(button_label(&doc, "decile-2"), "Expand");
}

#[test]
fn test_double_toggle_restores_original() {
    let mut doc = document();
    let mut accordion = Accordion::from_document(&doc);
    accordion.render(&mut doc).unwrap();
    let before = doc.clone();

    for id in SECTIONS {
        accordion.toggle_in(&mut doc, id).unwrap();
        accordion.toggle_in(&mut doc, id).unwrap();
        assert_eq!(doc, before, "section {id}");
        assert_eq!(accordion.state(id), Some(SectionState::Collapsed));
    }
}

#[test]
fn test_extra_columns_follow_any_expanded_for_all_combinations() {
    let mut doc = document();
    let mut accordion = Accordion::from_document(&doc);

    // Walk every combination of the three sections via a Gray code so each
    // step is a single toggle.
    for step in 1u32..(1 << SECTIONS.len()) {
        let bit = step.trailing_zeros() as usize;
        accordion.toggle_in(&mut doc, SECTIONS[bit]).unwrap();

        let any = SECTIONS
            .iter()
            .any(|id| !doc.get(id).unwrap().is_hidden());
        let expected = if any { Display::TableCell } else { Display::None };

        assert_eq!(accordion.any_expanded(), any);
        assert!(
            extra_cols_displays(&doc).iter().all(|d| *d == expected),
            "step {step}: expected extra columns {expected}"
        );
    }
}

#[test]
fn test_collapsing_last_section_hides_extra_columns() {
    let mut doc = document();
    let mut accordion = Accordion::from_document(&doc);

    accordion.toggle_in(&mut doc, "decile-1").unwrap();
    accordion.toggle_in(&mut doc, "decile-3").unwrap();
    accordion.toggle_in(&mut doc, "decile-1").unwrap();
    assert!(extra_cols_displays(&doc).iter().all(|d| *d == Display::TableCell));

    accordion.toggle_in(&mut doc, "decile-3").unwrap();
    assert!(extra_cols_displays(&doc).iter().all(|d| *d == Display::None));
}

#[test]
fn test_expand_all_and_collapse_all() {
    let mut doc = document();
    let mut accordion = Accordion::from_document(&doc);

    accordion.expand_all();
    accordion.render(&mut doc).unwrap();
    for id in SECTIONS {
        assert_eq!(button_label(&doc, id), "Collapse");
    }
    assert_eq!(doc.get("head-extra").unwrap().computed_display(), Display::TableCell);

    accordion.collapse_all();
    accordion.render(&mut doc).unwrap();
    assert!(SECTIONS.iter().all(|id| doc.get(id).unwrap().is_hidden()));
    assert!(doc.get("head-extra").unwrap().is_hidden());
}

#[test]
fn test_unknown_section_fails_without_changes() {
    let mut doc = document();
    let mut accordion = Accordion::from_document(&doc);
    let before = doc.clone();

    let err = accordion.toggle_in(&mut doc, "decile-9").unwrap_err();

    assert_eq!(err, WidgetError::UnknownSection("decile-9".into()));
    assert_eq!(doc, before);
}

#[test]
fn test_missing_button_fails_without_changes() {
    let mut doc = document();
    let mut accordion = Accordion::from_document(&doc);
    accordion.register("orphan", SectionState::Collapsed);
    let before = doc.clone();

    let err = accordion.toggle_in(&mut doc, "decile-1").unwrap_err();

    assert_eq!(err, WidgetError::MissingElement("orphan".into()));
    assert_eq!(doc, before);
    assert_eq!(accordion.state("decile-1"), Some(SectionState::Collapsed));
}

use zipdom::{Display, Document, Element, Event, Tag};

fn sample() -> Document {
    Document::new(
        Element::div()
            .id("root")
            .child(
                Element::form()
                    .id("search-form")
                    .child(Element::input("").id("zipcode-search").placeholder("Zip code"))
                    .child(
                        Element::div()
                            .id("autocomplete-list")
                            .child(Element::text("10001").id("item-0")),
                    ),
            )
            .child(
                Element::table()
                    .id("results")
                    .child(
                        Element::thead().child(
                            Element::tr()
                                .child(Element::td("Zip"))
                                .child(Element::td("Rank").class("extra-col").hidden()),
                        ),
                    )
                    .child(Element::tbody().id("decile-1").class("accordion-content").hidden()),
            ),
    )
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn test_get_by_id() {
    let doc = sample();
    assert_eq!(doc.get("zipcode-search").map(|e| e.tag), Some(Tag::Input));
    assert!(doc.get("missing").is_none());
}

#[test]
fn test_ids_by_class_in_document_order() {
    let doc = Document::new(
        Element::div()
            .id("root")
            .child(Element::div().id("a").class("x"))
            .child(Element::div().id("b").child(Element::div().id("c").class("x"))),
    );
    assert_eq!(doc.ids_by_class("x"), vec!["a".to_string(), "c".to_string()]);
    assert!(doc.ids_by_class("y").is_empty());
}

#[test]
fn test_contains() {
    let doc = sample();
    assert!(doc.contains("autocomplete-list", "item-0"));
    assert!(doc.contains("autocomplete-list", "autocomplete-list"));
    assert!(!doc.contains("autocomplete-list", "zipcode-search"));
    assert!(!doc.contains("missing", "item-0"));
}

// ============================================================================
// Display
// ============================================================================

#[test]
fn test_computed_display_falls_back_to_tag() {
    assert_eq!(Element::tbody().computed_display(), Display::TableRowGroup);
    assert_eq!(Element::td("x").computed_display(), Display::TableCell);
    assert_eq!(Element::tbody().hidden().computed_display(), Display::None);
}

#[test]
fn test_set_display_by_class() {
    let mut doc = sample();
    assert_eq!(doc.set_display_by_class("extra-col", Display::TableCell), 1);
    let ids = doc.ids_by_class("extra-col");
    assert_eq!(doc.get(&ids[0]).map(|e| e.computed_display()), Some(Display::TableCell));
    assert_eq!(doc.set_display_by_class("nothing", Display::None), 0);
}

#[test]
fn test_set_display_missing_element() {
    let mut doc = sample();
    assert!(!doc.set_display("missing", Display::None));
}

// ============================================================================
// Content
// ============================================================================

#[test]
fn test_input_value() {
    let mut doc = sample();
    assert_eq!(doc.value("zipcode-search"), Some(""));
    assert!(doc.set_value("zipcode-search", "900"));
    assert_eq!(doc.value("zipcode-search"), Some("900"));
    // Not an input
    assert!(!doc.set_value("autocomplete-list", "x"));
}

#[test]
fn test_clear_children() {
    let mut doc = sample();
    assert!(doc.clear_children("autocomplete-list"));
    assert!(doc.get("item-0").is_none());
    assert!(doc.get("autocomplete-list").is_some());
}

#[test]
fn test_text_content_concatenates_descendants() {
    let el = Element::div()
        .child(Element::text("a"))
        .child(Element::div().child(Element::text("b")));
    assert_eq!(el.text_content(), "ab");
}

#[test]
fn test_event_target() {
    assert_eq!(Event::click("x").target(), Some("x"));
    assert_eq!(Event::click_nowhere().target(), None);
    assert_eq!(Event::input("q", "1").target(), Some("q"));
    assert_eq!(Event::submit("f").target(), Some("f"));
}

#[test]
fn test_generated_ids_do_not_follow_caller_naming() {
    let button = Element::button("Help");
    assert!(button.id.starts_with("__"));
    assert!(!button.id.starts_with("button-"));
    assert!(Element::div().id.starts_with("__div-"));
}

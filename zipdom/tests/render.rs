use zipdom::{render_text, Element};

#[test]
fn test_hidden_elements_are_skipped() {
    let root = Element::div()
        .child(Element::text("shown"))
        .child(Element::div().hidden().child(Element::text("secret")));
    let out = render_text(&root);
    assert!(out.contains("shown"));
    assert!(!out.contains("secret"));
}

#[test]
fn test_input_shows_placeholder_when_empty() {
    let root = Element::div().child(Element::input("").placeholder("Zip code"));
    assert!(render_text(&root).contains("[Zip code]"));

    let root = Element::div().child(Element::input("900").placeholder("Zip code"));
    assert!(render_text(&root).contains("[900]"));
}

#[test]
fn test_table_columns_align() {
    let root = Element::table()
        .child(Element::tr().child(Element::td("Zip")).child(Element::td("Rank")))
        .child(Element::tr().child(Element::td("10001")).child(Element::td("3")));
    let out = render_text(&root);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines, vec!["Zip   | Rank", "10001 | 3"]);
}

#[test]
fn test_table_skips_hidden_cells_and_groups() {
    let root = Element::table()
        .child(
            Element::tr()
                .child(Element::td("Zip"))
                .child(Element::td("Rank").hidden()),
        )
        .child(
            Element::tbody()
                .hidden()
                .child(Element::tr().child(Element::td("10001"))),
        );
    let out = render_text(&root);
    assert_eq!(out.lines().collect::<Vec<_>>(), vec!["Zip"]);
}

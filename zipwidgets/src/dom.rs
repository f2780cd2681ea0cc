//! Element ids and classes the widgets expect in the document.

/// Class of every accordion section body.
pub const ACCORDION_CONTENT_CLASS: &str = "accordion-content";
/// Class of table cells shown only while some section is expanded.
pub const EXTRA_COL_CLASS: &str = "extra-col";
/// Prefix of a section's toggle button id; the section id follows.
pub const BUTTON_PREFIX: &str = "button-";

pub const SEARCH_FORM_ID: &str = "search-form";
pub const SEARCH_INPUT_ID: &str = "zipcode-search";
pub const SUGGESTION_LIST_ID: &str = "autocomplete-list";
pub const SUGGESTION_ERROR_ID: &str = "autocomplete-error";

/// Prefix of a rendered suggestion row id; the row index follows.
pub const SUGGESTION_ITEM_PREFIX: &str = "autocomplete-list-item-";

/// Id of the toggle button paired with a section.
pub fn button_id(section_id: &str) -> String {
    format!("{BUTTON_PREFIX}{section_id}")
}

/// Section id a toggle button belongs to, if `id` follows the button naming.
pub fn section_of_button(id: &str) -> Option<&str> {
    id.strip_prefix(BUTTON_PREFIX).filter(|s| !s.is_empty())
}

pub fn suggestion_item_id(index: usize) -> String {
    format!("{SUGGESTION_ITEM_PREFIX}{index}")
}

/// Row index of a suggestion item id.
pub fn suggestion_index(id: &str) -> Option<usize> {
    id.strip_prefix(SUGGESTION_ITEM_PREFIX)?.parse().ok()
}

//! Plain-text rendering of a document.
//!
//! Hidden elements (display `none`) and everything inside them are skipped.
//! Tables are laid out as aligned columns; other elements render one line per
//! text-bearing leaf, indented by depth.

use unicode_width::UnicodeWidthStr;

use crate::element::Content;
use crate::types::Tag;
use crate::Element;

const INDENT: &str = "  ";
const CELL_SEPARATOR: &str = " | ";

pub fn render_text(root: &Element) -> String {
    let mut out = String::new();
    render_element(root, 0, &mut out);
    out
}

fn render_element(element: &Element, depth: usize, out: &mut String) {
    if element.is_hidden() {
        return;
    }

    match element.tag {
        Tag::Table => render_table(element, depth, out),
        Tag::Input => {
            let line = match &element.content {
                Content::Input { value, placeholder } if value.is_empty() => {
                    format!("[{}]", placeholder.as_deref().unwrap_or(""))
                }
                Content::Input { value, .. } => format!("[{value}]"),
                _ => String::new(),
            };
            push_line(out, depth, &line);
        }
        Tag::Button => push_line(out, depth, &format!("<{}>", element.text_content())),
        _ => match &element.content {
            Content::None => {}
            Content::Text(text) => push_line(out, depth, text),
            Content::Input { .. } => {}
            Content::Children(children) => {
                for child in children {
                    render_element(child, depth + 1, out);
                }
            }
        },
    }
}

fn render_table(table: &Element, depth: usize, out: &mut String) {
    let mut rows: Vec<Vec<String>> = Vec::new();
    collect_rows(table, &mut rows);

    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0usize; columns];
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    for row in rows {
        let line = row
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let pad = widths[i].saturating_sub(cell.width());
                format!("{cell}{}", " ".repeat(pad))
            })
            .collect::<Vec<_>>()
            .join(CELL_SEPARATOR);
        push_line(out, depth, line.trim_end());
    }
}

/// Gather visible rows of a table; each row is the list of its visible cells.
fn collect_rows(element: &Element, rows: &mut Vec<Vec<String>>) {
    for child in element.child_elements() {
        if child.is_hidden() {
            continue;
        }
        if child.tag == Tag::TableRow {
            let cells = child
                .child_elements()
                .iter()
                .filter(|cell| !cell.is_hidden())
                .map(|cell| match cell.tag {
                    Tag::Button => format!("<{}>", cell.text_content()),
                    _ => visible_text(cell),
                })
                .collect();
            rows.push(cells);
        } else {
            collect_rows(child, rows);
        }
    }
}

fn visible_text(element: &Element) -> String {
    if element.is_hidden() {
        return String::new();
    }
    match &element.content {
        Content::Children(children) => children
            .iter()
            .map(|child| match child.tag {
                Tag::Button if !child.is_hidden() => format!("<{}>", child.text_content()),
                _ => visible_text(child),
            })
            .collect(),
        _ => element.text_content(),
    }
}

fn push_line(out: &mut String, depth: usize, text: &str) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str(text);
    out.push('\n');
}

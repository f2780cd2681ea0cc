use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::{Display, Tag};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Ids for elements built without an explicit id. The leading `__` keeps them
/// out of any naming scheme callers use for their own ids.
fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("__{prefix}-{id}")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: String,
    pub tag: Tag,
    pub classes: Vec<String>,

    // Content
    pub content: Content,

    // Visual
    /// Explicitly assigned display value. `None` falls back to the tag's
    /// default, see [`Element::computed_display`].
    pub display: Option<Display>,

    // Interaction
    pub clickable: bool,

    // Custom data storage (suggestion values, section ids, etc.)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            tag: Tag::Div,
            classes: Vec::new(),
            content: Content::None,
            display: None,
            clickable: false,
            data: HashMap::new(),
        }
    }
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            id: generate_id(tag.name()),
            tag,
            ..Default::default()
        }
    }

    pub fn div() -> Self {
        Self::new(Tag::Div)
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            tag: Tag::Span,
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self {
            id: generate_id("button"),
            tag: Tag::Button,
            content: Content::Text(label.into()),
            clickable: true,
            ..Default::default()
        }
    }

    /// Create a text input element.
    pub fn input(value: impl Into<String>) -> Self {
        Self {
            id: generate_id("input"),
            tag: Tag::Input,
            content: Content::Input {
                value: value.into(),
                placeholder: None,
            },
            clickable: true,
            ..Default::default()
        }
    }

    pub fn form() -> Self {
        Self::new(Tag::Form)
    }

    pub fn table() -> Self {
        Self::new(Tag::Table)
    }

    pub fn thead() -> Self {
        Self::new(Tag::TableHead)
    }

    pub fn tbody() -> Self {
        Self::new(Tag::TableBody)
    }

    pub fn tr() -> Self {
        Self::new(Tag::TableRow)
    }

    pub fn td(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("td"),
            tag: Tag::TableCell,
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    // Visual
    pub fn display(mut self, display: Display) -> Self {
        self.display = Some(display);
        self
    }

    pub fn hidden(self) -> Self {
        self.display(Display::None)
    }

    /// The effective display value: the explicit one if set, otherwise the
    /// tag's default.
    pub fn computed_display(&self) -> Display {
        self.display.unwrap_or_else(|| self.tag.default_display())
    }

    pub fn is_hidden(&self) -> bool {
        self.computed_display().is_hidden()
    }

    // Interaction
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        if let Content::Input {
            placeholder: ref mut p,
            ..
        } = self.content
        {
            *p = Some(placeholder.into());
        }
        self
    }

    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, children: Vec<Element>) -> Self {
        self.content = Content::Children(children);
        self
    }

    pub fn child_elements(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    // Accessors
    /// Text of a text element, or the concatenated text of all descendants.
    pub fn text_content(&self) -> String {
        match &self.content {
            Content::None | Content::Input { .. } => String::new(),
            Content::Text(text) => text.clone(),
            Content::Children(children) => children.iter().map(Element::text_content).collect(),
        }
    }

    /// Current value of an input element.
    pub fn value(&self) -> Option<&str> {
        match &self.content {
            Content::Input { value, .. } => Some(value),
            _ => None,
        }
    }
}

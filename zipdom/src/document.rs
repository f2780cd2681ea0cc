//! Owned element tree with id and class lookups.

use crate::element::{collect_by_class, contains, find_element, find_element_mut, Content};
use crate::types::Display;
use crate::Element;

/// A document rooted at a single element.
///
/// All mutation goes through the document so that callers address elements by
/// id and never hold references across updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Element> {
        find_element_mut(&mut self.root, id)
    }

    /// IDs of all elements with the given class, in document order.
    pub fn ids_by_class(&self, class: &str) -> Vec<String> {
        collect_by_class(&self.root, class)
    }

    /// Whether the element `target` lies inside (or is) the element `ancestor`.
    ///
    /// Returns `false` when `ancestor` does not exist.
    pub fn contains(&self, ancestor: &str, target: &str) -> bool {
        self.get(ancestor)
            .map(|element| contains(element, target))
            .unwrap_or(false)
    }

    /// Set the explicit display of an element. Returns `false` if the element
    /// does not exist.
    pub fn set_display(&mut self, id: &str, display: Display) -> bool {
        match self.get_mut(id) {
            Some(element) => {
                element.display = Some(display);
                true
            }
            None => {
                log::trace!("set_display: no element {}", id);
                false
            }
        }
    }

    /// Set the display of every element carrying `class`. Returns the number
    /// of elements touched.
    pub fn set_display_by_class(&mut self, class: &str, display: Display) -> usize {
        let ids = self.ids_by_class(class);
        ids.iter().filter(|id| self.set_display(id, display)).count()
    }

    /// Replace the content of an element with a text node.
    pub fn set_text(&mut self, id: &str, text: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(element) => {
                element.content = Content::Text(text.into());
                true
            }
            None => false,
        }
    }

    /// Current value of an input element.
    pub fn value(&self, id: &str) -> Option<&str> {
        self.get(id).and_then(Element::value)
    }

    /// Set the value of an input element. Returns `false` if the element does
    /// not exist or is not an input.
    pub fn set_value(&mut self, id: &str, new_value: impl Into<String>) -> bool {
        match self.get_mut(id).map(|element| &mut element.content) {
            Some(Content::Input { value, .. }) => {
                *value = new_value.into();
                true
            }
            _ => false,
        }
    }

    /// Replace all children of an element.
    pub fn replace_children(&mut self, id: &str, children: Vec<Element>) -> bool {
        match self.get_mut(id) {
            Some(element) => {
                element.content = Content::Children(children);
                true
            }
            None => false,
        }
    }

    /// Remove all children (or text) of an element.
    pub fn clear_children(&mut self, id: &str) -> bool {
        self.replace_children(id, Vec::new())
    }
}

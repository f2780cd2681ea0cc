mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    if let Content::Children(children) = &mut root.content {
        for child in children {
            if let Some(found) = find_element_mut(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Collect the IDs of all elements carrying `class`, in document order.
pub fn collect_by_class(root: &Element, class: &str) -> Vec<String> {
    let mut ids = Vec::new();
    collect_by_class_recursive(root, class, &mut ids);
    ids
}

fn collect_by_class_recursive(element: &Element, class: &str, out: &mut Vec<String>) {
    if element.has_class(class) {
        out.push(element.id.clone());
    }

    for child in element.child_elements() {
        collect_by_class_recursive(child, class, out);
    }
}

/// Whether `target` is `ancestor` itself or one of its descendants.
pub fn contains(ancestor: &Element, target: &str) -> bool {
    find_element(ancestor, target).is_some()
}

//! Element class mutation.
//!
//! The engine never touches a real document directly; it goes through a
//! [`Renderer`]. [`Document`] is an in-memory implementation for headless
//! use and tests.

use std::collections::HashMap;

/// Identifies an element owned by a [`Renderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

/// Adds and removes classes on elements.
///
/// Implementations should treat operations on unknown elements as no-ops.
pub trait Renderer {
    fn add_class(&mut self, element: ElementId, class: &str);
    fn remove_class(&mut self, element: ElementId, class: &str);
    fn has_class(&self, element: ElementId, class: &str) -> bool;
}

/// An in-memory set of elements and their class lists.
#[derive(Debug, Default, Clone)]
pub struct Document {
    elements: HashMap<ElementId, Vec<String>>,
    next_id: u64,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_element(&mut self) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.elements.insert(id, Vec::new());
        id
    }

    pub fn remove_element(&mut self, element: ElementId) -> bool {
        self.elements.remove(&element).is_some()
    }

    pub fn contains(&self, element: ElementId) -> bool {
        self.elements.contains_key(&element)
    }

    /// Classes of an element in the order they were added.
    pub fn classes(&self, element: ElementId) -> Option<&[String]> {
        self.elements.get(&element).map(Vec::as_slice)
    }

    /// The `class` attribute as it would be rendered.
    pub fn class_attr(&self, element: ElementId) -> Option<String> {
        self.classes(element).map(|classes| classes.join(" "))
    }
}

impl Renderer for Document {
    fn add_class(&mut self, element: ElementId, class: &str) {
        let Some(classes) = self.elements.get_mut(&element) else {
            log::warn!("add_class on missing element {:?}", element);
            return;
        };
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, element: ElementId, class: &str) {
        match self.elements.get_mut(&element) {
            Some(classes) => classes.retain(|c| c != class),
            None => log::warn!("remove_class on missing element {:?}", element),
        }
    }

    fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.elements
            .get(&element)
            .is_some_and(|classes| classes.iter().any(|c| c == class))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_list() {
        let mut document = Document::new();
        let element = document.create_element();

        document.add_class(element, "e0");
        document.add_class(element, "e1");
        document.add_class(element, "e0");
        assert_eq!(document.class_attr(element).as_deref(), Some("e0 e1"));

        document.remove_class(element, "e0");
        assert!(!document.has_class(element, "e0"));
        assert!(document.has_class(element, "e1"));
    }

    #[test]
    fn test_missing_element_is_ignored() {
        let mut document = Document::new();
        let element = document.create_element();
        assert!(document.remove_element(element));

        document.add_class(element, "e0");
        assert!(!document.has_class(element, "e0"));
        assert_eq!(document.classes(element), None);
    }
}

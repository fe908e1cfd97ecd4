//! One style key bound to one element.

use crate::facade::LyTheme;
use crate::registry::StyleDefinition;
use crate::renderer::{ElementId, Renderer};
use lystyle::Result;

/// Keeps exactly one engine class on an element.
///
/// Binding a new key registers it, swaps the element's class and then
/// releases the previous key, so a style that no element uses any more is
/// evicted from the stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassBinding {
    element: ElementId,
    current: Option<(String, String)>,
}

impl ClassBinding {
    pub fn new(element: ElementId) -> Self {
        Self {
            element,
            current: None,
        }
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    /// Key of the bound style.
    pub fn key(&self) -> Option<&str> {
        self.current.as_ref().map(|(key, _)| key.as_str())
    }

    /// Class currently on the element.
    pub fn class_name(&self) -> Option<&str> {
        self.current.as_ref().map(|(_, class)| class.as_str())
    }

    /// Binds `key`, replacing whatever was bound before.
    ///
    /// Re-binding the key that is already bound is a no-op. On error the
    /// element and the previous binding are left untouched.
    pub fn bind(
        &mut self,
        theme: &mut LyTheme,
        renderer: &mut dyn Renderer,
        key: &str,
        definition: impl Into<StyleDefinition>,
        priority: i32,
    ) -> Result<String> {
        if let Some((bound, class_name)) = &self.current {
            if bound == key {
                return Ok(class_name.clone());
            }
        }

        let class_name = theme.add_style(key, definition, priority)?;
        theme.update_class(renderer, self.element, &class_name, self.class_name());
        if let Some((previous, _)) = self.current.replace((key.to_string(), class_name.clone())) {
            theme.release(&previous);
        }
        Ok(class_name)
    }

    /// Removes the class from the element and releases its key.
    pub fn unbind(&mut self, theme: &mut LyTheme, renderer: &mut dyn Renderer) -> bool {
        let Some((key, class_name)) = self.current.take() else {
            return false;
        };
        renderer.remove_class(self.element, &class_name);
        theme.release(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::Document;
    use lystyle::{Theme, style};

    #[test]
    fn test_rebind_releases_previous_key() {
        let mut theme = LyTheme::new(Theme::light());
        let mut document = Document::new();
        let element = document.create_element();
        let mut binding = ClassBinding::new(element);

        let first = binding
            .bind(&mut theme, &mut document, "bg:primary", style! { "background" => "$primary" }, 0)
            .unwrap();
        let second = binding
            .bind(&mut theme, &mut document, "bg:accent", style! { "background" => "$accent" }, 0)
            .unwrap();

        assert_ne!(first, second);
        assert_eq!(document.class_attr(element).as_deref(), Some(second.as_str()));
        assert!(!theme.registry().contains("bg:primary"));
        assert_eq!(binding.key(), Some("bg:accent"));
    }

    #[test]
    fn test_same_key_keeps_one_reference() {
        let mut theme = LyTheme::new(Theme::light());
        let mut document = Document::new();
        let mut binding = ClassBinding::new(document.create_element());

        for _ in 0..3 {
            binding
                .bind(&mut theme, &mut document, "flat", style! { "display" => "flex" }, 0)
                .unwrap();
        }
        assert_eq!(theme.registry().entry("flat").unwrap().ref_count(), 1);

        assert!(binding.unbind(&mut theme, &mut document));
        assert!(!theme.registry().contains("flat"));
        assert!(!binding.unbind(&mut theme, &mut document));
    }
}

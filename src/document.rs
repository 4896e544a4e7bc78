use crate::error::PanelError;
use std::collections::HashMap;

pub const FILE_LIST_ID: &str = "file-list";
pub const ASSISTANT_OPEN_ID: &str = "assistant-open";
pub const ASSISTANT_MODAL_ID: &str = "assistant-modal";
pub const ASSISTANT_PANEL_ID: &str = "assistant-panel";
pub const ASSISTANT_CLOSE_ID: &str = "assistant-close";

/// Anything whose markup can be swapped out wholesale.
pub trait Container {
    fn replace_content(&mut self, markup: String);
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Element {
    content: String,
    hidden: bool,
}

impl Element {
    #[must_use]
    pub fn hidden() -> Self {
        Element {
            content: String::new(),
            hidden: true,
        }
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }
}

impl Container for Element {
    fn replace_content(&mut self, markup: String) {
        self.content = markup;
    }
}

/// In-memory stand-in for the page: elements addressed by id.
#[derive(Debug, Default, Clone)]
pub struct Document {
    elements: HashMap<String, Element>,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The skeleton the file panel page is built from. The modal starts hidden.
    #[must_use]
    pub fn standard() -> Self {
        Document::new()
            .with_element(FILE_LIST_ID, Element::default())
            .with_element(ASSISTANT_OPEN_ID, Element::default())
            .with_element(ASSISTANT_MODAL_ID, Element::hidden())
            .with_element(ASSISTANT_PANEL_ID, Element::default())
            .with_element(ASSISTANT_CLOSE_ID, Element::default())
    }

    #[must_use]
    pub fn with_element(mut self, id: &str, element: Element) -> Self {
        self.elements.insert(id.to_string(), element);
        self
    }

    #[cfg(test)]
    pub fn remove(&mut self, id: &str) -> Option<Element> {
        self.elements.remove(id)
    }

    pub fn get(&self, id: &str) -> Result<&Element, PanelError> {
        self.elements
            .get(id)
            .ok_or_else(|| PanelError::MissingElement(id.to_string()))
    }

    pub fn get_mut(&mut self, id: &str) -> Result<&mut Element, PanelError> {
        self.elements
            .get_mut(id)
            .ok_or_else(|| PanelError::MissingElement(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_document() {
        let doc = Document::standard();
        for id in [
            FILE_LIST_ID,
            ASSISTANT_OPEN_ID,
            ASSISTANT_MODAL_ID,
            ASSISTANT_PANEL_ID,
            ASSISTANT_CLOSE_ID,
        ] {
            assert!(doc.get(id).is_ok(), "missing {id}");
        }
        assert!(doc.get(ASSISTANT_MODAL_ID).unwrap().is_hidden());
        assert!(!doc.get(FILE_LIST_ID).unwrap().is_hidden());
    }

    #[test]
    fn test_lookup_missing_element() {
        let mut doc = Document::new();
        let err = doc.get_mut("nowhere").unwrap_err();
        assert!(matches!(err, PanelError::MissingElement(ref id) if id == "nowhere"));
        assert_eq!(err.to_string(), "element #nowhere not found in document");
    }

    #[test]
    fn test_replace_content_overwrites() {
        let mut el = Element::default();
        el.replace_content("<p>one</p>".to_string());
        el.replace_content("<p>two</p>".to_string());
        assert_eq!(el.content(), "<p>two</p>");
    }
}

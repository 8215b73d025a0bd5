//! Owned element tree for a single archive record
//!
//! The streamer materializes one `VariationArchive` subtree at a time into an
//! [`Element`]; the classifier only ever reads from it.

use serde::Serialize;

/// An XML element with its attributes, child elements and text content
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
    text: Option<String>,
}

impl Element {
    /// Create an element with the given tag name and no content
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add an attribute
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Append a child element
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Set the text content
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Tag name of this element
    pub fn tag_name(&self) -> &str {
        &self.name
    }

    /// Value of the named attribute, if present
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// All attributes in document order
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// First child element with the given name
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All child elements with the given name, in document order
    pub fn children<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// All child elements, in document order
    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter()
    }

    /// Text content, if the element carried any non-whitespace text
    pub fn text_value(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Text content of the named child element
    pub fn child_text(&self, name: &str) -> Option<&str> {
        self.child(name).and_then(Element::text_value)
    }

    /// Whether the element has at least one child element
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// True when the element has neither child elements nor text.
    ///
    /// Attributes alone do not count as content.
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.text.is_none()
    }

    pub(crate) fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    pub(crate) fn push_attribute(&mut self, name: String, value: String) {
        self.attributes.push((name, value));
    }

    /// Append a text fragment. Fragments arrive trimmed, so fragments
    /// separated by child elements are joined with a single space.
    pub(crate) fn append_text(&mut self, fragment: &str) {
        match &mut self.text {
            Some(text) => {
                text.push(' ');
                text.push_str(fragment);
            }
            None => self.text = Some(fragment.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        Element::new("Interpretations")
            .with_attribute("count", "2")
            .with_child(
                Element::new("Interpretation")
                    .with_attribute("Type", "Clinical significance")
                    .with_child(Element::new("Description").with_text("Pathogenic")),
            )
            .with_child(Element::new("Interpretation").with_attribute("Type", "Other"))
    }

    #[test]
    fn test_attribute_and_child_lookup() {
        let element = sample();
        assert_eq!(element.tag_name(), "Interpretations");
        assert_eq!(element.attribute("count"), Some("2"));
        assert_eq!(element.attribute("missing"), None);

        let first = element.child("Interpretation").unwrap();
        assert_eq!(first.attribute("Type"), Some("Clinical significance"));
        assert_eq!(first.child_text("Description"), Some("Pathogenic"));
        assert_eq!(element.children("Interpretation").count(), 2);
        assert_eq!(element.children("Nope").count(), 0);
    }

    #[test]
    fn test_emptiness() {
        let bare = Element::new("ClassifiedRecord").with_attribute("x", "1");
        assert!(bare.is_empty());
        assert!(!bare.has_children());

        let text_only = Element::new("ReviewStatus").with_text("practice guideline");
        assert!(!text_only.is_empty());
        assert!(!text_only.has_children());

        assert!(!sample().is_empty());
        assert!(sample().has_children());
    }

    #[test]
    fn test_append_text_joins_fragments() {
        let mut element = Element::new("Description");
        element.append_text("Likely");
        element.append_text("benign");
        assert_eq!(element.text_value(), Some("Likely benign"));
    }
}

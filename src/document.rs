//! In-memory document model
//!
//! A small element tree that the renderers write into. It knows just
//! enough about HTML to serialize a page, pull the visible text out of it,
//! and answer the handful of queries the controller needs (by id, by
//! class, by attribute).

use std::fmt::Write;

/// Elements that never have children or a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "img", "input", "meta", "link", "hr"];

/// Elements that start on a new line when the document is shown as text.
const BLOCK_ELEMENTS: &[&str] = &[
    "body", "div", "form", "h1", "h2", "h3", "h4", "h5", "h6", "li", "p", "section", "ul",
];

/// A child of an [`Element`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    Element(Element),
    /// Plain text, escaped on output
    Text(String),
    /// Trusted HTML fragment (e.g. a catalog summary), emitted as-is
    Html(String),
}

/// A single element with attributes, children and a visibility flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
    hidden: bool,
}

impl Element {
    /// Creates an empty, visible element.
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
            hidden: false,
        }
    }

    /// Sets an attribute and returns the element.
    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Sets the `id` attribute.
    pub fn with_id(self, id: &str) -> Self {
        self.with_attr("id", id)
    }

    /// Sets the class attribute from a space separated list.
    pub fn with_class(self, classes: &str) -> Self {
        self.with_attr("class", classes)
    }

    /// Appends a child element.
    pub fn with_child(mut self, child: Element) -> Self {
        self.append(child);
        self
    }

    /// Appends a text node.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.append_text(text);
        self
    }

    /// Appends a raw HTML fragment.
    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.children.push(Node::Html(html.into()));
        self
    }

    /// Marks the element as hidden.
    pub fn hidden(mut self) -> Self {
        self.hide();
        self
    }

    /// Tag name, e.g. `div`.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Value of the attribute `name`, if set.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Sets an attribute, replacing an existing value of the same name.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name.to_string(), value)),
        }
    }

    /// Value of the `id` attribute, if set.
    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    /// Whether `class` is one of the element's classes.
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Whether the element is hidden (`display: none`).
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Hides the element and its subtree.
    pub fn hide(&mut self) {
        self.hidden = true;
    }

    /// Makes the element visible again.
    pub fn show(&mut self) {
        self.hidden = false;
    }

    /// Removes all children.
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Appends a child element after the existing children.
    pub fn append(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    /// Appends a text node after the existing children.
    pub fn append_text(&mut self, text: impl Into<String>) {
        self.children.push(Node::Text(text.into()));
    }

    /// Iterates over the direct element children.
    pub fn children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            _ => None,
        })
    }

    /// Iterates mutably over the direct element children.
    pub fn children_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.children.iter_mut().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            _ => None,
        })
    }

    /// Finds the first element (self included) matching the predicate,
    /// depth first.
    pub fn find<P>(&self, predicate: &P) -> Option<&Element>
    where
        P: Fn(&Element) -> bool,
    {
        if predicate(self) {
            return Some(self);
        }
        self.children().find_map(|child| child.find(predicate))
    }

    /// Collects all elements (self included) matching the predicate in
    /// document order.
    pub fn find_all<'a, P>(&'a self, predicate: &P, found: &mut Vec<&'a Element>)
    where
        P: Fn(&Element) -> bool,
    {
        if predicate(self) {
            found.push(self);
        }
        for child in self.children() {
            child.find_all(predicate, found);
        }
    }

    /// Finds the element with the given `id`.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.find(&|e: &Element| e.id() == Some(id))
    }

    /// Finds the first element whose attribute `name` equals `value`.
    pub fn find_by_attr(&self, name: &str, value: &str) -> Option<&Element> {
        self.find(&|e: &Element| e.attr(name) == Some(value))
    }

    /// Collects all elements carrying `class`, in document order.
    pub fn find_all_by_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.find_all(&|e: &Element| e.has_class(class), &mut found);
        found
    }

    /// Concatenated text of the element and all descendants, hidden ones
    /// included. HTML fragments contribute their text only.
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        for node in &self.children {
            match node {
                Node::Element(element) => text.push_str(&element.text_content()),
                Node::Text(t) => text.push_str(t),
                Node::Html(html) => text.push_str(nanohtml2text::html2text(html).trim()),
            }
        }
        text
    }

    /// Text a reader would see: hidden subtrees are skipped and block
    /// elements start on their own line.
    pub fn visible_text(&self) -> String {
        let mut text = String::new();
        self.collect_visible_text(&mut text);

        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn collect_visible_text(&self, out: &mut String) {
        if self.hidden {
            return;
        }

        let is_block = self.tag == "br" || BLOCK_ELEMENTS.contains(&self.tag.as_str());
        if is_block {
            out.push('\n');
        }

        for node in &self.children {
            match node {
                Node::Element(element) => element.collect_visible_text(out),
                Node::Text(t) => out.push_str(t),
                Node::Html(html) => out.push_str(nanohtml2text::html2text(html).trim()),
            }
        }

        if is_block {
            out.push('\n');
        }
    }

    /// Serializes the element and its subtree to HTML.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        self.write_html(&mut html);
        html
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attributes {
            // Writing into a String cannot fail
            let _ = write!(out, " {}=\"{}\"", name, escape_html(value));
        }
        if self.hidden {
            out.push_str(" style=\"display: none;\"");
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&self.tag.as_str()) {
            return;
        }

        for node in &self.children {
            match node {
                Node::Element(element) => element.write_html(out),
                Node::Text(t) => out.push_str(&escape_html(t)),
                Node::Html(html) => out.push_str(html),
            }
        }

        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

/// Escapes the characters that are significant in HTML text and
/// attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        Element::new("div")
            .with_id("root")
            .with_child(
                Element::new("div")
                    .with_class("Show card")
                    .with_attr("data-show-id", "1")
                    .with_child(Element::new("h5").with_text("First")),
            )
            .with_child(
                Element::new("div")
                    .with_class("Show")
                    .with_attr("data-show-id", "2")
                    .with_child(Element::new("h5").with_text("Second"))
                    .hidden(),
            )
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("Tom & Jerry"), "Tom &amp; Jerry");
        assert_eq!(escape_html("<b>\"x\"</b>"), "&lt;b&gt;&quot;x&quot;&lt;/b&gt;");
        assert_eq!(escape_html("It's"), "It&#39;s");
    }

    #[test]
    fn test_set_attr_replaces() {
        let mut input = Element::new("input").with_attr("value", "old");
        input.set_attr("value", "new");
        assert_eq!(input.attr("value"), Some("new"));
        assert_eq!(input.to_html(), r#"<input value="new">"#);
    }

    #[test]
    fn test_queries() {
        let root = sample();
        assert_eq!(root.find_by_id("root").map(Element::tag), Some("div"));
        assert_eq!(root.find_all_by_class("Show").len(), 2);
        assert_eq!(root.find_all_by_class("card").len(), 1);

        let second = root.find_by_attr("data-show-id", "2").unwrap();
        assert_eq!(second.text_content(), "Second");
        assert!(root.find_by_attr("data-show-id", "3").is_none());
    }

    #[test]
    fn test_clear_and_append() {
        let mut root = sample();
        root.clear();
        assert_eq!(root.children().count(), 0);

        root.append(Element::new("p").with_text("fresh"));
        assert_eq!(root.to_html(), r#"<div id="root"><p>fresh</p></div>"#);
    }

    #[test]
    fn test_hidden_serialization_and_visible_text() {
        let root = sample();
        let html = root.to_html();
        assert!(html.contains(r#"<div class="Show" data-show-id="2" style="display: none;">"#));

        assert_eq!(root.visible_text(), "First");
        assert_eq!(root.text_content(), "FirstSecond");
    }

    #[test]
    fn test_html_fragments() {
        let item = Element::new("li")
            .with_text("Pilot & more")
            .with_child(Element::new("br"))
            .with_text(" Summary: ")
            .with_html("<p>Hello world</p>");

        assert_eq!(
            item.to_html(),
            "<li>Pilot &amp; more<br> Summary: <p>Hello world</p></li>"
        );
        assert!(item.text_content().contains("Hello world"));
        assert!(!item.text_content().contains("<p>"));
    }
}

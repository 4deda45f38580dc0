// File: crates/hexbin-core/src/dom.rs
// Summary: Owned SVG element tree with append/attr building, scoped selection and serialization.

use std::fmt::{Display, Write as _};

/// An SVG element with ordered attributes, optional text and child elements.
/// Text precedes children when serialized.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into(), attrs: Vec::new(), text: None, children: Vec::new() }
    }

    pub fn tag(&self) -> &str { &self.tag }

    pub fn children(&self) -> &[Element] { &self.children }

    /// Set (or replace) an attribute; returns `self` for chaining.
    pub fn attr(&mut self, name: &str, value: impl Display) -> &mut Self {
        let value = value.to_string();
        match self.attrs.iter_mut().find(|(k, _)| k == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name.to_string(), value)),
        }
        self
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str())
    }

    /// Append a child element and return it.
    pub fn append(&mut self, tag: &str) -> &mut Element {
        self.children.push(Element::new(tag));
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Set the element's own text content.
    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = Some(text.into());
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|c| c.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// First descendant matching `selector` (depth-first, document order).
    /// Supported selectors: `tag`, `.class`, `tag.class`, `#id`.
    pub fn select(&self, selector: &str) -> Option<&Element> {
        let sel = Selector::parse(selector);
        let mut found = None;
        self.walk(&mut |e| {
            if found.is_none() && sel.matches(e) {
                found = Some(e);
            }
        });
        found
    }

    /// All descendants matching `selector`, in document order.
    pub fn select_all(&self, selector: &str) -> Vec<&Element> {
        let sel = Selector::parse(selector);
        let mut out = Vec::new();
        self.walk(&mut |e| {
            if sel.matches(e) {
                out.push(e);
            }
        });
        out
    }

    fn walk<'a>(&'a self, f: &mut dyn FnMut(&'a Element)) {
        for child in &self.children {
            f(child);
            child.walk(f);
        }
    }

    /// Concatenated text of all descendant text nodes.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(t) = &self.text {
            out.push_str(t);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// Serialize this element (and its subtree) as SVG markup.
    pub fn write_svg(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        for (k, v) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", k, escape_xml(v));
        }
        if self.text.is_none() && self.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');
        if let Some(t) = &self.text {
            out.push_str(&escape_xml(t));
        }
        for child in &self.children {
            child.write_svg(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }

    pub fn to_svg(&self) -> String {
        let mut out = String::with_capacity(4096);
        self.write_svg(&mut out);
        out
    }
}

struct Selector<'a> {
    tag: Option<&'a str>,
    class: Option<&'a str>,
    id: Option<&'a str>,
}

impl<'a> Selector<'a> {
    fn parse(s: &'a str) -> Self {
        if let Some(id) = s.strip_prefix('#') {
            return Self { tag: None, class: None, id: Some(id) };
        }
        match s.split_once('.') {
            Some((tag, class)) => Self {
                tag: (!tag.is_empty()).then_some(tag),
                class: Some(class),
                id: None,
            },
            None => Self { tag: Some(s), class: None, id: None },
        }
    }

    fn matches(&self, e: &Element) -> bool {
        self.tag.map_or(true, |t| e.tag == t)
            && self.class.map_or(true, |c| c.split('.').all(|c| e.has_class(c)))
            && self.id.map_or(true, |id| e.get_attr("id") == Some(id))
    }
}

pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

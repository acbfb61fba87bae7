//! Textual document model
//!
//! A small owned element tree with XML rendering and parsing. The codec maps
//! dump nodes onto this tree; stores read and write it as text.

use crate::error::DumpError;
use crate::tree::DEFAULT_MAX_DEPTH;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

/// Declaration written ahead of stored documents
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// One element: tag, attributes in document order, child elements, and text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Element>,
    pub text: String,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set an attribute, replacing any previous value for the same key
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((key, value)),
        }
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    /// Render the element tree as XML, without a declaration.
    ///
    /// `None` renders everything on one line; `Some(n)` indents nested
    /// elements by `n` spaces per level.
    pub fn to_xml_string(&self, indent: Option<usize>) -> Result<String, DumpError> {
        let mut writer = match indent {
            Some(width) => Writer::new_with_indent(Vec::new(), b' ', width),
            None => Writer::new(Vec::new()),
        };
        write_element(&mut writer, &self.root)?;
        String::from_utf8(writer.into_inner())
            .map_err(|e| DumpError::MalformedDocument(format!("Rendered XML is not UTF-8: {}", e)))
    }

    /// Parse XML text into an element tree, allowing the default file depth.
    pub fn parse(text: &str) -> Result<Self, DumpError> {
        Self::parse_with_limit(text, DEFAULT_MAX_DEPTH)
    }

    /// Parse XML text into an element tree.
    ///
    /// Declarations, comments, processing instructions and doctypes are
    /// skipped. Whitespace around text content is trimmed. Open elements may
    /// nest `max_depth + 2` deep: the root, `max_depth` files and a record.
    /// Deeper documents fail with `DepthLimitExceeded(max_depth)` before the
    /// deeper elements are built.
    pub fn parse_with_limit(text: &str, max_depth: usize) -> Result<Self, DumpError> {
        let element_limit = max_depth.saturating_add(2);
        let mut reader = Reader::from_str(text);
        reader.trim_text(true);

        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            let event = match reader.read_event() {
                Ok(event) => event,
                Err(e) => {
                    return Err(DumpError::MalformedDocument(format!(
                        "XML syntax error at byte {}: {}",
                        reader.buffer_position(),
                        e
                    )))
                }
            };
            match event {
                Event::Start(start) => {
                    if stack.len() >= element_limit {
                        return Err(DumpError::DepthLimitExceeded(max_depth));
                    }
                    stack.push(element_from_start(&start)?);
                }
                Event::Empty(start) => {
                    if stack.len() >= element_limit {
                        return Err(DumpError::DepthLimitExceeded(max_depth));
                    }
                    let element = element_from_start(&start)?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::End(_) => {
                    let element = stack.pop().ok_or_else(|| {
                        DumpError::MalformedDocument("Unexpected closing tag".to_string())
                    })?;
                    attach(&mut stack, &mut root, element)?;
                }
                Event::Text(content) => {
                    let content = content.unescape().map_err(|e| {
                        DumpError::MalformedDocument(format!("Invalid text content: {}", e))
                    })?;
                    push_text(&mut stack, &content)?;
                }
                Event::CData(content) => {
                    push_text(&mut stack, &String::from_utf8_lossy(&content))?;
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.last() {
            return Err(DumpError::MalformedDocument(format!(
                "Unclosed element <{}>",
                open.name
            )));
        }
        root.map(Document::new)
            .ok_or_else(|| DumpError::MalformedDocument("Document has no root element".to_string()))
    }
}

fn write_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    element: &Element,
) -> Result<(), DumpError> {
    let render_error = |e: quick_xml::Error| {
        DumpError::MalformedDocument(format!("Failed to render <{}>: {}", element.name, e))
    };

    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }

    if element.children.is_empty() && element.text.is_empty() {
        return writer.write_event(Event::Empty(start)).map_err(render_error);
    }

    writer.write_event(Event::Start(start)).map_err(render_error)?;
    if !element.text.is_empty() {
        writer
            .write_event(Event::Text(BytesText::new(&element.text)))
            .map_err(render_error)?;
    }
    for child in &element.children {
        write_element(writer, child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(element.name.as_str())))
        .map_err(render_error)
}

fn element_from_start(start: &BytesStart) -> Result<Element, DumpError> {
    let name = std::str::from_utf8(start.name().as_ref())
        .map_err(|e| DumpError::MalformedDocument(format!("Tag name is not UTF-8: {}", e)))?
        .to_string();

    let mut element = Element::new(name);
    for attr in start.attributes() {
        let attr = attr.map_err(|e| {
            DumpError::MalformedDocument(format!("Invalid attribute on <{}>: {}", element.name, e))
        })?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| DumpError::MalformedDocument(format!("Attribute name is not UTF-8: {}", e)))?
            .to_string();
        let value = attr
            .unescape_value()
            .map_err(|e| {
                DumpError::MalformedDocument(format!("Invalid value for attribute {}: {}", key, e))
            })?
            .into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), DumpError> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
        return Ok(());
    }
    if root.is_some() {
        return Err(DumpError::MalformedDocument(format!(
            "Second root element <{}>",
            element.name
        )));
    }
    *root = Some(element);
    Ok(())
}

fn push_text(stack: &mut [Element], content: &str) -> Result<(), DumpError> {
    // Indentation between elements is not content
    if content.trim().is_empty() {
        return Ok(());
    }
    match stack.last_mut() {
        Some(element) => {
            element.text.push_str(content);
            Ok(())
        }
        None => Err(DumpError::MalformedDocument(
            "Text outside the root element".to_string(),
        )),
    }
}

//! Minimal element tree rendered to XML text
//!
//! Output carries no XML declaration and no indentation, so a tree of
//! `root` with one `salary` child renders as `<root><salary>5000</salary></root>`.
//! Text escapes only `&`, `<` and `>`, and empty elements render as `<name />`.

use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{Error, Result};

/// A named element with optional text content and nested children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Serialize the tree. Childless elements without text are written
    /// self-closing.
    pub fn to_xml_string(&self) -> Result<String> {
        let mut writer = Writer::new(Vec::new());
        self.write_to(&mut writer)?;
        String::from_utf8(writer.into_inner()).map_err(Error::xml)
    }

    fn write_to(&self, writer: &mut Writer<Vec<u8>>) -> Result<()> {
        let name = self.name.as_str();

        if self.text.is_none() && self.children.is_empty() {
            // trailing space in the content yields `<name />`
            let content = format!("{name} ");
            writer
                .write_event(Event::Empty(BytesStart::from_content(content, name.len())))
                .map_err(Error::xml)?;
            return Ok(());
        }

        writer
            .write_event(Event::Start(BytesStart::new(name)))
            .map_err(Error::xml)?;

        if let Some(text) = &self.text {
            writer
                .write_event(Event::Text(BytesText::from_escaped(partial_escape(
                    text.as_str(),
                ))))
                .map_err(Error::xml)?;
        }

        for child in &self.children {
            child.write_to(writer)?;
        }

        writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(Error::xml)?;

        Ok(())
    }
}

//! Style definitions parsing (word/styles.xml)
//!
//! Only what the checker needs survives here: the mapping from style ID to
//! display name, and the default paragraph style.

use std::collections::HashMap;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::archive::STYLES_PART;
use crate::error::{OoxmlError, Result};

/// Name used when a document declares no default paragraph style
pub const FALLBACK_STYLE_NAME: &str = "Normal";

/// Collection of paragraph style names from a document
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    /// Display names, keyed by style ID
    names: HashMap<String, String>,
    /// Default paragraph style ID
    pub default_paragraph: Option<String>,
}

impl StyleSheet {
    /// Parse styles from XML bytes
    pub fn parse(xml: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);
        reader.config_mut().trim_text(true);

        let mut stylesheet = StyleSheet::default();
        let mut buf = Vec::new();
        let mut current: Option<StyleBuilder> = None;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                    b"style" => current = Some(StyleBuilder::from_element(e)),
                    b"name" => {
                        if let Some(style) = current.as_mut() {
                            style.name = get_attr(e, b"w:val");
                        }
                    }
                    _ => {}
                },
                Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                    b"style" => {
                        // A style with no children still has an ID
                        stylesheet.insert(StyleBuilder::from_element(e));
                    }
                    b"name" => {
                        if let Some(style) = current.as_mut() {
                            style.name = get_attr(e, b"w:val");
                        }
                    }
                    _ => {}
                },
                Ok(Event::End(ref e)) => {
                    if e.local_name().as_ref() == b"style" {
                        if let Some(style) = current.take() {
                            stylesheet.insert(style);
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::xml(STYLES_PART, e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(stylesheet)
    }

    fn insert(&mut self, builder: StyleBuilder) {
        if builder.paragraph && builder.is_default && self.default_paragraph.is_none() {
            self.default_paragraph = builder.id.clone();
        }
        if let Some(id) = builder.id {
            let name = builder.name.unwrap_or_else(|| id.clone());
            self.names.insert(id, name);
        }
    }

    /// Get the stored name for a style ID
    pub fn name(&self, id: &str) -> Option<&str> {
        self.names.get(id).map(|s| s.as_str())
    }

    /// Number of styles with a known ID
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if no styles were found
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Resolve the display name of a paragraph's style
    ///
    /// Unknown or absent IDs fall back to the default paragraph style, then
    /// to `Normal`. Lower-case built-in names are returned in the form Word
    /// shows in its UI.
    pub fn paragraph_style_name(&self, style_id: Option<&str>) -> String {
        let stored = style_id
            .and_then(|id| self.name(id))
            .or_else(|| self.default_paragraph.as_deref().and_then(|id| self.name(id)));

        match stored {
            Some(name) => ui_name(name),
            None => FALLBACK_STYLE_NAME.to_string(),
        }
    }
}

/// Map a stored built-in style name to its UI name
fn ui_name(name: &str) -> String {
    match name {
        "caption" => "Caption".to_string(),
        "header" => "Header".to_string(),
        "footer" => "Footer".to_string(),
        _ => match name.strip_prefix("heading ") {
            Some(level) if level.len() == 1 && level.as_bytes()[0].is_ascii_digit() => {
                format!("Heading {}", level)
            }
            _ => name.to_string(),
        },
    }
}

#[derive(Default)]
struct StyleBuilder {
    id: Option<String>,
    name: Option<String>,
    paragraph: bool,
    is_default: bool,
}

impl StyleBuilder {
    fn from_element(e: &BytesStart) -> Self {
        Self {
            id: get_attr(e, b"w:styleId"),
            name: None,
            // Styles without w:type are paragraph styles
            paragraph: get_attr(e, b"w:type").map_or(true, |t| t == "paragraph"),
            is_default: matches!(get_attr(e, b"w:default").as_deref(), Some("1" | "true" | "on")),
        }
    }
}

pub(crate) fn get_attr(e: &BytesStart, name: &[u8]) -> Option<String> {
    e.attributes()
        .filter_map(|a| a.ok())
        .find(|a| a.key.as_ref() == name)
        .and_then(|a| a.unescape_value().ok().map(|v| v.into_owned()))
}

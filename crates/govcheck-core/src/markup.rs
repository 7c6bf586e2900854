//! Markup adapter: HTML documents parsed with `scraper`

use scraper::{ElementRef, Html};

use crate::view::{DocumentKind, DocumentView};

/// Elements whose text is never shown to the reader
const HIDDEN_ELEMENTS: [&str; 3] = ["script", "style", "template"];

/// A parsed HTML document and its Extracted Text
#[derive(Debug)]
pub struct MarkupDocument {
    html: Html,
    text: String,
}

impl MarkupDocument {
    /// Parse an HTML document
    ///
    /// HTML parsing is error-tolerant; malformed markup is repaired the way
    /// browsers repair it rather than rejected.
    pub fn parse(source: &str) -> Self {
        let html = Html::parse_document(source);
        if !html.errors.is_empty() {
            tracing::debug!(errors = html.errors.len(), "markup repaired during parsing");
        }

        let text = html
            .tree
            .root()
            .descendants()
            .filter(|node| {
                !node.ancestors().any(|a| {
                    ElementRef::wrap(a).is_some_and(|el| HIDDEN_ELEMENTS.contains(&el.value().name()))
                })
            })
            .filter_map(|node| node.value().as_text().map(|t| &**t))
            .collect::<Vec<_>>()
            .join("\n");

        Self { html, text }
    }

    /// All elements with one of the given tag names, in document order
    pub fn select<'a>(&'a self, tags: &'a [&'a str]) -> impl Iterator<Item = ElementRef<'a>> + 'a {
        self.html
            .tree
            .root()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(move |el| tags.contains(&el.value().name()))
    }

    /// The last non-blank visible text that comes before `element` starts
    ///
    /// Whitespace-only text nodes are skipped on purpose, so indentation
    /// between a lead-in paragraph and its list does not hide the lead-in.
    pub fn preceding_text(&self, element: &ElementRef<'_>) -> Option<&str> {
        let mut last = None;

        for node in self.html.tree.root().descendants() {
            if node.id() == element.id() {
                break;
            }
            let Some(text) = node.value().as_text() else {
                continue;
            };
            let hidden = node.ancestors().any(|a| {
                ElementRef::wrap(a).is_some_and(|el| HIDDEN_ELEMENTS.contains(&el.value().name()))
            });
            if !hidden && !text.trim().is_empty() {
                last = Some(&**text);
            }
        }

        last
    }
}

impl DocumentView for MarkupDocument {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Markup
    }

    fn extracted_text(&self) -> &str {
        &self.text
    }
}

/// All descendant text of an element, concatenated as written
pub fn element_text(el: &ElementRef<'_>) -> String {
    el.text().collect()
}

/// Descendant text nodes trimmed and concatenated, skipping blank ones
pub fn stripped_text(el: &ElementRef<'_>) -> String {
    el.text().map(str::trim).filter(|s| !s.is_empty()).collect()
}

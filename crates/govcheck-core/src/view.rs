//! Read-only view over a loaded document
//!
//! Both input kinds expose their Extracted Text through [`DocumentView`];
//! the whole-text rules are written against this trait so the markup and
//! package evaluators share them.

use std::fmt;

/// Kind of document the loader produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// HTML-family markup (.htm, .html)
    Markup,
    /// Word-processing package (.docx)
    Package,
}

impl DocumentKind {
    /// Select the document kind for a file extension, ignoring case
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "htm" | "html" => Some(DocumentKind::Markup),
            "docx" => Some(DocumentKind::Package),
            _ => None,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Markup => f.write_str("markup"),
            DocumentKind::Package => f.write_str("package"),
        }
    }
}

/// Capability surface shared by every document adapter
pub trait DocumentView {
    /// The kind of input this view was loaded from
    fn kind(&self) -> DocumentKind;

    /// All visible text in document order, separated by line breaks
    fn extracted_text(&self) -> &str;
}

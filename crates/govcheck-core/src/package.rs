//! Package adapter: DOCX documents read through `govcheck-ooxml`

use govcheck_ooxml::{Document, OoxmlArchive, Run, StyleSheet};

use crate::error::ParseError;
use crate::view::{DocumentKind, DocumentView};

/// A body paragraph with its resolved style name
#[derive(Debug, Clone)]
pub struct PackageParagraph {
    /// Display name of the paragraph style (e.g., "List Bullet")
    pub style_name: String,
    /// Concatenated run text
    pub text: String,
    /// Runs in order
    pub runs: Vec<Run>,
}

/// A DOCX document reduced to styled paragraphs and its Extracted Text
#[derive(Debug, Clone)]
pub struct PackageDocument {
    paragraphs: Vec<PackageParagraph>,
    text: String,
}

impl PackageDocument {
    /// Build the document view from an unpacked archive
    pub fn from_archive(archive: &OoxmlArchive) -> Result<Self, ParseError> {
        let document = Document::parse(archive.document_xml()?)?;
        let styles = match archive.styles_xml() {
            Some(xml) => StyleSheet::parse(xml)?,
            None => {
                tracing::debug!("package has no styles part");
                StyleSheet::default()
            }
        };

        Ok(Self::from_parts(document, &styles))
    }

    /// Combine parsed paragraphs with the style sheet that names them
    pub fn from_parts(document: Document, styles: &StyleSheet) -> Self {
        let text = document.plain_text();
        let paragraphs = document
            .paragraphs
            .into_iter()
            .map(|p| PackageParagraph {
                style_name: styles.paragraph_style_name(p.style_id.as_deref()),
                text: p.text(),
                runs: p.runs,
            })
            .collect();

        Self { paragraphs, text }
    }

    /// Body paragraphs in document order
    pub fn paragraphs(&self) -> &[PackageParagraph] {
        &self.paragraphs
    }
}

impl DocumentView for PackageDocument {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Package
    }

    fn extracted_text(&self) -> &str {
        &self.text
    }
}

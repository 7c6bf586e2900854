//! # govcheck-ooxml
//!
//! DOCX (Office Open XML) reading for govcheck.
//!
//! This crate provides functionality to:
//! - Unpack a DOCX package
//! - Parse the body paragraphs of `word/document.xml` with their runs
//! - Resolve paragraph style names from `word/styles.xml`
//!
//! ## Example: Reading a Document
//!
//! ```no_run
//! use govcheck_ooxml::{Document, OoxmlArchive, StyleSheet};
//!
//! let archive = OoxmlArchive::open("document.docx")?;
//! let document = Document::parse(archive.document_xml()?)?;
//! let styles = match archive.styles_xml() {
//!     Some(xml) => StyleSheet::parse(xml)?,
//!     None => StyleSheet::default(),
//! };
//!
//! for para in &document.paragraphs {
//!     println!("{}: {}", styles.paragraph_style_name(para.style_id.as_deref()), para.text());
//! }
//! # Ok::<(), govcheck_ooxml::OoxmlError>(())
//! ```

pub mod archive;
pub mod document;
pub mod error;
pub mod styles;

#[cfg(test)]
pub(crate) mod test_utils;

pub use archive::{OoxmlArchive, DOCUMENT_PART, STYLES_PART};
pub use document::{Document, Paragraph, Run};
pub use error::{OoxmlError, Result};
pub use styles::{StyleSheet, FALLBACK_STYLE_NAME};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

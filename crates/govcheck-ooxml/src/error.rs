//! Error types for DOCX package reading

use thiserror::Error;

/// Errors that can occur while reading a DOCX package
#[derive(Error, Debug)]
pub enum OoxmlError {
    /// The package is not a readable ZIP archive
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Error reading the package file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A part is not well-formed XML
    #[error("XML parsing error in {part}: {source}")]
    Xml {
        /// Package part being parsed (e.g., "word/document.xml")
        part: &'static str,
        #[source]
        source: quick_xml::Error,
    },

    /// Required part not found in archive
    #[error("Required file not found: {0}")]
    MissingFile(String),
}

impl OoxmlError {
    pub(crate) fn xml(part: &'static str, source: quick_xml::Error) -> Self {
        Self::Xml { part, source }
    }
}

/// Result type for OOXML operations
pub type Result<T> = std::result::Result<T, OoxmlError>;

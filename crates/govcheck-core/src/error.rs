//! Error types for loading documents

use std::path::PathBuf;

use thiserror::Error;

/// Problems with the input path itself
#[derive(Error, Debug)]
pub enum InputError {
    /// The path does not resolve to a readable file
    #[error("File not found.")]
    NotFound(PathBuf),

    /// The extension is not one of .htm, .html or .docx
    #[error("Unsupported file type. Use .htm, .html, or .docx")]
    UnsupportedType(String),
}

/// The file exists but its content cannot be read as the claimed type
#[derive(Error, Debug)]
pub enum ParseError {
    /// Markup is not valid UTF-8
    #[error("Markup is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    /// The DOCX package could not be read
    #[error("Invalid document package: {0}")]
    Package(#[from] govcheck_ooxml::OoxmlError),

    /// Reading the file failed after it was found
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Any failure that stops a check before findings are produced
#[derive(Error, Debug)]
pub enum CheckError {
    /// Bad input path or extension
    #[error(transparent)]
    Input(#[from] InputError),

    /// Content could not be parsed
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl CheckError {
    /// Check if this is an input error (missing file, unsupported type)
    pub fn is_input(&self) -> bool {
        matches!(self, CheckError::Input(_))
    }
}

/// Result type for govcheck operations
pub type Result<T> = std::result::Result<T, CheckError>;

//! Document loader: selects an adapter by file extension

use std::ffi::OsStr;
use std::fs;
use std::io::Cursor;
use std::path::Path;

use govcheck_ooxml::OoxmlArchive;
use tracing::debug;

use crate::error::{InputError, ParseError, Result};
use crate::markup::MarkupDocument;
use crate::package::PackageDocument;
use crate::view::{DocumentKind, DocumentView};

/// A document produced by one of the adapters
#[derive(Debug)]
pub enum LoadedDocument {
    /// HTML-family markup
    Markup(MarkupDocument),
    /// DOCX package
    Package(PackageDocument),
}

impl DocumentView for LoadedDocument {
    fn kind(&self) -> DocumentKind {
        match self {
            LoadedDocument::Markup(doc) => doc.kind(),
            LoadedDocument::Package(doc) => doc.kind(),
        }
    }

    fn extracted_text(&self) -> &str {
        match self {
            LoadedDocument::Markup(doc) => doc.extracted_text(),
            LoadedDocument::Package(doc) => doc.extracted_text(),
        }
    }
}

/// Load a document from disk
///
/// The path must name an existing file with a `.htm`, `.html` or `.docx`
/// extension. Existence is checked first.
pub fn load(path: impl AsRef<Path>) -> Result<LoadedDocument> {
    let path = path.as_ref();

    if !path.is_file() {
        return Err(InputError::NotFound(path.to_path_buf()).into());
    }
    let kind = kind_for(path)?;
    debug!(path = %path.display(), %kind, "loading document");

    match kind {
        DocumentKind::Markup => {
            let bytes = fs::read(path).map_err(ParseError::from)?;
            load_markup(bytes)
        }
        DocumentKind::Package => {
            let archive = OoxmlArchive::open(path).map_err(ParseError::from)?;
            load_package(&archive)
        }
    }
}

/// Load a document from memory, using `file_name` only to pick the adapter
pub fn load_bytes(file_name: &str, bytes: &[u8]) -> Result<LoadedDocument> {
    let kind = kind_for(Path::new(file_name))?;
    debug!(file_name, %kind, size = bytes.len(), "loading document from memory");

    match kind {
        DocumentKind::Markup => load_markup(bytes.to_vec()),
        DocumentKind::Package => {
            let archive = OoxmlArchive::from_reader(Cursor::new(bytes)).map_err(ParseError::from)?;
            load_package(&archive)
        }
    }
}

fn kind_for(path: &Path) -> Result<DocumentKind> {
    let ext = path.extension().and_then(OsStr::to_str).unwrap_or_default();
    DocumentKind::from_extension(ext)
        .ok_or_else(|| InputError::UnsupportedType(ext.to_string()).into())
}

fn load_markup(bytes: Vec<u8>) -> Result<LoadedDocument> {
    let source = String::from_utf8(bytes).map_err(ParseError::from)?;
    Ok(LoadedDocument::Markup(MarkupDocument::parse(&source)))
}

fn load_package(archive: &OoxmlArchive) -> Result<LoadedDocument> {
    let doc = PackageDocument::from_archive(archive)?;
    debug!(paragraphs = doc.paragraphs().len(), "package loaded");
    Ok(LoadedDocument::Package(doc))
}

//! Archive handling for DOCX files
//!
//! A DOCX file is a ZIP archive of XML parts. The whole archive is unpacked
//! into memory on open; documents checked by govcheck are small.

use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Seek};
use std::path::Path;

use zip::read::ZipArchive;

use crate::error::{OoxmlError, Result};

/// Path of the main document part
pub const DOCUMENT_PART: &str = "word/document.xml";

/// Path of the style definitions part
pub const STYLES_PART: &str = "word/styles.xml";

/// An unpacked DOCX package
#[derive(Debug)]
pub struct OoxmlArchive {
    /// All files in the archive, keyed by path
    files: HashMap<String, Vec<u8>>,
}

impl OoxmlArchive {
    /// Open and unpack a DOCX file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Create from any reader that implements Read + Seek
    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        let mut archive = ZipArchive::new(reader)?;
        let mut files = HashMap::new();

        for i in 0..archive.len() {
            let mut file = archive.by_index(i)?;
            let name = file.name().to_string();

            // Skip directories
            if name.ends_with('/') {
                continue;
            }

            let mut contents = Vec::new();
            file.read_to_end(&mut contents)?;
            files.insert(name, contents);
        }

        tracing::debug!(parts = files.len(), "unpacked package");
        Ok(Self { files })
    }

    /// Get a file's contents by path
    pub fn get(&self, path: &str) -> Option<&[u8]> {
        self.files.get(path).map(|v| v.as_slice())
    }

    /// Get the main document content (word/document.xml)
    pub fn document_xml(&self) -> Result<&[u8]> {
        self.get(DOCUMENT_PART)
            .ok_or_else(|| OoxmlError::MissingFile(DOCUMENT_PART.to_string()))
    }

    /// Get the styles definition (word/styles.xml), if the package has one
    pub fn styles_xml(&self) -> Option<&[u8]> {
        self.get(STYLES_PART)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{build_package, empty_body};
    use std::io::Cursor;

    #[test]
    fn test_from_reader_unpacks_parts() {
        let bytes = build_package(&empty_body(), None);
        let archive = OoxmlArchive::from_reader(Cursor::new(bytes)).unwrap();

        assert!(archive.get("[Content_Types].xml").is_some());
        assert!(archive.get(DOCUMENT_PART).is_some());
        assert!(archive.document_xml().is_ok());
        assert!(archive.styles_xml().is_none());
    }

    #[test]
    fn test_styles_part_is_exposed() {
        let styles = r#"<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"/>"#;
        let bytes = build_package(&empty_body(), Some(styles));
        let archive = OoxmlArchive::from_reader(Cursor::new(bytes)).unwrap();

        assert_eq!(archive.styles_xml(), Some(styles.as_bytes()));
    }

    #[test]
    fn test_missing_document_part() {
        let archive = OoxmlArchive {
            files: HashMap::new(),
        };

        let err = archive.document_xml().unwrap_err();
        assert!(matches!(err, OoxmlError::MissingFile(ref p) if p == DOCUMENT_PART));
    }

    #[test]
    fn test_not_a_zip() {
        let result = OoxmlArchive::from_reader(Cursor::new(b"plain text, not a package".to_vec()));
        assert!(matches!(result, Err(OoxmlError::Archive(_))));
    }

    #[test]
    fn test_open_from_disk() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("sample.docx");
        std::fs::write(&path, build_package(&empty_body(), None)).unwrap();

        let archive = OoxmlArchive::open(&path).unwrap();
        assert!(archive.get(DOCUMENT_PART).is_some());
    }
}

//! # govcheck-core
//!
//! Loading and rule evaluation for the govcheck GOV.UK style checker.
//!
//! A document is loaded into one of two adapters, chosen by file extension:
//! - `.htm` / `.html` as a [`MarkupDocument`]
//! - `.docx` as a [`PackageDocument`]
//!
//! Rules then run over the document and produce an ordered list of
//! [`Finding`]s. Evaluation never fails; only loading does.
//!
//! ## Example
//!
//! ```
//! use govcheck_core::{evaluate, load_bytes, Category};
//!
//! let doc = load_bytes(
//!     "page.html",
//!     b"<p>Published 21 September 2025</p><p>Please apply.</p>",
//! )?;
//! let findings = evaluate(&doc);
//! assert_eq!(findings.len(), 1);
//! assert_eq!(findings[0].category(), Category::Language);
//! # Ok::<(), govcheck_core::CheckError>(())
//! ```

pub mod error;
pub mod finding;
pub mod loader;
pub mod markup;
pub mod package;
pub mod patterns;
pub mod rules;
pub mod view;

pub use error::{CheckError, InputError, ParseError, Result};
pub use finding::{Category, Finding};
pub use loader::{load, load_bytes, LoadedDocument};
pub use markup::MarkupDocument;
pub use package::{PackageDocument, PackageParagraph};
pub use rules::evaluate;
pub use view::{DocumentKind, DocumentView};

/// Load a file and evaluate it in one step
pub fn check_file(path: impl AsRef<std::path::Path>) -> Result<Vec<Finding>> {
    let doc = load(path)?;
    Ok(evaluate(&doc))
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

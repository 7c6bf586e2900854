//! Style rules
//!
//! Rules run in a fixed order per document kind and append to a single
//! findings list; that order is the order findings are reported in.

pub mod markup;
pub mod package;
pub mod text;

use tracing::debug;

use crate::finding::Finding;
use crate::loader::LoadedDocument;
use crate::view::DocumentView;

/// Evaluate every rule for the document's kind
pub fn evaluate(doc: &LoadedDocument) -> Vec<Finding> {
    let findings = match doc {
        LoadedDocument::Markup(markup) => markup::evaluate(markup),
        LoadedDocument::Package(package) => package::evaluate(package),
    };
    debug!(kind = %doc.kind(), findings = findings.len(), "rules evaluated");
    findings
}

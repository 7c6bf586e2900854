//! Rule evaluation for DOCX documents
//!
//! Only list-styled paragraphs and run formatting carry structure here;
//! everything else is checked on the Extracted Text.

use crate::finding::Finding;
use crate::package::PackageDocument;
use crate::rules::text;

/// Paragraph styles starting with this prefix are treated as bullets
const LIST_STYLE_PREFIX: &str = "List";

/// Run every package check in order and collect the findings
pub fn evaluate(doc: &PackageDocument) -> Vec<Finding> {
    let mut findings = Vec::new();

    list_paragraphs(doc, &mut findings);
    text::forbidden_please(doc, &mut findings);
    text::negative_contractions(doc, &mut findings);
    text::directional_words(doc, &mut findings);
    text::long_sentences(doc, &mut findings);
    emphasis_runs(doc, &mut findings);
    text::acronyms(doc, &mut findings);
    text::date_presence(doc, &mut findings);
    text::hyphen_spacing(doc, &mut findings);
    text::slash_usage(doc, &mut findings);

    findings
}

fn list_paragraphs(doc: &PackageDocument, findings: &mut Vec<Finding>) {
    for para in doc.paragraphs() {
        if para.style_name.starts_with(LIST_STYLE_PREFIX) {
            text::bullet_text(&para.text, findings);
        }
    }
}

fn emphasis_runs(doc: &PackageDocument, findings: &mut Vec<Finding>) {
    for run in doc.paragraphs().iter().flat_map(|p| p.runs.iter()) {
        if run.bold || run.italic {
            findings.push(Finding::format(format!(
                "Use of bold/italic text: '{}'",
                run.text.trim()
            )));
        }
    }
}

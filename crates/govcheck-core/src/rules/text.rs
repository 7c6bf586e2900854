//! Rules that only need text
//!
//! Whole-document checks run on the Extracted Text of any
//! [`DocumentView`]; the bullet check runs on a single item's text and is
//! shared by list items and list-styled paragraphs.

use std::collections::HashSet;

use crate::finding::Finding;
use crate::patterns::{self, MAX_SENTENCE_WORDS};
use crate::view::DocumentView;

/// Bullet text: must end with a full stop and begin with a capital letter
pub fn bullet_text(text: &str, findings: &mut Vec<Finding>) {
    let item = text.trim();

    if !item.ends_with('.') {
        findings.push(Finding::bullet(format!(
            "Does not end with a full stop: '{}'",
            item
        )));
    }
    if item.chars().next().is_some_and(|c| !c.is_uppercase()) {
        findings.push(Finding::bullet(format!(
            "Does not begin with a capital letter: '{}'",
            item
        )));
    }
}

/// "please" anywhere in the document, reported once
pub fn forbidden_please(doc: &dyn DocumentView, findings: &mut Vec<Finding>) {
    if patterns::please().is_match(doc.extracted_text()) {
        findings.push(Finding::language("Found instance of the word 'please'."));
    }
}

/// Every negative contraction, one finding per occurrence
pub fn negative_contractions(doc: &dyn DocumentView, findings: &mut Vec<Finding>) {
    for m in patterns::negative_contraction().find_iter(doc.extracted_text()) {
        findings.push(Finding::language(format!(
            "Found negative contraction: '{}'",
            m.as_str()
        )));
    }
}

/// "above" and "below", each reported at most once
pub fn directional_words(doc: &dyn DocumentView, findings: &mut Vec<Finding>) {
    for (word, re) in patterns::directional_words() {
        if re.is_match(doc.extracted_text()) {
            findings.push(Finding::language(format!(
                "Found use of the word '{}'.",
                word
            )));
        }
    }
}

pub fn long_sentences(doc: &dyn DocumentView, findings: &mut Vec<Finding>) {
    for sentence in patterns::split_sentences(doc.extracted_text()) {
        if sentence.split_whitespace().count() > MAX_SENTENCE_WORDS {
            findings.push(Finding::language(format!(
                "Long sentence (>{} words): '{}'",
                MAX_SENTENCE_WORDS,
                sentence.trim()
            )));
        }
    }
}

/// Acronyms never followed by a parenthetical expansion
///
/// Each distinct acronym is checked on its own, in order of first use.
pub fn acronyms(doc: &dyn DocumentView, findings: &mut Vec<Finding>) {
    let text = doc.extracted_text();
    let mut seen = HashSet::new();

    for m in patterns::acronym().find_iter(text) {
        let acronym = m.as_str();
        if !seen.insert(acronym) {
            continue;
        }
        if !patterns::has_expansion(text, acronym) {
            findings.push(Finding::acronym(format!(
                "'{}' may not be spelled out on first use.",
                acronym
            )));
        }
    }
}

pub fn date_presence(doc: &dyn DocumentView, findings: &mut Vec<Finding>) {
    if !patterns::govuk_date().is_match(doc.extracted_text()) {
        findings.push(Finding::style(
            "No date found in GOV.UK format (e.g., '21 September 2025').",
        ));
    }
}

pub fn hyphen_spacing(doc: &dyn DocumentView, findings: &mut Vec<Finding>) {
    if patterns::spaced_hyphen().is_match(doc.extracted_text()) {
        findings.push(Finding::style(
            "Hyphen used where em dash may be appropriate.",
        ));
    }
}

pub fn slash_usage(doc: &dyn DocumentView, findings: &mut Vec<Finding>) {
    if doc.extracted_text().contains('/') {
        findings.push(Finding::style("Slash '/' found in text."));
    }
}

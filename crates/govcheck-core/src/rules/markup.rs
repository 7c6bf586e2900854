//! Rule evaluation for HTML documents

use scraper::ElementRef;

use crate::finding::Finding;
use crate::markup::{element_text, stripped_text, MarkupDocument};
use crate::patterns;
use crate::rules::text;
use crate::view::DocumentView;

const EMPHASIS_TAGS: [&str; 4] = ["b", "strong", "i", "em"];
const TITLE_TAGS: [&str; 3] = ["h1", "h2", "h3"];

/// Run every markup check in order and collect the findings
pub fn evaluate(doc: &MarkupDocument) -> Vec<Finding> {
    let mut findings = Vec::new();

    bullet_items(doc, &mut findings);
    list_lead_ins(doc, &mut findings);
    text::forbidden_please(doc, &mut findings);
    text::negative_contractions(doc, &mut findings);
    text::directional_words(doc, &mut findings);
    text::long_sentences(doc, &mut findings);
    link_quality(doc, &mut findings);
    image_alt_text(doc, &mut findings);
    empty_table_cells(doc, &mut findings);
    emphasis(doc, &mut findings);
    text::acronyms(doc, &mut findings);
    text::date_presence(doc, &mut findings);
    text::hyphen_spacing(doc, &mut findings);
    text::slash_usage(doc, &mut findings);
    links_in_tables(doc, &mut findings);
    title_language(doc, &mut findings);

    findings
}

fn bullet_items(doc: &MarkupDocument, findings: &mut Vec<Finding>) {
    for li in doc.select(&["li"]) {
        text::bullet_text(&element_text(&li), findings);
    }
}

fn list_lead_ins(doc: &MarkupDocument, findings: &mut Vec<Finding>) {
    for ul in doc.select(&["ul"]) {
        let has_lead_in = doc
            .preceding_text(&ul)
            .is_some_and(|prev| prev.trim().ends_with(':'));
        if !has_lead_in {
            findings.push(Finding::bullet("List may be missing a lead-in sentence."));
        }
    }
}

fn link_quality(doc: &MarkupDocument, findings: &mut Vec<Finding>) {
    for a in doc.select(&["a"]) {
        let text = element_text(&a);
        let link_text = text.trim();

        if link_text.split_whitespace().count() == 1 {
            findings.push(Finding::link(format!(
                "Link text is only one word: '{}'",
                link_text
            )));
        }
        if !patterns::has_active_verb(link_text) {
            findings.push(Finding::link(format!(
                "Link text may not be descriptive or active: '{}'",
                link_text
            )));
        }
    }
}

fn image_alt_text(doc: &MarkupDocument, findings: &mut Vec<Finding>) {
    let body = doc.extracted_text();

    for img in doc.select(&["img"]) {
        match img.value().attr("alt") {
            None | Some("") => {
                findings.push(Finding::image("Image found without alt text."));
            }
            Some(alt) if !body.contains(alt) => {
                findings.push(Finding::image(format!(
                    "Alt text not described in body: '{}'",
                    alt
                )));
            }
            Some(_) => {}
        }
    }
}

fn empty_table_cells(doc: &MarkupDocument, findings: &mut Vec<Finding>) {
    for td in doc.select(&["td"]) {
        if stripped_text(&td).is_empty() {
            findings.push(Finding::table(
                "Empty table cell found. Should be marked as 'no data' or 'not applicable'.",
            ));
        }
    }
}

/// Every bold or italic element, reported unconditionally
fn emphasis(doc: &MarkupDocument, findings: &mut Vec<Finding>) {
    for el in doc.select(&EMPHASIS_TAGS) {
        findings.push(Finding::format(format!(
            "Use of bold/italic text: '{}'",
            stripped_text(&el)
        )));
    }
}

fn links_in_tables(doc: &MarkupDocument, findings: &mut Vec<Finding>) {
    for table in doc.select(&["table"]) {
        let has_link = table
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .any(|el| el.value().name() == "a");
        if has_link {
            findings.push(Finding::style("Link found inside a table."));
        }
    }
}

fn title_language(doc: &MarkupDocument, findings: &mut Vec<Finding>) {
    for title in doc.select(&TITLE_TAGS) {
        if !patterns::has_active_verb(&element_text(&title)) {
            findings.push(Finding::style(format!(
                "Title may not use active language: '{}'",
                stripped_text(&title)
            )));
        }
    }
}

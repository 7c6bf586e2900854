//! Word lists and compiled text patterns shared by both evaluators

use std::sync::OnceLock;

use regex::Regex;

/// Verbs that make link and heading text actionable
pub const ACTIVE_VERBS: [&str; 12] = [
    "work", "read", "learn", "report", "check", "view", "explore", "download", "submit", "apply",
    "contact", "visit",
];

/// Negative contractions, spelt with the typographic apostrophe (U+2019)
pub const NEGATIVE_CONTRACTIONS: [&str; 18] = [
    "don\u{2019}t",
    "doesn\u{2019}t",
    "didn\u{2019}t",
    "can\u{2019}t",
    "won\u{2019}t",
    "wouldn\u{2019}t",
    "shouldn\u{2019}t",
    "couldn\u{2019}t",
    "isn\u{2019}t",
    "aren\u{2019}t",
    "wasn\u{2019}t",
    "weren\u{2019}t",
    "haven\u{2019}t",
    "hasn\u{2019}t",
    "hadn\u{2019}t",
    "mustn\u{2019}t",
    "mightn\u{2019}t",
    "needn\u{2019}t",
];

/// Words that point at page layout the reader may not see
pub const DIRECTIONAL_WORDS: [&str; 2] = ["above", "below"];

/// Full English month names, as used in GOV.UK dates
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Sentences longer than this many words are reported
pub const MAX_SENTENCE_WORDS: usize = 26;

pub fn please() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\bplease\b").unwrap())
}

pub fn negative_contraction() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(r"(?i)\b(?:{})\b", NEGATIVE_CONTRACTIONS.join("|"))).unwrap()
    })
}

/// Case-insensitive whole-word pattern for each of [`DIRECTIONAL_WORDS`]
pub fn directional_words() -> &'static [(&'static str, Regex)] {
    static RE: OnceLock<Vec<(&'static str, Regex)>> = OnceLock::new();
    RE.get_or_init(|| {
        DIRECTIONAL_WORDS
            .iter()
            .map(|word| (*word, Regex::new(&format!(r"(?i)\b{}\b", word)).unwrap()))
            .collect()
    })
}

/// Terminal punctuation followed by the whitespace that ends a sentence
pub fn sentence_boundary() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[.!?]\s+").unwrap())
}

pub fn active_verb() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!(r"(?i)\b(?:{})\b", ACTIVE_VERBS.join("|"))).unwrap())
}

pub fn acronym() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b[A-Z]{2,}\b").unwrap())
}

/// A date such as "21 September 2025"
pub fn govuk_date() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!(r"\b\d{{1,2}} (?:{}) \d{{4}}\b", MONTHS.join("|"))).unwrap())
}

/// A hyphen with whitespace on both sides
pub fn spaced_hyphen() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s-\s").unwrap())
}

/// Check if text contains one of [`ACTIVE_VERBS`] as a whole word
pub fn has_active_verb(text: &str) -> bool {
    active_verb().is_match(text)
}

/// Split text into sentences after `.`, `!` or `?` followed by whitespace
///
/// The punctuation stays with its sentence; the whitespace is dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in sentence_boundary().find_iter(text) {
        // Terminal punctuation is a single ASCII byte
        sentences.push(&text[start..m.start() + 1]);
        start = m.end();
    }
    sentences.push(&text[start..]);

    sentences
}

/// Check if `acronym` appears at a word start, followed by a space and a
/// non-empty parenthetical, anywhere in `text`
pub fn has_expansion(text: &str, acronym: &str) -> bool {
    let needle = format!("{} (", acronym);

    text.match_indices(&needle).any(|(idx, _)| {
        let at_word_start = text[..idx].chars().next_back().map_or(true, |c| !is_word_char(c));
        let rest = &text[idx + needle.len()..];
        at_word_start && rest.find(')').is_some_and(|close| close > 0)
    })
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

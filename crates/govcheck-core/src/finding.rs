//! Findings reported by the rule evaluator
//!
//! A finding pairs a fixed category with a human-readable message. The
//! message carries the offending snippet when a rule has one to show.

use std::fmt;

/// Category of a style guide finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// List item formatting and lead-in sentences
    Bullet,
    /// Word choice and sentence length
    Language,
    /// Link text quality
    Link,
    /// Image alt text
    Image,
    /// Table cell completeness
    Table,
    /// Bold and italic emphasis
    Format,
    /// Acronym expansion
    Acronym,
    /// Dates, punctuation and page structure
    Style,
}

impl Category {
    /// The label printed before the message
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Bullet => "BULLET",
            Category::Language => "LANGUAGE",
            Category::Link => "LINK",
            Category::Image => "IMAGE",
            Category::Table => "TABLE",
            Category::Format => "FORMAT",
            Category::Acronym => "ACRONYM",
            Category::Style => "STYLE",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single reported style or content violation
///
/// # Example
///
/// ```
/// use govcheck_core::{Category, Finding};
///
/// let finding = Finding::language("Found instance of the word 'please'.");
/// assert_eq!(finding.category(), Category::Language);
/// assert_eq!(
///     finding.to_string(),
///     "LANGUAGE: Found instance of the word 'please'."
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    category: Category,
    message: String,
}

impl Finding {
    /// Create a finding in the given category
    pub fn new(category: Category, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
        }
    }

    pub fn bullet(message: impl Into<String>) -> Self {
        Self::new(Category::Bullet, message)
    }

    pub fn language(message: impl Into<String>) -> Self {
        Self::new(Category::Language, message)
    }

    pub fn link(message: impl Into<String>) -> Self {
        Self::new(Category::Link, message)
    }

    pub fn image(message: impl Into<String>) -> Self {
        Self::new(Category::Image, message)
    }

    pub fn table(message: impl Into<String>) -> Self {
        Self::new(Category::Table, message)
    }

    pub fn format(message: impl Into<String>) -> Self {
        Self::new(Category::Format, message)
    }

    pub fn acronym(message: impl Into<String>) -> Self {
        Self::new(Category::Acronym, message)
    }

    pub fn style(message: impl Into<String>) -> Self {
        Self::new(Category::Style, message)
    }

    /// The finding's category
    pub fn category(&self) -> Category {
        self.category
    }

    /// The message, without the category label
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.message)
    }
}

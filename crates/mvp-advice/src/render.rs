//! Display view of classified advice.
//!
//! Timing and delay render as a single paragraph; warnings and replacements
//! render as item lists. Every region falls back to a fixed placeholder.

use serde::Serialize;

use crate::classifier::{Category, ClassifiedAdvice};

pub const TIMING_PLACEHOLDER: &str = "No specific timing instructions available";
pub const WARNINGS_PLACEHOLDER: &str = "No food warnings identified";
pub const DELAY_PLACEHOLDER: &str = "No specific delay instructions available";
pub const REPLACEMENTS_PLACEHOLDER: &str = "No replacements needed";

/// Separator for paragraph-style regions.
const PARAGRAPH_JOIN: &str = " ";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum SectionBody {
    Text(String),
    Items(Vec<String>),
    Placeholder(&'static str),
}

impl SectionBody {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub category: Category,
    pub title: &'static str,
    pub body: SectionBody,
}

/// The four advice regions, in display order, plus the medication heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdviceView {
    pub medication: Option<String>,
    pub sections: Vec<Section>,
}

impl AdviceView {
    pub fn from_advice(advice: &ClassifiedAdvice) -> Self {
        let sections = Category::ALL
            .iter()
            .map(|&category| Section {
                category,
                title: title(category),
                body: body(category, advice.lines(category)),
            })
            .collect();
        Self {
            medication: None,
            sections,
        }
    }

    pub fn with_medication(mut self, medication: impl Into<String>) -> Self {
        self.medication = Some(medication.into());
        self
    }

    pub fn section(&self, category: Category) -> Option<&Section> {
        self.sections.iter().find(|s| s.category == category)
    }
}

pub fn title(category: Category) -> &'static str {
    match category {
        Category::Timing => "Timing",
        Category::Warnings => "Food Warnings",
        Category::Delay => "Delay",
        Category::Replacements => "Replacements",
    }
}

pub fn placeholder(category: Category) -> &'static str {
    match category {
        Category::Timing => TIMING_PLACEHOLDER,
        Category::Warnings => WARNINGS_PLACEHOLDER,
        Category::Delay => DELAY_PLACEHOLDER,
        Category::Replacements => REPLACEMENTS_PLACEHOLDER,
    }
}

fn body(category: Category, lines: &[String]) -> SectionBody {
    if lines.is_empty() {
        return SectionBody::Placeholder(placeholder(category));
    }
    match category {
        Category::Timing | Category::Delay => SectionBody::Text(lines.join(PARAGRAPH_JOIN)),
        Category::Warnings | Category::Replacements => SectionBody::Items(lines.to_vec()),
    }
}

//! Keyword classification of generated advice.
//!
//! Splits advice text into lines, strips the bullet glyph, drops boilerplate
//! closers, and assigns each remaining line to exactly one display category
//! by ordered substring rules. Assignment depends only on the line itself.

use serde::Serialize;
use tracing::debug;

use crate::keywords::{
    BOILERPLATE_PHRASES, BULLET, REPLACEMENT, TEMPORAL, TEMPORAL_REPLACEMENT, TIMING, WARNING,
    contains_any,
};

const BOM: char = '\u{FEFF}';

// ── Types ──

/// Display bucket for a single advice line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Timing,
    Warnings,
    Delay,
    Replacements,
}

impl Category {
    /// Display order.
    pub const ALL: [Category; 4] = [
        Self::Timing,
        Self::Warnings,
        Self::Delay,
        Self::Replacements,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Timing => "timing",
            Self::Warnings => "warnings",
            Self::Delay => "delay",
            Self::Replacements => "replacements",
        }
    }
}

/// Advice lines grouped by category, each list in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClassifiedAdvice {
    pub timing: Vec<String>,
    pub warnings: Vec<String>,
    pub delay: Vec<String>,
    pub replacements: Vec<String>,
    /// Non-blank input lines that were dropped: boilerplate closers and
    /// lines holding nothing but the bullet glyph.
    pub discarded: usize,
}

impl ClassifiedAdvice {
    pub fn lines(&self, category: Category) -> &[String] {
        match category {
            Category::Timing => &self.timing,
            Category::Warnings => &self.warnings,
            Category::Delay => &self.delay,
            Category::Replacements => &self.replacements,
        }
    }

    /// Total classified lines across all four categories.
    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|&c| self.lines(c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&mut self, category: Category, line: String) {
        match category {
            Category::Timing => self.timing.push(line),
            Category::Warnings => self.warnings.push(line),
            Category::Delay => self.delay.push(line),
            Category::Replacements => self.replacements.push(line),
        }
    }
}

// ── Classification ──

/// Classify raw advice text. Never fails; empty text yields four empty lists.
pub fn classify(raw: &str) -> ClassifiedAdvice {
    let mut advice = ClassifiedAdvice::default();

    for line in raw.lines() {
        if trim_line(line).is_empty() {
            continue;
        }

        let clean = strip_bullet(line);
        if clean.is_empty() || is_boilerplate(clean) {
            advice.discarded += 1;
            continue;
        }

        advice.push(categorize(clean), clean.to_string());
    }

    debug!(
        timing = advice.timing.len(),
        warnings = advice.warnings.len(),
        delay = advice.delay.len(),
        replacements = advice.replacements.len(),
        discarded = advice.discarded,
        "classified advice"
    );
    advice
}

/// Absent advice is treated as empty text.
pub fn classify_opt(raw: Option<&str>) -> ClassifiedAdvice {
    classify(raw.unwrap_or(""))
}

/// Assign a cleaned line to its category. First matching rule wins.
#[allow(clippy::if_same_then_else)]
pub fn categorize(line: &str) -> Category {
    let lower = line.to_lowercase();

    if contains_any(&lower, TEMPORAL) {
        if lower.contains(TEMPORAL_REPLACEMENT) {
            Category::Replacements
        } else {
            Category::Delay
        }
    } else if contains_any(&lower, WARNING) {
        Category::Warnings
    } else if contains_any(&lower, REPLACEMENT) {
        Category::Replacements
    } else if contains_any(&lower, TIMING) {
        Category::Timing
    } else {
        // Default bucket.
        Category::Timing
    }
}

/// Whether a line is one of the generator's closing phrases.
pub fn is_boilerplate(line: &str) -> bool {
    contains_any(&line.to_lowercase(), BOILERPLATE_PHRASES)
}

// ── Line cleanup ──

/// Strip one leading bullet glyph and the whitespace around it.
fn strip_bullet(line: &str) -> &str {
    let trimmed = trim_line(line);
    trim_line(trimmed.strip_prefix(BULLET).unwrap_or(trimmed))
}

/// Whitespace trim that also drops a byte-order mark.
fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == BOM)
}

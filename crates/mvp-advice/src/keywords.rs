//! Fixed keyword tables for advice classification.
//!
//! All entries are lowercase; lines are lowercased before matching.

/// Glyph the plan generator prefixes each advice line with.
pub const BULLET: char = '•';

/// Closing phrases the generator appends. Lines containing either are never shown.
pub const BOILERPLATE_PHRASES: &[&str] = &["stay safe", "mvp has your back"];

/// Sequencing language. Checked before every other group.
pub const TEMPORAL: &[&str] = &["wait", "hour", "before", "after"];

pub const WARNING: &[&str] = &["avoid", "limit", "warning"];

pub const REPLACEMENT: &[&str] = &["replace", "alternative", "instead"];

/// Marks a temporal line as a replacement rather than a delay.
pub const TEMPORAL_REPLACEMENT: &str = "replace";

pub const TIMING: &[&str] = &["take", "timing", "best time"];

/// Whether `lower` contains any keyword from `group`.
pub fn contains_any(lower: &str, group: &[&str]) -> bool {
    group.iter().any(|k| lower.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_lowercase() {
        for group in [BOILERPLATE_PHRASES, TEMPORAL, WARNING, REPLACEMENT, TIMING] {
            for k in group {
                assert_eq!(*k, k.to_lowercase());
            }
        }
    }

    #[test]
    fn contains_any_is_substring_match() {
        assert!(contains_any("wait two hours", TEMPORAL));
        assert!(contains_any("afterwards", TEMPORAL));
        assert!(!contains_any("grapefruit", TEMPORAL));
        assert!(!contains_any("", WARNING));
    }
}

//! Dashboard cards built from aggregate feedback statistics.
//!
//! Sentiment is collapsed to three display buckets: helpful (positive and
//! very positive), confusing (negative and very negative), and neutral.
//! Source shares cover the plan-entry channels only (ocr, manual, api).

use mvp_core::{DashboardStats, MedicationStats, Sentiment, Source};
use serde::Serialize;

pub const EMPTY_MESSAGE: &str = "Add your first medication to see feedback statistics";

/// Channels shown in the source distribution, in display order.
const SHARE_SOURCES: [Source; 3] = [Source::Ocr, Source::Manual, Source::Api];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceShare {
    pub source: Source,
    pub label: &'static str,
    pub percent: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardCard {
    pub medication: String,
    pub dose: String,
    pub helpful: u64,
    pub confusing: u64,
    pub neutral: u64,
    pub total_feedback: u64,
    pub helpful_percent: u32,
    /// Empty when no ocr/manual/api feedback has been recorded.
    pub sources: Vec<SourceShare>,
}

impl DashboardCard {
    pub fn new(med_key: &str, stats: &MedicationStats) -> Self {
        let (medication, dose) = split_med_key(med_key);

        let helpful = stats.count(Sentiment::Positive) + stats.count(Sentiment::VeryPositive);
        let confusing = stats.count(Sentiment::Negative) + stats.count(Sentiment::VeryNegative);
        let neutral = stats.count(Sentiment::Neutral);
        let total_feedback = helpful + confusing + neutral;

        Self {
            medication,
            dose,
            helpful,
            confusing,
            neutral,
            total_feedback,
            helpful_percent: percent(helpful, total_feedback),
            sources: source_shares(stats),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum DashboardView {
    Empty { message: &'static str },
    Cards { cards: Vec<DashboardCard> },
}

impl DashboardView {
    pub fn from_stats(stats: &DashboardStats) -> Self {
        if stats.is_empty() {
            return Self::Empty {
                message: EMPTY_MESSAGE,
            };
        }
        let cards = stats
            .iter()
            .map(|(key, s)| DashboardCard::new(key, s))
            .collect();
        Self::Cards { cards }
    }
}

/// Split `"metformin extended 500mg"` into `("metformin extended", "500mg")`.
///
/// A key with a single token is all name and the dose stays empty; the token
/// is not repeated as the dose.
fn split_med_key(key: &str) -> (String, String) {
    let key = key.trim();
    match key.rsplit_once(' ') {
        Some((name, dose)) if !name.trim().is_empty() => {
            (name.trim_end().to_string(), dose.to_string())
        }
        _ => (key.to_string(), String::new()),
    }
}

fn source_shares(stats: &MedicationStats) -> Vec<SourceShare> {
    let total: u64 = SHARE_SOURCES
        .iter()
        .map(|s| stats.source_count(s.as_str()))
        .sum();
    if total == 0 {
        return Vec::new();
    }
    SHARE_SOURCES
        .iter()
        .map(|&source| SourceShare {
            source,
            label: source_label(source),
            percent: percent(stats.source_count(source.as_str()), total),
        })
        .collect()
}

fn source_label(source: Source) -> &'static str {
    match source {
        Source::Ocr => "OCR",
        Source::Manual => "Manual",
        Source::Api => "API",
        Source::Web => "Web",
    }
}

/// Rounded half-up percentage; 0 when the denominator is 0.
fn percent(part: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    (part as f64 / total as f64 * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn stats(entries: &[(&str, MedicationStats)]) -> DashboardStats {
        DashboardStats(
            entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        )
    }

    fn sources(pairs: &[(&str, u64)]) -> BTreeMap<String, u64> {
        pairs.iter().map(|&(k, v)| (k.to_string(), v)).collect()
    }

    #[test]
    fn empty_stats_show_empty_state() {
        let view = DashboardView::from_stats(&DashboardStats::default());
        assert_eq!(
            view,
            DashboardView::Empty {
                message: EMPTY_MESSAGE
            }
        );
    }

    #[test]
    fn sentiment_collapses_to_three_buckets() {
        let s = MedicationStats {
            very_negative: 1,
            negative: 1,
            neutral: 1,
            positive: 2,
            very_positive: 1,
            ..Default::default()
        };
        let card = DashboardCard::new("metformin 500mg", &s);
        assert_eq!(card.medication, "metformin");
        assert_eq!(card.dose, "500mg");
        assert_eq!(card.helpful, 3);
        assert_eq!(card.confusing, 2);
        assert_eq!(card.neutral, 1);
        assert_eq!(card.total_feedback, 6);
        assert_eq!(card.helpful_percent, 50);
    }

    #[test]
    fn helpful_percent_rounds_half_up() {
        // 1/8 = 12.5%
        let s = MedicationStats {
            positive: 1,
            neutral: 7,
            ..Default::default()
        };
        assert_eq!(DashboardCard::new("a 1mg", &s).helpful_percent, 13);

        // 2/3 = 66.67%
        let s = MedicationStats {
            very_positive: 2,
            negative: 1,
            ..Default::default()
        };
        assert_eq!(DashboardCard::new("a 1mg", &s).helpful_percent, 67);
    }

    #[test]
    fn no_feedback_is_zero_percent() {
        let card = DashboardCard::new("a 1mg", &MedicationStats::default());
        assert_eq!(card.total_feedback, 0);
        assert_eq!(card.helpful_percent, 0);
    }

    #[test]
    fn multi_word_names_and_single_token_keys() {
        let s = MedicationStats::default();
        let card = DashboardCard::new("vitamin d3 1000iu", &s);
        assert_eq!(card.medication, "vitamin d3");
        assert_eq!(card.dose, "1000iu");

        let card = DashboardCard::new("aspirin", &s);
        assert_eq!(card.medication, "aspirin");
        assert_eq!(card.dose, "");
    }

    #[test]
    fn source_shares_ignore_web_feedback() {
        let s = MedicationStats {
            positive: 4,
            sources: sources(&[("ocr", 1), ("manual", 2), ("web", 10)]),
            ..Default::default()
        };
        let card = DashboardCard::new("a 1mg", &s);
        let shares: Vec<(&str, u32)> = card.sources.iter().map(|s| (s.label, s.percent)).collect();
        assert_eq!(shares, vec![("OCR", 33), ("Manual", 67), ("API", 0)]);
    }

    #[test]
    fn source_shares_omitted_without_plan_channels() {
        let s = MedicationStats {
            neutral: 1,
            sources: sources(&[("web", 3)]),
            ..Default::default()
        };
        assert!(DashboardCard::new("a 1mg", &s).sources.is_empty());
    }

    #[test]
    fn cards_follow_key_order() {
        let view = DashboardView::from_stats(&stats(&[
            ("warfarin 5mg", MedicationStats::default()),
            ("aspirin 81mg", MedicationStats::default()),
        ]));
        let DashboardView::Cards { cards } = view else {
            panic!("expected cards");
        };
        let names: Vec<&str> = cards.iter().map(|c| c.medication.as_str()).collect();
        assert_eq!(names, vec!["aspirin", "warfarin"]);
    }

    #[test]
    fn json_shape() {
        let view = DashboardView::from_stats(&DashboardStats::default());
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["state"], "empty");
        assert_eq!(json["message"], EMPTY_MESSAGE);
    }
}

//! Aggregate feedback statistics as reported by the service.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::plan::Sentiment;

/// Per-medication sentiment and source counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedicationStats {
    pub very_negative: u64,
    pub negative: u64,
    pub neutral: u64,
    pub positive: u64,
    pub very_positive: u64,
    /// source label → feedback count
    pub sources: BTreeMap<String, u64>,
}

impl MedicationStats {
    pub fn count(&self, sentiment: Sentiment) -> u64 {
        match sentiment {
            Sentiment::VeryNegative => self.very_negative,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
            Sentiment::Positive => self.positive,
            Sentiment::VeryPositive => self.very_positive,
        }
    }

    pub fn source_count(&self, source: &str) -> u64 {
        self.sources.get(source).copied().unwrap_or(0)
    }
}

/// Stats keyed by med key, in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DashboardStats(pub BTreeMap<String, MedicationStats>);

impl DashboardStats {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MedicationStats)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

//! Request and response payloads exchanged with the safety-plan service.

use serde::{Deserialize, Serialize};

use crate::medication::{MedicationForm, Source};

/// Request body for plan generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub name: String,
    pub dose: String,
    pub frequency: String,
    #[serde(default)]
    pub source: Source,
}

impl From<&MedicationForm> for PlanRequest {
    fn from(form: &MedicationForm) -> Self {
        Self {
            name: form.name.clone(),
            dose: form.dose.clone(),
            frequency: form.frequency.clone(),
            source: form.source,
        }
    }
}

/// Plan generation result.
///
/// `advice` is freeform newline-delimited text; the service may omit it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanResponse {
    #[serde(default)]
    pub med: String,
    #[serde(default)]
    pub advice: Option<String>,
    #[serde(default)]
    pub source: Source,
}

impl PlanResponse {
    /// Advice text, empty when absent.
    pub fn advice_text(&self) -> &str {
        self.advice.as_deref().unwrap_or("")
    }
}

/// Request body for feedback submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackRequest {
    pub med: String,
    pub feedback: String,
    #[serde(default = "feedback_source")]
    pub source: Source,
}

fn feedback_source() -> Source {
    Source::Web
}

/// Five-level sentiment assigned to feedback by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sentiment {
    VeryNegative,
    Negative,
    Neutral,
    Positive,
    VeryPositive,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VeryNegative => "very_negative",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
            Self::Positive => "positive",
            Self::VeryPositive => "very_positive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackResponse {
    pub sentiment: Sentiment,
}

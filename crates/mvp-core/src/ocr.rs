//! Image-recognition response payloads.

use serde::{Deserialize, Serialize};

use crate::plan::PlanResponse;

/// Fields recognized on a medication label. Empty when nothing matched.
///
/// Older recognizers report the name under `drug`; [`OcrParsed::recognized_name`]
/// falls back to it when `name` is blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OcrParsed {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub drug: String,
    #[serde(default)]
    pub dose: String,
    #[serde(default)]
    pub frequency: Option<String>,
}

impl OcrParsed {
    pub fn recognized_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.drug
        } else {
            &self.name
        }
    }

    /// Whether recognition produced a usable medication name.
    pub fn is_match(&self) -> bool {
        !self.recognized_name().trim().is_empty()
    }

    /// Frequency to use: the caller's choice, then the recognized one, then
    /// `default`. Blank values are skipped.
    pub fn frequency_or<'a>(&'a self, chosen: Option<&'a str>, default: &'a str) -> &'a str {
        chosen
            .into_iter()
            .chain(self.frequency.as_deref())
            .map(str::trim)
            .find(|f| !f.is_empty())
            .unwrap_or(default)
    }
}

/// Response from the recognition endpoint. Some deployments attach a plan
/// generated from the recognized fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OcrResponse {
    #[serde(default)]
    pub parsed: OcrParsed,
    #[serde(default)]
    pub plan: Option<PlanResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fields_without_plan() {
        let json = r#"{ "parsed": { "name": "Metformin", "dose": "500mg" } }"#;
        let resp: OcrResponse = serde_json::from_str(json).unwrap();
        assert!(resp.parsed.is_match());
        assert_eq!(resp.parsed.dose, "500mg");
        assert!(resp.plan.is_none());
    }

    #[test]
    fn empty_recognition_is_not_a_match() {
        let json = r#"{ "parsed": { "name": "", "dose": "" } }"#;
        let resp: OcrResponse = serde_json::from_str(json).unwrap();
        assert!(!resp.parsed.is_match());
    }

    #[test]
    fn drug_key_and_frequency_are_read() {
        let json = r#"{ "parsed": { "drug": "Warfarin", "dose": "5mg", "frequency": "once daily" } }"#;
        let resp: OcrResponse = serde_json::from_str(json).unwrap();
        assert!(resp.parsed.is_match());
        assert_eq!(resp.parsed.recognized_name(), "Warfarin");
        assert_eq!(resp.parsed.frequency.as_deref(), Some("once daily"));
    }

    #[test]
    fn name_wins_over_drug_unless_blank() {
        let json = r#"{ "parsed": { "name": "Metformin", "drug": "Warfarin" } }"#;
        let resp: OcrResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.parsed.recognized_name(), "Metformin");

        let json = r#"{ "parsed": { "name": " ", "drug": "Warfarin" } }"#;
        let resp: OcrResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.parsed.recognized_name(), "Warfarin");
    }

    #[test]
    fn frequency_precedence() {
        let parsed = OcrParsed {
            frequency: Some("once daily".into()),
            ..Default::default()
        };
        assert_eq!(parsed.frequency_or(Some("twice daily"), "as-needed"), "twice daily");
        assert_eq!(parsed.frequency_or(Some("  "), "as-needed"), "once daily");
        assert_eq!(parsed.frequency_or(None, "as-needed"), "once daily");
        assert_eq!(OcrParsed::default().frequency_or(None, "as-needed"), "as-needed");
    }

    #[test]
    fn parses_attached_plan() {
        let json = r#"{
            "parsed": { "name": "Warfarin", "dose": "5mg" },
            "plan": { "med": "warfarin 5mg", "advice": "• Avoid kale", "source": "ocr" }
        }"#;
        let resp: OcrResponse = serde_json::from_str(json).unwrap();
        let plan = resp.plan.unwrap();
        assert_eq!(plan.med, "warfarin 5mg");
        assert_eq!(plan.advice_text(), "• Avoid kale");
    }
}

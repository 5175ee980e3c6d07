//! Medication form input, as gathered by manual entry or image recognition.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::CoreError;
use crate::ocr::OcrParsed;

/// Frequency used when image recognition supplies none.
pub const DEFAULT_OCR_FREQUENCY: &str = "as-needed";

/// Where a plan request or feedback entry originated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    #[default]
    Manual,
    Ocr,
    Api,
    Web,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Manual => "manual",
            Self::Ocr => "ocr",
            Self::Api => "api",
            Self::Web => "web",
        }
    }
}

/// A medication descriptor. Fields are trimmed; only [`MedicationForm::recognized`]
/// may leave them blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationForm {
    pub name: String,
    pub dose: String,
    pub frequency: String,
    pub source: Source,
}

impl MedicationForm {
    /// Validate raw form input. Fields are checked in order name, dose, frequency.
    pub fn new(name: &str, dose: &str, frequency: &str, source: Source) -> Result<Self, CoreError> {
        let name = required("name", name)?;
        let dose = required("dose", dose)?;
        let frequency = required("frequency", frequency)?;
        Ok(Self {
            name,
            dose,
            frequency,
            source,
        })
    }

    /// Build a validated form from recognized label fields.
    ///
    /// Frequency is the caller's choice, else the recognized one, else
    /// [`DEFAULT_OCR_FREQUENCY`].
    pub fn from_ocr(parsed: &OcrParsed, frequency: Option<&str>) -> Result<Self, CoreError> {
        Self::new(
            parsed.recognized_name(),
            &parsed.dose,
            parsed.frequency_or(frequency, DEFAULT_OCR_FREQUENCY),
            Source::Ocr,
        )
    }

    /// Describe recognized fields as-is, trimmed but not validated.
    ///
    /// Used to label a plan the service already produced, where blank
    /// fields are no reason to discard the advice.
    pub fn recognized(parsed: &OcrParsed, frequency: Option<&str>) -> Self {
        Self {
            name: parsed.recognized_name().trim().to_string(),
            dose: parsed.dose.trim().to_string(),
            frequency: parsed
                .frequency_or(frequency, DEFAULT_OCR_FREQUENCY)
                .to_string(),
            source: Source::Ocr,
        }
    }

    /// Key used by the service to group plans and feedback.
    pub fn med_key(&self) -> String {
        med_key(&self.name, &self.dose)
    }

    /// Display string, e.g. `Metformin 500mg, twice daily`.
    pub fn display(&self) -> String {
        format!("{} {}, {}", self.name, self.dose, self.frequency)
    }
}

/// `"{name} {dose}"`, lowercased.
pub fn med_key(name: &str, dose: &str) -> String {
    format!("{name} {dose}").to_lowercase()
}

fn required(field: &'static str, value: &str) -> Result<String, CoreError> {
    let value = value.trim();
    if value.is_empty() {
        warn!(field, "medication form field is blank");
        return Err(CoreError::MissingField(field));
    }
    Ok(value.to_string())
}

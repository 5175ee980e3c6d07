//! Session-scoped record of the medication whose advice is on screen.
//!
//! Owned by the caller and passed explicitly to whatever submits feedback.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::CoreError;
use crate::medication::MedicationForm;
use crate::plan::PlanResponse;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentMedication {
    /// Key sent back with feedback.
    pub med: String,
    pub name: String,
    pub dose: String,
    pub frequency: String,
    pub selected_at: DateTime<Utc>,
}

impl CurrentMedication {
    /// Prefers the service's key; falls back to `"{name} {dose}"` as entered.
    pub fn from_plan(form: &MedicationForm, response: &PlanResponse) -> Self {
        let med = match response.med.trim() {
            "" => format!("{} {}", form.name, form.dose),
            key => key.to_string(),
        };
        Self {
            med,
            name: form.name.clone(),
            dose: form.dose.clone(),
            frequency: form.frequency.clone(),
            selected_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    current: Option<CurrentMedication>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current medication.
    pub fn select(&mut self, medication: CurrentMedication) {
        debug!(med = %medication.med, "session medication selected");
        self.current = Some(medication);
    }

    pub fn current(&self) -> Option<&CurrentMedication> {
        self.current.as_ref()
    }

    pub fn require_current(&self) -> Result<&CurrentMedication, CoreError> {
        self.current.as_ref().ok_or(CoreError::NoMedicationSelected)
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::medication::Source;

    fn form() -> MedicationForm {
        MedicationForm::new("Metformin", "500mg", "twice daily", Source::Manual).unwrap()
    }

    #[test]
    fn empty_session_requires_selection() {
        let session = SessionContext::new();
        assert!(session.current().is_none());
        assert!(matches!(
            session.require_current(),
            Err(CoreError::NoMedicationSelected)
        ));
    }

    #[test]
    fn select_prefers_service_key() {
        let response = PlanResponse {
            med: "metformin 500mg".into(),
            ..Default::default()
        };
        let mut session = SessionContext::new();
        session.select(CurrentMedication::from_plan(&form(), &response));

        let current = session.require_current().unwrap();
        assert_eq!(current.med, "metformin 500mg");
        assert_eq!(current.name, "Metformin");
        assert_eq!(current.frequency, "twice daily");
    }

    #[test]
    fn blank_service_key_falls_back_to_form() {
        let current = CurrentMedication::from_plan(&form(), &PlanResponse::default());
        assert_eq!(current.med, "Metformin 500mg");
    }

    #[test]
    fn select_replaces_and_clear_resets() {
        let mut session = SessionContext::new();
        let first = PlanResponse {
            med: "a 1mg".into(),
            ..Default::default()
        };
        let second = PlanResponse {
            med: "b 2mg".into(),
            ..Default::default()
        };
        session.select(CurrentMedication::from_plan(&form(), &first));
        session.select(CurrentMedication::from_plan(&form(), &second));
        assert_eq!(session.current().unwrap().med, "b 2mg");

        session.clear();
        assert!(session.current().is_none());
    }
}

//! Plan and feedback workflows.
//!
//! The controllers validate input before touching the service, and thread the
//! caller's [`SessionContext`] explicitly: generating a plan selects the
//! medication, submitting feedback reads it back.

use mvp_core::{
    CoreError, CurrentMedication, FeedbackRequest, FeedbackResponse, MedicationForm, OcrResponse,
    PlanRequest, PlanResponse, PlanService, SessionContext, Source,
};
use tracing::{info, warn};

use crate::classifier::{ClassifiedAdvice, classify};
use crate::render::AdviceView;

/// Everything produced by one successful plan request.
#[derive(Debug, Clone)]
pub struct PlanOutcome {
    pub form: MedicationForm,
    pub response: PlanResponse,
    pub advice: ClassifiedAdvice,
    pub view: AdviceView,
}

pub struct PlanController<'a, S: PlanService> {
    service: &'a S,
}

impl<'a, S: PlanService> PlanController<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    /// Manual entry: validate the raw fields, then generate.
    pub fn submit(
        &self,
        session: &mut SessionContext,
        name: &str,
        dose: &str,
        frequency: &str,
    ) -> Result<PlanOutcome, CoreError> {
        let form = MedicationForm::new(name, dose, frequency, Source::Manual)?;
        self.generate(session, form)
    }

    pub fn generate(
        &self,
        session: &mut SessionContext,
        form: MedicationForm,
    ) -> Result<PlanOutcome, CoreError> {
        info!(med = %form.med_key(), source = form.source.as_str(), "requesting safety plan");
        let response = self.service.generate_plan(&PlanRequest::from(&form))?;
        Ok(present(session, form, response))
    }

    /// Image-recognition path. A plan already attached to the recognition
    /// response is shown as-is; otherwise one is generated from the fields.
    pub fn from_ocr(
        &self,
        session: &mut SessionContext,
        ocr: &OcrResponse,
        frequency: Option<&str>,
    ) -> Result<PlanOutcome, CoreError> {
        if !ocr.parsed.is_match() {
            warn!("recognition returned no medication name");
        }
        match &ocr.plan {
            Some(plan) => {
                // The advice already exists; blank fields only affect the heading.
                let form = MedicationForm::recognized(&ocr.parsed, frequency);
                info!(med = %form.med_key(), "using plan attached to recognition result");
                Ok(present(session, form, plan.clone()))
            }
            None => {
                let form = MedicationForm::from_ocr(&ocr.parsed, frequency)?;
                self.generate(session, form)
            }
        }
    }
}

pub struct FeedbackController<'a, S: PlanService> {
    service: &'a S,
}

impl<'a, S: PlanService> FeedbackController<'a, S> {
    pub fn new(service: &'a S) -> Self {
        Self { service }
    }

    /// Submit feedback about the medication currently selected in `session`.
    pub fn submit(
        &self,
        session: &SessionContext,
        feedback: &str,
    ) -> Result<FeedbackResponse, CoreError> {
        let feedback = feedback.trim();
        if feedback.is_empty() {
            warn!("rejected empty feedback");
            return Err(CoreError::EmptyFeedback);
        }
        let current = session.require_current()?;

        let request = FeedbackRequest {
            med: current.med.clone(),
            feedback: feedback.to_string(),
            source: Source::Web,
        };
        let response = self.service.submit_feedback(&request)?;
        info!(med = %request.med, sentiment = response.sentiment.as_str(), "feedback submitted");
        Ok(response)
    }
}

fn present(session: &mut SessionContext, form: MedicationForm, response: PlanResponse) -> PlanOutcome {
    let advice = classify(response.advice_text());
    let view = AdviceView::from_advice(&advice).with_medication(form.display());
    session.select(CurrentMedication::from_plan(&form, &response));
    PlanOutcome {
        form,
        response,
        advice,
        view,
    }
}

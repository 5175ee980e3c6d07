use crate::ServiceError;
use crate::plan::{FeedbackRequest, FeedbackResponse, PlanRequest, PlanResponse};

/// The remote safety-plan service.
///
/// Implementations own the transport; the frontend core only sees payloads.
pub trait PlanService {
    fn generate_plan(&self, request: &PlanRequest) -> Result<PlanResponse, ServiceError>;

    fn submit_feedback(&self, request: &FeedbackRequest) -> Result<FeedbackResponse, ServiceError>;
}

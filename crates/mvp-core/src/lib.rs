//! Core types shared by the MVp frontend: medication forms, plan and feedback
//! payloads, dashboard statistics, and the session context.

mod error;
pub mod medication;
pub mod ocr;
pub mod plan;
pub mod service;
pub mod session;
pub mod stats;

pub use error::{CoreError, ServiceError};
pub use medication::{MedicationForm, Source, med_key};
pub use ocr::{OcrParsed, OcrResponse};
pub use plan::{FeedbackRequest, FeedbackResponse, PlanRequest, PlanResponse, Sentiment};
pub use service::PlanService;
pub use session::{CurrentMedication, SessionContext};
pub use stats::{DashboardStats, MedicationStats};

//! Advice layer: keyword classification of generated advice, display views,
//! and the form/feedback workflows that drive them.

pub mod classifier;
pub mod dashboard;
pub mod keywords;
pub mod render;
pub mod workflow;

pub use classifier::{Category, ClassifiedAdvice, categorize, classify, classify_opt};
pub use dashboard::{DashboardCard, DashboardView, SourceShare};
pub use render::{AdviceView, Section, SectionBody};
pub use workflow::{FeedbackController, PlanController, PlanOutcome};

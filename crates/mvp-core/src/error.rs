use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("feedback text is empty")]
    EmptyFeedback,

    #[error("no medication selected")]
    NoMedicationSelected,

    #[error("plan service error: {0}")]
    Service(#[from] ServiceError),
}

/// Failure reported by a [`PlanService`](crate::PlanService) implementation.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("service unavailable: {0}")]
    Unavailable(String),

    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

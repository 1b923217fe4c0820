// errors.rs
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or downstream layers (DB).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Database Error: {0}")]
    DbError(String),
    #[error("Internal Server Error")]
    InternalError,
}

impl From<rusqlite::Error> for ServerError {
    fn from(e: rusqlite::Error) -> Self {
        ServerError::DbError(e.to_string())
    }
}

/// Failures of a lead-capture submission. Validation variants are raised
/// before anything touches the database.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InquiryError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("please enter a valid email address")]
    InvalidEmail,
    #[error("could not save inquiry: {0}")]
    Persistence(String),
}

impl InquiryError {
    /// Text safe to show next to the form.
    pub fn user_message(&self) -> String {
        match self {
            InquiryError::Persistence(_) => {
                "Failed to submit inquiry. Please try again.".to_string()
            }
            other => other.to_string(),
        }
    }
}

use thiserror::Error;

use super::{
    models::StudentId,
    validation::FormErrors,
};

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid student form: {0}")]
    Validation(FormErrors),

    #[error("No student is being edited")]
    NoEditSession,

    #[error("Student {0} not found")]
    StudentNotFound(StudentId),

    #[error("Cannot add a student while student {0} is being edited")]
    EditInProgress(StudentId),

    #[error("No student ids left to assign")]
    IdsExhausted,
}

impl From<std::io::Error> for RosterError {
    fn from(error: std::io::Error) -> Self {
        RosterError::Io(Box::new(error))
    }
}

impl From<FormErrors> for RosterError {
    fn from(errors: FormErrors) -> Self {
        RosterError::Validation(errors)
    }
}

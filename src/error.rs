use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &str, message: &str) -> Self {
        Self { field: field.to_owned(), message: message.to_owned() }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Config error: {0}")]
    ConfigError(String),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid transition: {event} is not allowed while {state}")]
    InvalidTransition { state: String, event: String },
    #[error("Validation error: {0:?}")]
    ValidationError(Vec<FieldError>),
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
    #[error("Simulation error: {0}")]
    SimulationError(String),
}

impl AppError {
    pub fn invalid_transition(state: impl ToString, event: impl ToString) -> Self {
        AppError::InvalidTransition { state: state.to_string(), event: event.to_string() }
    }
}

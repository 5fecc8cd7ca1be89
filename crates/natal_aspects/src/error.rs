use thiserror::Error;

/// Errors raised by the aspect and pattern engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AspectError {
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
    #[error("Body '{body}' is missing required field '{field}'")]
    MissingField { body: String, field: String },
}

impl AspectError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        AspectError::InvalidInput {
            message: message.into(),
        }
    }

    pub(crate) fn missing(body: &str, field: &str) -> Self {
        AspectError::MissingField {
            body: body.to_string(),
            field: field.to_string(),
        }
    }
}

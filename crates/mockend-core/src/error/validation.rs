use super::Error;

/// A request value could not be cast to the declared field type.
#[derive(Debug)]
pub(super) struct ValidationError {
    field: Option<Box<str>>,
    message: Box<str>,
}

impl std::error::Error for ValidationError {}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.field {
            Some(field) => write!(f, "invalid value for field `{}`: {}", field, self.message),
            None => write!(f, "invalid request body: {}", self.message),
        }
    }
}

impl Error {
    /// Creates a validation error for a single field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Validation(ValidationError {
            field: Some(field.into().into()),
            message: message.into().into(),
        }))
    }

    /// Creates a validation error about the request body as a whole.
    pub fn invalid_body(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::Validation(ValidationError {
            field: None,
            message: message.into().into(),
        }))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::Validation(_))
    }
}

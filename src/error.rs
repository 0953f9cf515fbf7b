use crate::category::Category;
use crate::field::{MISSING_REQUIRED_FIELD, new_bad_request_field_value};

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("bad request: {source}")]
    BadRequest {
        #[source]
        source: BoxError,
    },

    #[error("validation error: {message}")]
    Validation { message: String },
}

impl Error {
    pub fn category(&self) -> Category {
        match self {
            Self::BadRequest { .. } => Category::BadRequest,
            Self::Validation { .. } => Category::Validation,
        }
    }
}

/// Marks `err` as a bad request.
///
/// The result classifies as [`Category::BadRequest`] and keeps `err` as its
/// source, so any category `err` already carries is still found by the
/// classifiers.
pub fn new_bad_request_error(err: impl Into<BoxError>) -> Error {
    let source = err.into();
    tracing::trace!(category = %Category::BadRequest, %source, "bad request error constructed");
    Error::BadRequest { source }
}

/// Builds a generic validation error with no field attached.
///
/// # Panics
///
/// When `message` is empty.
pub fn new_validation_error(message: impl Into<String>) -> Error {
    let message = message.into();
    assert!(
        !message.is_empty(),
        "validation error message must not be empty"
    );
    tracing::trace!(category = %Category::Validation, %message, "validation error constructed");
    Error::Validation { message }
}

/// A bad request whose source is a missing-field error, so it classifies both
/// as a bad request and as a bad field value.
pub fn new_request_is_missing_required_field(field: impl Into<String>) -> Error {
    new_bad_request_error(new_bad_request_field_value(field, MISSING_REQUIRED_FIELD))
}

use serde::Serialize;

use crate::category::Category;

pub const MISSING_REQUIRED_FIELD: &str = "missing required field";

/// A bad value for a single named field of a request or a record.
///
/// The rendered form always contains `[<field>]`, so tooling that only sees
/// the message text can still locate the field. Structured consumers should
/// read [`FieldError::field`] and [`FieldError::message`] directly.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("bad value for field [{field}]: {message}")]
pub struct FieldError {
    /// Name of the offending field.
    pub field: String,
    /// Human-readable reason the value was rejected.
    pub message: String,
    #[source]
    #[serde(skip)]
    category: Category,
}

impl FieldError {
    fn new(category: Category, field: impl Into<String>, message: impl Into<String>) -> Self {
        let field = field.into();
        let message = message.into();
        assert!(
            !field.trim().is_empty(),
            "field name must not be blank (message: {message:?})"
        );
        assert!(
            !message.trim().is_empty(),
            "message must not be blank (field: {field:?})"
        );
        tracing::trace!(%category, field = %field, "field error constructed");
        Self {
            field,
            message,
            category,
        }
    }

    /// Either [`Category::BadRequestFieldValue`] or [`Category::BadRecordFieldValue`].
    pub fn category(&self) -> Category {
        self.category
    }
}

/// Builds a field error for a bad value in an incoming request.
///
/// # Panics
///
/// When `field` or `message` is empty or whitespace-only. That is a bug in the
/// caller, not a validation outcome.
pub fn new_bad_request_field_value(
    field: impl Into<String>,
    message: impl Into<String>,
) -> FieldError {
    FieldError::new(Category::BadRequestFieldValue, field, message)
}

/// Builds a field error for a bad value in a stored or decoded record.
///
/// # Panics
///
/// Same preconditions as [`new_bad_request_field_value`].
pub fn new_bad_record_field_value(
    field: impl Into<String>,
    message: impl Into<String>,
) -> FieldError {
    FieldError::new(Category::BadRecordFieldValue, field, message)
}

pub fn new_record_is_missing_required_field(field: impl Into<String>) -> FieldError {
    new_bad_record_field_value(field, MISSING_REQUIRED_FIELD)
}

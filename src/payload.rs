use std::error::Error as StdError;

use serde::Serialize;

use crate::category::Category;
use crate::classify::{chain, classify};
use crate::field::FieldError;

/// Body of an API error response built from any error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorPayload {
    /// Most specific category in the chain, if the error is a validation error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// Top-level rendering of the error.
    pub message: String,
    /// Offending field, taken from the first field error in the chain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ErrorPayload {
    pub fn from_error(err: &(dyn StdError + 'static)) -> Self {
        let field = chain(err)
            .find_map(|e| e.downcast_ref::<FieldError>())
            .map(|f| f.field.clone());
        Self {
            category: classify(err),
            message: err.to_string(),
            field,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use super::ErrorPayload;
    use crate::category::Category;
    use crate::error::{new_request_is_missing_required_field, new_validation_error};
    use crate::field::new_bad_record_field_value;

    #[derive(thiserror::Error, Debug)]
    #[error("connection reset")]
    struct Io;

    #[test]
    fn payload_from_wrapped_field_error() {
        let payload = ErrorPayload::from_error(&new_request_is_missing_required_field("team"));
        assert_eq!(payload.category, Some(Category::BadRequestFieldValue));
        assert_eq!(payload.field.as_deref(), Some("team"));
        assert_eq!(
            payload.message,
            "bad request: bad value for field [team]: missing required field"
        );
    }

    #[test]
    fn payload_json_shape() {
        let payload = ErrorPayload::from_error(&new_bad_record_field_value("id", "not a number"));
        let json: serde_json::Value = serde_json::from_str(&payload.to_json().unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "category": "bad_record_field_value",
                "message": "bad value for field [id]: not a number",
                "field": "id",
            })
        );
    }

    #[test]
    fn payload_omits_missing_parts() {
        let payload = ErrorPayload::from_error(&new_validation_error("payload too large"));
        assert_eq!(payload.field, None);
        assert_eq!(
            payload.to_json().unwrap(),
            r#"{"category":"validation","message":"validation error: payload too large"}"#
        );

        let payload = ErrorPayload::from_error(&Io);
        assert_eq!(
            payload.to_json().unwrap(),
            r#"{"message":"connection reset"}"#
        );
    }
}

#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod category;
pub mod classify;
pub mod error;
pub mod field;
pub mod payload;
pub mod testing;

pub use category::Category;
pub use classify::{
    categories, chain, classify, is_bad_field_value_error, is_bad_record_error,
    is_bad_request_error, is_category, is_validation_error,
};
pub use error::{
    BoxError, Error, new_bad_request_error, new_request_is_missing_required_field,
    new_validation_error,
};
pub use field::{
    FieldError, MISSING_REQUIRED_FIELD, new_bad_record_field_value, new_bad_request_field_value,
    new_record_is_missing_required_field,
};
pub use payload::ErrorPayload;
pub use testing::{FailureReporter, PanicReporter, RecordingReporter, must_be_field_error};

use serde::Serialize;

/// A fixed validation error category.
///
/// Categories form a small tree rooted at [`Category::Validation`]. Every
/// error produced by this crate carries one, and [`crate::classify`] matches
/// a requested category against the whole ancestry of each category found in
/// an error chain.
///
/// A bare category is itself an error value, so it can be returned or wrapped
/// like any other error.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
    strum_macros::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[strum(serialize = "validation", to_string = "validation error")]
    Validation,
    #[strum(serialize = "bad_request", to_string = "bad request")]
    BadRequest,
    #[strum(
        serialize = "bad_request_field_value",
        to_string = "bad request field value"
    )]
    BadRequestFieldValue,
    #[strum(serialize = "bad_record", to_string = "bad record")]
    BadRecord,
    #[strum(
        serialize = "bad_record_field_value",
        to_string = "bad record field value"
    )]
    BadRecordFieldValue,
}

impl Category {
    pub fn parent(self) -> Option<Self> {
        match self {
            Self::Validation => None,
            Self::BadRequest | Self::BadRecord => Some(Self::Validation),
            Self::BadRequestFieldValue => Some(Self::BadRequest),
            Self::BadRecordFieldValue => Some(Self::BadRecord),
        }
    }

    /// Walks from `self` up to [`Category::Validation`], yielding `self` first.
    pub fn ancestors(self) -> impl Iterator<Item = Self> {
        std::iter::successors(Some(self), |c| c.parent())
    }

    /// True when `other` is `self` or one of its ancestors.
    pub fn is_a(self, other: Self) -> bool {
        self.ancestors().any(|c| c == other)
    }

    pub fn depth(self) -> usize {
        self.ancestors().count() - 1
    }

    pub fn is_field_value(self) -> bool {
        matches!(self, Self::BadRequestFieldValue | Self::BadRecordFieldValue)
    }
}

impl std::error::Error for Category {}

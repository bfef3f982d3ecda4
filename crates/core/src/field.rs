//! Presence-aware field values.

use serde::{Deserialize, Serialize};

use crate::error::{SlipError, SlipResult};
use crate::value_object::ValueObject;

/// Result of reading a field whose group can be switched off.
///
/// `Unavailable` means the slip does not offer the field at all (e.g. a
/// pre-printed slip without bank data). It is distinct from a present but
/// empty value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "state", content = "value")]
pub enum Field<T> {
    Present(T),
    Unavailable,
}

impl<T> Field<T> {
    pub fn is_present(&self) -> bool {
        matches!(self, Field::Present(_))
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, Field::Unavailable)
    }

    pub fn as_ref(&self) -> Field<&T> {
        match self {
            Field::Present(v) => Field::Present(v),
            Field::Unavailable => Field::Unavailable,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Field<U> {
        match self {
            Field::Present(v) => Field::Present(f(v)),
            Field::Unavailable => Field::Unavailable,
        }
    }

    pub fn and_then<U>(self, f: impl FnOnce(T) -> Field<U>) -> Field<U> {
        match self {
            Field::Present(v) => f(v),
            Field::Unavailable => Field::Unavailable,
        }
    }

    pub fn present(self) -> Option<T> {
        match self {
            Field::Present(v) => Some(v),
            Field::Unavailable => None,
        }
    }

    /// Present value, or an encoding error naming the missing segment.
    pub fn require(self, segment: &'static str) -> SlipResult<T> {
        self.present().ok_or_else(|| SlipError::unavailable(segment))
    }
}

impl<T> From<Option<T>> for Field<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Field::Present(v),
            None => Field::Unavailable,
        }
    }
}

impl<T: Clone + PartialEq + core::fmt::Debug> ValueObject for Field<T> {}

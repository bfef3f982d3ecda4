//! Slip error model.

use thiserror::Error;

/// Result type used across the slip crates.
pub type SlipResult<T> = Result<T, SlipError>;

/// Slip-level error.
///
/// Disabled field groups are not errors: setters ignore the call and getters
/// report [`crate::Field::Unavailable`]. This enum only covers input that can
/// never be valid and code lines that cannot be built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SlipError {
    /// A value failed validation (e.g. a reference number that is too long).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Amounts on a slip cannot be negative.
    #[error("amount must not be negative: {0}")]
    NegativeAmount(String),

    /// Input expected to hold ASCII digits only.
    #[error("not numeric: {0:?}")]
    NotNumeric(String),

    /// Account number without exactly two `-` separators.
    #[error("malformed account number: {0:?}")]
    MalformedAccountNumber(String),

    /// A segment required by the code line is not available.
    #[error("cannot encode {segment}: {reason}")]
    Encoding {
        segment: &'static str,
        reason: String,
    },

    /// A value does not fit the fixed width of its code line segment.
    #[error("{segment} needs {len} characters but the segment holds {width}")]
    SegmentOverflow {
        segment: &'static str,
        width: usize,
        len: usize,
    },
}

impl SlipError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_numeric(value: impl Into<String>) -> Self {
        Self::NotNumeric(value.into())
    }

    pub fn malformed_account(value: impl Into<String>) -> Self {
        Self::MalformedAccountNumber(value.into())
    }

    pub fn encoding(segment: &'static str, reason: impl Into<String>) -> Self {
        Self::Encoding {
            segment,
            reason: reason.into(),
        }
    }

    pub fn unavailable(segment: &'static str) -> Self {
        Self::encoding(segment, "field is unavailable")
    }

    pub fn overflow(segment: &'static str, width: usize, len: usize) -> Self {
        Self::SegmentOverflow {
            segment,
            width,
            len,
        }
    }

    /// True for errors raised while assembling a code line.
    pub fn is_encoding_error(&self) -> bool {
        matches!(
            self,
            Self::Encoding { .. } | Self::SegmentOverflow { .. } | Self::MalformedAccountNumber(_)
        )
    }
}

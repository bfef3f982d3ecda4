//! Swiss payment slip data and code-line encoding.
//!
//! This crate contains the slip data model and the code-line encoders,
//! implemented purely as deterministic logic (no IO, no rendering).

pub mod blocks;
pub mod checksum;
pub mod data;
pub mod encoder;
pub mod orange;
pub mod red;

pub use blocks::{DEFAULT_BLOCK_SIZE, group_into_blocks, group_into_default_blocks};
pub use checksum::{REDACTION_MARK, append_check_digit, modulo10};
pub use data::{
    ACCOUNT_SEPARATOR, AccountParts, Amount, FieldGroup, PresenceSet, REDACTED_ACCOUNT_DIGITS,
    REDACTED_CENTS, REDACTED_TEXT, REDACTED_WHOLE_UNITS, SlipData,
};
pub use encoder::{AccountLayout, AmountLayout, CodeLineEncoder, SlipType};
pub use orange::{OrangeLayout, OrangeSlip};
pub use red::{RedLayout, RedSlip};

pub use swissslip_core::{Field, SlipError, SlipResult};

//! Code-line encoding contract and the segments shared by all slip types.
//!
//! A code line is assembled from fixed-width segments, each closed by its own
//! check digit. Segments are read from the (possibly redacted) [`SlipData`]
//! accessors; a segment whose field is unavailable fails the whole line.

use serde::{Deserialize, Serialize};

use swissslip_core::{Field, SlipError, SlipResult};

use crate::checksum::{REDACTION_MARK, append_check_digit};
use crate::data::SlipData;

/// Closes the amount and account segments of a code line.
pub const SEGMENT_END: char = '>';

/// Slip types with a code line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlipType {
    /// Orange slip with reference number, paid into a postal account.
    Vesr,
    /// Orange slip with reference number, paid into a bank account.
    Besr,
    /// Red slip without reference number.
    Es,
}

impl SlipType {
    pub fn as_str(self) -> &'static str {
        match self {
            SlipType::Vesr => "vesr",
            SlipType::Besr => "besr",
            SlipType::Es => "es",
        }
    }

    pub fn has_reference_number(self) -> bool {
        matches!(self, SlipType::Vesr | SlipType::Besr)
    }
}

impl core::fmt::Display for SlipType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Produces the code line printed at the bottom of a slip.
pub trait CodeLineEncoder {
    fn slip_type(&self) -> SlipType;

    fn slip_data(&self) -> &SlipData;

    /// Builds the full code line.
    ///
    /// With `fill_with_leading_zeros` numeric segments are left-padded with
    /// `0` to their fixed width. Fails if a required field is unavailable or
    /// a value does not fit its segment; never returns a partial line.
    fn code_line(&self, fill_with_leading_zeros: bool) -> SlipResult<String>;
}

/// Widths and type codes of the amount segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmountLayout {
    /// Type code when the slip carries an amount (CHF).
    pub type_code: &'static str,
    /// Type code of slips issued without amount (ESR+, CHF).
    pub type_code_without_amount: &'static str,
    pub whole_units: usize,
    pub cents: usize,
}

impl AmountLayout {
    pub const CHF: AmountLayout = AmountLayout {
        type_code: "01",
        type_code_without_amount: "04",
        whole_units: 8,
        cents: 2,
    };
}

/// Widths of the account segment (`01-162-8` → `010001628`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountLayout {
    pub prefix: usize,
    pub serial: usize,
    pub check_digit: usize,
}

impl AccountLayout {
    pub const POSTAL: AccountLayout = AccountLayout {
        prefix: 2,
        serial: 6,
        check_digit: 1,
    };

    pub fn width(&self) -> usize {
        self.prefix + self.serial + self.check_digit
    }
}

/// Left-pads `value` with zeros to `width` when `fill` is set.
///
/// Values wider than the segment are rejected whether or not padding is
/// requested.
pub(crate) fn pad_segment(
    segment: &'static str,
    value: &str,
    width: usize,
    fill: bool,
) -> SlipResult<String> {
    let len = value.chars().count();
    if len > width {
        return Err(SlipError::overflow(segment, width, len));
    }
    if !value
        .chars()
        .all(|c| c.is_ascii_digit() || c == REDACTION_MARK)
    {
        return Err(SlipError::not_numeric(value));
    }
    if fill {
        Ok(format!("{value:0>width$}"))
    } else {
        Ok(value.to_string())
    }
}

/// Amount segment with its check digit, `None` when the slip has no amount.
pub(crate) fn amount_segment(
    data: &SlipData,
    layout: &AmountLayout,
    fill: bool,
) -> SlipResult<Option<String>> {
    if !data.with_amount() {
        return Ok(None);
    }
    let whole = data.amount_whole_units().require("amount")?;
    let cents = data.amount_fractional_units().require("amount")?;

    let whole = pad_segment("amount", &whole, layout.whole_units, fill)?;
    // cents always keep their two digits
    let cents = pad_segment("amount cents", &cents, layout.cents, true)?;

    append_check_digit(&format!("{}{whole}{cents}", layout.type_code)).map(Some)
}

/// Type code and check digit of a slip without amount (`042`).
pub(crate) fn amountless_segment(layout: &AmountLayout) -> SlipResult<String> {
    append_check_digit(layout.type_code_without_amount)
}

/// Account segment: prefix, serial (zero-padded when filling) and check digit.
pub(crate) fn account_segment(
    data: &SlipData,
    layout: &AccountLayout,
    fill: bool,
) -> SlipResult<String> {
    if let Field::Unavailable = data.account_digits() {
        return Err(match data.account_number() {
            Field::Present(number) => SlipError::malformed_account(number),
            Field::Unavailable => SlipError::unavailable("account number"),
        });
    }
    let parts = data.account_parts().require("account number")?;

    if parts.prefix.chars().count() != layout.prefix
        || parts.check_digit.chars().count() != layout.check_digit
    {
        return Err(SlipError::malformed_account(format!(
            "{}-{}-{}",
            parts.prefix, parts.serial, parts.check_digit
        )));
    }

    let prefix = pad_segment("account prefix", &parts.prefix, layout.prefix, true)?;
    let serial = pad_segment("account serial", &parts.serial, layout.serial, fill)?;
    let check = pad_segment("account check digit", &parts.check_digit, layout.check_digit, true)?;
    Ok(format!("{prefix}{serial}{check}"))
}

pub(crate) fn log_failure<T>(slip_type: SlipType, result: SlipResult<T>) -> SlipResult<T> {
    if let Err(err) = &result {
        tracing::warn!(slip_type = slip_type.as_str(), error = %err, "code line encoding failed");
    }
    result
}

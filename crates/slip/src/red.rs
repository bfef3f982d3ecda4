//! Red slips without reference number (ES / IS).
//!
//! The code line carries the amount block (when the slip has an amount) and
//! the account block:
//!
//! ```text
//! 0100003949753>010001628>
//! ```

use serde::Serialize;

use swissslip_core::{Field, SlipError, SlipResult};

use crate::blocks::group_into_blocks;
use crate::checksum::REDACTION_MARK;
use crate::data::{ADDRESS_LINES, REDACTED_TEXT, SlipData};
use crate::encoder::{
    AccountLayout, AmountLayout, CodeLineEncoder, SEGMENT_END, SlipType, account_segment,
    amount_segment, log_failure,
};

/// IBANs are printed in groups of four from the left.
const IBAN_BLOCK_SIZE: usize = 4;
const IBAN_MIN_LEN: usize = 15;
const IBAN_MAX_LEN: usize = 34;

/// Segment widths of a red slip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedLayout {
    pub amount: AmountLayout,
    pub account: AccountLayout,
}

impl RedLayout {
    pub const STANDARD: RedLayout = RedLayout {
        amount: AmountLayout::CHF,
        account: AccountLayout::POSTAL,
    };
}

impl Default for RedLayout {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Red payment slip: [`SlipData`] plus payment reason and IBAN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedSlip {
    data: SlipData,
    #[serde(skip)]
    layout: RedLayout,
    payment_reason: [String; ADDRESS_LINES],
    with_payment_reason: bool,
    iban: Option<String>,
}

impl RedSlip {
    pub fn new(data: SlipData) -> Self {
        Self {
            data,
            layout: RedLayout::STANDARD,
            payment_reason: Default::default(),
            with_payment_reason: true,
            iban: None,
        }
    }

    pub fn with_layout(mut self, layout: RedLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn slip_data_mut(&mut self) -> &mut SlipData {
        &mut self.data
    }

    pub fn into_slip_data(self) -> SlipData {
        self.data
    }

    pub fn with_payment_reason(&self) -> bool {
        self.with_payment_reason
    }

    /// Disabling clears the payment reason.
    pub fn set_with_payment_reason(&mut self, enabled: bool) {
        self.with_payment_reason = enabled;
        if !enabled {
            self.payment_reason = Default::default();
        }
    }

    /// Sets up to four lines of payment reason.
    pub fn set_payment_reason<S: AsRef<str>>(&mut self, lines: &[S]) -> SlipResult<()> {
        if !self.with_payment_reason {
            tracing::debug!("ignoring payment reason on slip without payment reason");
            return Ok(());
        }
        if lines.len() > ADDRESS_LINES {
            return Err(SlipError::validation(format!(
                "payment reason has {} lines, at most {ADDRESS_LINES} fit on a slip",
                lines.len()
            )));
        }
        self.payment_reason = core::array::from_fn(|i| {
            lines
                .get(i)
                .map(|l| l.as_ref().to_string())
                .unwrap_or_default()
        });
        Ok(())
    }

    /// Payment reason line `n` (1-based), redacted on a slip that is not for payment.
    pub fn payment_reason_line(&self, n: usize) -> Field<&str> {
        if !self.with_payment_reason {
            return Field::Unavailable;
        }
        let Some(line) = n.checked_sub(1).and_then(|i| self.payment_reason.get(i)) else {
            return Field::Unavailable;
        };
        if self.data.not_for_payment() {
            Field::Present(REDACTED_TEXT)
        } else {
            Field::Present(line.as_str())
        }
    }

    /// Sets the IBAN of the recipient. Blanks are dropped and letters upper-cased.
    pub fn set_iban(&mut self, iban: &str) -> SlipResult<()> {
        let iban: String = iban
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();
        if !iban.chars().all(|c| c.is_ascii_alphanumeric())
            || !(IBAN_MIN_LEN..=IBAN_MAX_LEN).contains(&iban.len())
        {
            return Err(SlipError::validation(format!("invalid IBAN: {iban:?}")));
        }
        self.iban = Some(iban);
        Ok(())
    }

    pub fn clear_iban(&mut self) {
        self.iban = None;
    }

    pub fn iban(&self) -> Field<String> {
        match &self.iban {
            Some(iban) if self.data.not_for_payment() => {
                Field::Present(core::iter::repeat_n(REDACTION_MARK, iban.len()).collect())
            }
            Some(iban) => Field::Present(iban.clone()),
            None => Field::Unavailable,
        }
    }

    /// IBAN in blocks of four, as printed on the slip.
    pub fn formatted_iban(&self) -> Field<String> {
        self.iban()
            .map(|iban| group_into_blocks(&iban, IBAN_BLOCK_SIZE, false))
    }

    fn build_code_line(&self, fill: bool) -> SlipResult<String> {
        let mut line = String::new();
        if let Some(amount) = amount_segment(&self.data, &self.layout.amount, fill)? {
            line.push_str(&amount);
            line.push(SEGMENT_END);
        }
        line.push_str(&account_segment(&self.data, &self.layout.account, fill)?);
        line.push(SEGMENT_END);
        Ok(line)
    }
}

impl CodeLineEncoder for RedSlip {
    fn slip_type(&self) -> SlipType {
        SlipType::Es
    }

    fn slip_data(&self) -> &SlipData {
        &self.data
    }

    fn code_line(&self, fill_with_leading_zeros: bool) -> SlipResult<String> {
        log_failure(self.slip_type(), self.build_code_line(fill_with_leading_zeros))
    }
}

//! Orange slips with reference number (ESR / ISR).
//!
//! Postal slips (VESR) carry the reference number alone; bank slips (BESR)
//! prefix it with the banking customer id. Both are ESR+ slips when the amount
//! group is disabled.
//!
//! Code line of a CHF 3949.75 slip with zeros filled:
//!
//! ```text
//! 0100003949753>120000000000234478943216899+ 010001628>
//! ```
//!
//! Type code `01`, francs (8), cents (2) and check digit; the reference (26)
//! and its check digit; the account (9).

use serde::Serialize;

use swissslip_core::{Field, SlipError, SlipResult};

use crate::blocks::group_into_default_blocks;
use crate::checksum::{REDACTION_MARK, append_check_digit};
use crate::data::SlipData;
use crate::encoder::{
    AccountLayout, AmountLayout, CodeLineEncoder, SEGMENT_END, SlipType, account_segment,
    amount_segment, amountless_segment, log_failure, pad_segment,
};

/// Separates the reference segment from the account segment.
pub const REFERENCE_END: &str = "+ ";

/// Segment widths of an orange slip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrangeLayout {
    pub amount: AmountLayout,
    pub account: AccountLayout,
    /// Reference number width without its check digit.
    pub reference: usize,
    /// Maximum width of the banking customer id.
    pub banking_customer_id: usize,
}

impl OrangeLayout {
    pub const STANDARD: OrangeLayout = OrangeLayout {
        amount: AmountLayout::CHF,
        account: AccountLayout::POSTAL,
        reference: 26,
        banking_customer_id: 6,
    };
}

impl Default for OrangeLayout {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Orange payment slip: [`SlipData`] plus reference number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrangeSlip {
    data: SlipData,
    #[serde(skip)]
    layout: OrangeLayout,
    reference_number: String,
    banking_customer_id: String,
    with_reference_number: bool,
    with_banking_customer_id: bool,
}

impl OrangeSlip {
    /// Slip paying into a postal account (VESR).
    pub fn postal(data: SlipData) -> Self {
        Self {
            data,
            layout: OrangeLayout::STANDARD,
            reference_number: String::new(),
            banking_customer_id: String::new(),
            with_reference_number: true,
            with_banking_customer_id: false,
        }
    }

    /// Slip paying into a bank account (BESR), identified by the bank's customer id.
    pub fn bank(data: SlipData, banking_customer_id: &str) -> SlipResult<Self> {
        let mut slip = Self::postal(data);
        slip.with_banking_customer_id = true;
        slip.set_banking_customer_id(banking_customer_id)?;
        Ok(slip)
    }

    pub fn with_layout(mut self, layout: OrangeLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn layout(&self) -> &OrangeLayout {
        &self.layout
    }

    pub fn slip_data_mut(&mut self) -> &mut SlipData {
        &mut self.data
    }

    pub fn into_slip_data(self) -> SlipData {
        self.data
    }

    pub fn with_reference_number(&self) -> bool {
        self.with_reference_number
    }

    /// Disabling clears the reference number.
    pub fn set_with_reference_number(&mut self, enabled: bool) {
        self.with_reference_number = enabled;
        if !enabled {
            self.reference_number.clear();
        }
    }

    pub fn with_banking_customer_id(&self) -> bool {
        self.with_banking_customer_id
    }

    /// Disabling clears the banking customer id.
    pub fn set_with_banking_customer_id(&mut self, enabled: bool) {
        self.with_banking_customer_id = enabled;
        if !enabled {
            self.banking_customer_id.clear();
        }
    }

    /// Sets the reference number. Blanks are dropped, so block-formatted
    /// input is accepted.
    pub fn set_reference_number(&mut self, reference: &str) -> SlipResult<()> {
        if !self.with_reference_number {
            tracing::debug!("ignoring reference number on slip without reference number");
            return Ok(());
        }
        let reference = digits_only("reference number", reference, self.layout.reference)?;
        self.reference_number = reference;
        Ok(())
    }

    pub fn set_banking_customer_id(&mut self, id: &str) -> SlipResult<()> {
        if !self.with_banking_customer_id {
            tracing::debug!("ignoring banking customer id on postal slip");
            return Ok(());
        }
        let id = digits_only("banking customer id", id, self.layout.banking_customer_id)?;
        self.banking_customer_id = id;
        Ok(())
    }

    /// The reference number, `XXXX…` on a slip that is not for payment.
    pub fn reference_number(&self) -> Field<String> {
        if !self.with_reference_number {
            return Field::Unavailable;
        }
        if self.data.not_for_payment() {
            return Field::Present(redaction(self.layout.reference));
        }
        Field::Present(self.reference_number.clone())
    }

    pub fn banking_customer_id(&self) -> Field<String> {
        if !self.with_banking_customer_id {
            return Field::Unavailable;
        }
        if self.data.not_for_payment() {
            return Field::Present(redaction(self.layout.banking_customer_id));
        }
        Field::Present(self.banking_customer_id.clone())
    }

    /// Reference number with banking customer id and check digit.
    ///
    /// `formatted` groups the result into blocks of five from the right, the
    /// way it is printed in the slip's reference box.
    pub fn complete_reference_number(&self, formatted: bool, fill_zeros: bool) -> SlipResult<String> {
        let width = self.layout.reference;
        let reference = self.reference_number().require("reference number")?;
        let body = if self.data.not_for_payment() {
            redaction(width)
        } else {
            if reference.is_empty() {
                return Err(SlipError::encoding("reference number", "reference number is not set"));
            }
            match self.banking_customer_id() {
                Field::Present(id) => {
                    if id.is_empty() {
                        return Err(SlipError::encoding(
                            "banking customer id",
                            "banking customer id is not set",
                        ));
                    }
                    let rest = width.saturating_sub(id.len());
                    let reference = pad_segment("reference number", &reference, rest, true)?;
                    format!("{id}{reference}")
                }
                Field::Unavailable => pad_segment("reference number", &reference, width, fill_zeros)?,
            }
        };

        let complete = append_check_digit(&body)?;
        if formatted {
            Ok(group_into_default_blocks(&complete))
        } else {
            Ok(complete)
        }
    }

    fn build_code_line(&self, fill: bool) -> SlipResult<String> {
        let amount = match amount_segment(&self.data, &self.layout.amount, fill)? {
            Some(segment) => segment,
            None => amountless_segment(&self.layout.amount)?,
        };
        let reference = self.complete_reference_number(false, fill)?;
        let account = account_segment(&self.data, &self.layout.account, fill)?;

        Ok(format!(
            "{amount}{SEGMENT_END}{reference}{REFERENCE_END}{account}{SEGMENT_END}"
        ))
    }
}

impl CodeLineEncoder for OrangeSlip {
    fn slip_type(&self) -> SlipType {
        if self.with_banking_customer_id {
            SlipType::Besr
        } else {
            SlipType::Vesr
        }
    }

    fn slip_data(&self) -> &SlipData {
        &self.data
    }

    fn code_line(&self, fill_with_leading_zeros: bool) -> SlipResult<String> {
        log_failure(self.slip_type(), self.build_code_line(fill_with_leading_zeros))
    }
}

fn redaction(width: usize) -> String {
    core::iter::repeat_n(REDACTION_MARK, width).collect()
}

fn digits_only(what: &'static str, value: &str, max: usize) -> SlipResult<String> {
    let digits: String = value.chars().filter(|c| !c.is_whitespace()).collect();
    if !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(SlipError::not_numeric(value));
    }
    if digits.len() > max {
        return Err(SlipError::validation(format!(
            "{what} has {} digits, at most {max} allowed",
            digits.len()
        )));
    }
    Ok(digits)
}

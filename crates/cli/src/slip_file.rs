//! JSON description of a slip, applied through the slip setters.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use swissslip_slip::{CodeLineEncoder, Field, FieldGroup, OrangeSlip, RedSlip, SlipData};

/// Slip type selected on the command line or in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Orange slip with reference number.
    #[default]
    Orange,
    /// Red slip without reference number.
    Red,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BankFile {
    pub name: String,
    pub city: String,
}

/// A slip as read from disk.
///
/// ```json
/// {
///   "variant": "orange",
///   "disabled": ["bank"],
///   "account_number": "01-162-8",
///   "amount": "3949.75",
///   "reference_number": "12 00000 00000 23447 89432 1689"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlipFile {
    #[serde(default)]
    pub variant: Option<Variant>,
    /// Field groups the slip does not offer.
    #[serde(default)]
    pub disabled: Vec<FieldGroup>,
    #[serde(default)]
    pub bank: Option<BankFile>,
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub recipient: Vec<String>,
    #[serde(default)]
    pub payer: Vec<String>,
    #[serde(default)]
    pub amount: Option<Decimal>,
    #[serde(default)]
    pub reference_number: Option<String>,
    #[serde(default)]
    pub banking_customer_id: Option<String>,
    #[serde(default)]
    pub payment_reason: Vec<String>,
    #[serde(default)]
    pub iban: Option<String>,
    #[serde(default)]
    pub not_for_payment: bool,
}

/// A slip ready for encoding.
#[derive(Debug)]
pub enum Slip {
    Orange(OrangeSlip),
    Red(RedSlip),
}

impl Slip {
    pub fn encoder(&self) -> &dyn CodeLineEncoder {
        match self {
            Slip::Orange(slip) => slip,
            Slip::Red(slip) => slip,
        }
    }

    /// What the rendering layer prints besides the code line.
    pub fn render(&self, fill_zeros: bool) -> Result<Rendered> {
        let encoder = self.encoder();
        let code_line = encoder
            .code_line(fill_zeros)
            .context("failed to encode code line")?;
        let (reference, iban) = match self {
            Slip::Orange(slip) => (
                Some(
                    slip.complete_reference_number(true, fill_zeros)
                        .context("failed to format reference number")?,
                ),
                None,
            ),
            Slip::Red(slip) => (None, slip.formatted_iban().present()),
        };
        Ok(Rendered {
            slip_type: encoder.slip_type().as_str(),
            not_for_payment: encoder.slip_data().not_for_payment(),
            amount: match encoder.slip_data().amount() {
                Field::Present(amount) => Some(amount.to_string()),
                Field::Unavailable => None,
            },
            reference,
            iban,
            code_line,
        })
    }
}

/// Output of `swissslip encode`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendered {
    pub slip_type: &'static str,
    pub not_for_payment: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iban: Option<String>,
    pub code_line: String,
}

impl SlipFile {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid slip description")
    }

    fn slip_data(&self) -> Result<SlipData> {
        let mut data = SlipData::new();
        for group in &self.disabled {
            data.set_presence(*group, false);
        }
        if let Some(bank) = &self.bank {
            data.set_bank_data(bank.name.as_str(), bank.city.as_str());
        }
        if let Some(account) = &self.account_number {
            data.set_account_number(account.as_str());
        }
        data.set_recipient_data(self.recipient.as_slice())?;
        data.set_payer_data(self.payer.as_slice())?;
        if let Some(amount) = self.amount {
            data.set_amount(amount)?;
        }
        Ok(data)
    }

    /// Builds the slip; `variant` overrides the one in the file.
    pub fn build(&self, variant: Option<Variant>) -> Result<Slip> {
        let variant = variant.or(self.variant).unwrap_or_default();
        let mut data = self.slip_data()?;
        if self.not_for_payment {
            data.set_not_for_payment(true);
        }

        let slip = match variant {
            Variant::Orange => {
                let mut slip = match &self.banking_customer_id {
                    Some(id) => OrangeSlip::bank(data, id)?,
                    None => OrangeSlip::postal(data),
                };
                if let Some(reference) = &self.reference_number {
                    slip.set_reference_number(reference)?;
                }
                Slip::Orange(slip)
            }
            Variant::Red => {
                let mut slip = RedSlip::new(data);
                slip.set_payment_reason(self.payment_reason.as_slice())?;
                if let Some(iban) = &self.iban {
                    slip.set_iban(iban)?;
                }
                Slip::Red(slip)
            }
        };
        tracing::debug!(slip_type = slip.encoder().slip_type().as_str(), "slip built");
        Ok(slip)
    }
}

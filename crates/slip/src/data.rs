//! Slip content shared by all slip types: field groups, amount and account number.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize, Serializer};

use swissslip_core::{Field, SlipError, SlipResult, ValueObject};

/// Text written into every text field of a slip that must not be used for payment.
pub const REDACTED_TEXT: &str = "XXXXXX";
/// Whole units of a redacted amount.
pub const REDACTED_WHOLE_UNITS: &str = "XXXXXXXX";
/// Cents of a redacted amount.
pub const REDACTED_CENTS: &str = "XX";
/// Account digits of a redacted slip.
pub const REDACTED_ACCOUNT_DIGITS: &str = "XXXXXXXXX";
/// Separator between the parts of an account number (`01-162-8`).
pub const ACCOUNT_SEPARATOR: char = '-';
/// Number of address lines for recipient and payer.
pub const ADDRESS_LINES: usize = 4;

/// Groups of slip fields that can be switched on and off together.
///
/// Pre-printed slips typically leave out bank and recipient; ESR+ slips leave
/// out the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldGroup {
    Bank,
    Account,
    Recipient,
    Amount,
    Payer,
}

impl FieldGroup {
    pub const ALL: [FieldGroup; 5] = [
        FieldGroup::Bank,
        FieldGroup::Account,
        FieldGroup::Recipient,
        FieldGroup::Amount,
        FieldGroup::Payer,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldGroup::Bank => "bank",
            FieldGroup::Account => "account",
            FieldGroup::Recipient => "recipient",
            FieldGroup::Amount => "amount",
            FieldGroup::Payer => "payer",
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl core::fmt::Display for FieldGroup {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of enabled field groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PresenceSet(u8);

impl PresenceSet {
    pub fn all() -> Self {
        FieldGroup::ALL
            .iter()
            .fold(Self::none(), |set, group| set.with(*group))
    }

    pub fn none() -> Self {
        Self(0)
    }

    pub fn with(mut self, group: FieldGroup) -> Self {
        self.insert(group);
        self
    }

    pub fn contains(&self, group: FieldGroup) -> bool {
        self.0 & group.bit() != 0
    }

    pub fn insert(&mut self, group: FieldGroup) {
        self.0 |= group.bit();
    }

    pub fn remove(&mut self, group: FieldGroup) {
        self.0 &= !group.bit();
    }

    pub fn iter(&self) -> impl Iterator<Item = FieldGroup> + '_ {
        FieldGroup::ALL.into_iter().filter(|g| self.contains(*g))
    }
}

impl Default for PresenceSet {
    fn default() -> Self {
        Self::all()
    }
}

impl Serialize for PresenceSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

/// Amount printed on a slip.
///
/// Values are kept rounded to cents. `Redacted` is what a "not for payment"
/// slip carries instead of a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Amount {
    Value(Decimal),
    Redacted,
}

impl Amount {
    pub const ZERO: Amount = Amount::Value(Decimal::ZERO);

    /// Rounds `value` to cents (half away from zero). Negative values are rejected.
    pub fn new(value: Decimal) -> SlipResult<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(SlipError::NegativeAmount(value.to_string()));
        }
        Ok(Amount::Value(
            value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        ))
    }

    pub fn is_redacted(&self) -> bool {
        matches!(self, Amount::Redacted)
    }

    pub fn value(&self) -> Option<Decimal> {
        match self {
            Amount::Value(v) => Some(*v),
            Amount::Redacted => None,
        }
    }

    /// Integer part, e.g. `"12"` for `12.30`.
    pub fn whole_units(&self) -> String {
        match self {
            Amount::Value(v) => v.trunc().to_string(),
            Amount::Redacted => REDACTED_WHOLE_UNITS.to_string(),
        }
    }

    /// Two-digit cents, e.g. `"30"` for `12.3` and `"05"` for `0.05`.
    pub fn fractional_units(&self) -> String {
        match self {
            Amount::Value(v) => {
                let cents = ((*v - v.trunc()) * Decimal::ONE_HUNDRED)
                    .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
                format!("{:0>2}", cents.trunc().to_string())
            }
            Amount::Redacted => REDACTED_CENTS.to_string(),
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Amount::ZERO
    }
}

impl core::fmt::Display for Amount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Amount::Value(v) => write!(f, "{v:.2}"),
            Amount::Redacted => write!(f, "{REDACTED_WHOLE_UNITS}.{REDACTED_CENTS}"),
        }
    }
}

impl ValueObject for Amount {}

/// The three parts of an account number: `01-162-8` is prefix `01`,
/// serial `162` and check digit `8`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountParts {
    pub prefix: String,
    pub serial: String,
    pub check_digit: String,
}

impl AccountParts {
    fn redacted() -> Self {
        Self {
            prefix: "XX".to_string(),
            serial: "XXXXXX".to_string(),
            check_digit: "X".to_string(),
        }
    }

    /// Splits on exactly two separators.
    pub fn parse(account_number: &str) -> Option<Self> {
        let mut parts = account_number.split(ACCOUNT_SEPARATOR);
        let prefix = parts.next()?;
        let serial = parts.next()?;
        let check_digit = parts.next()?;
        if parts.next().is_some() {
            return None;
        }
        Some(Self {
            prefix: prefix.to_string(),
            serial: serial.to_string(),
            check_digit: check_digit.to_string(),
        })
    }

    pub fn digits(&self) -> String {
        format!("{}{}{}", self.prefix, self.serial, self.check_digit)
    }
}

impl ValueObject for AccountParts {}

/// Data printed on a Swiss payment slip.
///
/// Each field group has a presence flag. Setters of a disabled group are
/// ignored and getters report [`Field::Unavailable`]; disabling a group clears
/// its fields.
///
/// [`SlipData::set_not_for_payment`] turns the slip into a specimen: every
/// field is overwritten with `X` markers, whatever the flags say.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlipData {
    presence: PresenceSet,
    not_for_payment: bool,
    bank_name: String,
    bank_city: String,
    account_number: String,
    recipient: [String; ADDRESS_LINES],
    payer: [String; ADDRESS_LINES],
    amount: Amount,
}

impl Default for SlipData {
    fn default() -> Self {
        Self::new()
    }
}

impl SlipData {
    /// All groups enabled, all fields empty.
    pub fn new() -> Self {
        Self {
            presence: PresenceSet::all(),
            not_for_payment: false,
            bank_name: String::new(),
            bank_city: String::new(),
            account_number: String::new(),
            recipient: Default::default(),
            payer: Default::default(),
            amount: Amount::ZERO,
        }
    }

    // --- presence -------------------------------------------------------

    pub fn presence(&self) -> PresenceSet {
        self.presence
    }

    pub fn has(&self, group: FieldGroup) -> bool {
        self.presence.contains(group)
    }

    /// Enables or disables a field group.
    ///
    /// Disabling clears the group's fields. Enabling does not bring back
    /// earlier values.
    pub fn set_presence(&mut self, group: FieldGroup, enabled: bool) {
        if enabled {
            self.presence.insert(group);
        } else {
            self.presence.remove(group);
            self.clear_group(group);
        }
        tracing::debug!(group = group.as_str(), enabled, "slip field group toggled");
    }

    pub fn set_with_bank(&mut self, enabled: bool) {
        self.set_presence(FieldGroup::Bank, enabled);
    }

    pub fn set_with_account_number(&mut self, enabled: bool) {
        self.set_presence(FieldGroup::Account, enabled);
    }

    pub fn set_with_recipient(&mut self, enabled: bool) {
        self.set_presence(FieldGroup::Recipient, enabled);
    }

    pub fn set_with_amount(&mut self, enabled: bool) {
        self.set_presence(FieldGroup::Amount, enabled);
    }

    pub fn set_with_payer(&mut self, enabled: bool) {
        self.set_presence(FieldGroup::Payer, enabled);
    }

    pub fn with_bank(&self) -> bool {
        self.has(FieldGroup::Bank)
    }

    pub fn with_account_number(&self) -> bool {
        self.has(FieldGroup::Account)
    }

    pub fn with_recipient(&self) -> bool {
        self.has(FieldGroup::Recipient)
    }

    pub fn with_amount(&self) -> bool {
        self.has(FieldGroup::Amount)
    }

    pub fn with_payer(&self) -> bool {
        self.has(FieldGroup::Payer)
    }

    fn clear_group(&mut self, group: FieldGroup) {
        match group {
            FieldGroup::Bank => {
                self.bank_name.clear();
                self.bank_city.clear();
            }
            FieldGroup::Account => self.account_number.clear(),
            FieldGroup::Recipient => self.recipient = Default::default(),
            FieldGroup::Amount => self.amount = Amount::ZERO,
            FieldGroup::Payer => self.payer = Default::default(),
        }
    }

    /// Returns true when the group accepts writes; logs the ignored write otherwise.
    fn accepts(&self, group: FieldGroup) -> bool {
        let enabled = self.has(group);
        if !enabled {
            tracing::debug!(group = group.as_str(), "ignoring write to disabled slip field group");
        }
        enabled
    }

    fn gated<'a>(&self, group: FieldGroup, value: &'a str) -> Field<&'a str> {
        if self.has(group) {
            Field::Present(value)
        } else {
            Field::Unavailable
        }
    }

    // --- setters --------------------------------------------------------

    pub fn set_bank_data(&mut self, name: impl Into<String>, city: impl Into<String>) {
        if self.accepts(FieldGroup::Bank) {
            self.bank_name = name.into();
            self.bank_city = city.into();
        }
    }

    pub fn set_account_number(&mut self, account_number: impl Into<String>) {
        if self.accepts(FieldGroup::Account) {
            self.account_number = account_number.into();
        }
    }

    /// Sets up to four recipient lines; missing trailing lines become empty.
    pub fn set_recipient_data<S: AsRef<str>>(&mut self, lines: &[S]) -> SlipResult<()> {
        if self.accepts(FieldGroup::Recipient) {
            self.recipient = address_lines("recipient", lines)?;
        }
        Ok(())
    }

    /// Sets up to four payer lines; missing trailing lines become empty.
    pub fn set_payer_data<S: AsRef<str>>(&mut self, lines: &[S]) -> SlipResult<()> {
        if self.accepts(FieldGroup::Payer) {
            self.payer = address_lines("payer", lines)?;
        }
        Ok(())
    }

    /// Sets the amount, rounded to cents. Negative amounts are rejected.
    pub fn set_amount(&mut self, amount: Decimal) -> SlipResult<()> {
        if self.accepts(FieldGroup::Amount) {
            self.amount = Amount::new(amount)?;
        }
        Ok(())
    }

    // --- getters --------------------------------------------------------

    pub fn bank_name(&self) -> Field<&str> {
        self.gated(FieldGroup::Bank, &self.bank_name)
    }

    pub fn bank_city(&self) -> Field<&str> {
        self.gated(FieldGroup::Bank, &self.bank_city)
    }

    pub fn account_number(&self) -> Field<&str> {
        self.gated(FieldGroup::Account, &self.account_number)
    }

    /// Recipient line `n` (1-based). Out-of-range lines are unavailable.
    pub fn recipient_line(&self, n: usize) -> Field<&str> {
        line(&self.recipient, n).map_or(Field::Unavailable, |l| self.gated(FieldGroup::Recipient, l))
    }

    pub fn recipient_lines(&self) -> Field<&[String; ADDRESS_LINES]> {
        if self.with_recipient() {
            Field::Present(&self.recipient)
        } else {
            Field::Unavailable
        }
    }

    /// Payer line `n` (1-based). Out-of-range lines are unavailable.
    pub fn payer_line(&self, n: usize) -> Field<&str> {
        line(&self.payer, n).map_or(Field::Unavailable, |l| self.gated(FieldGroup::Payer, l))
    }

    pub fn payer_lines(&self) -> Field<&[String; ADDRESS_LINES]> {
        if self.with_payer() {
            Field::Present(&self.payer)
        } else {
            Field::Unavailable
        }
    }

    pub fn amount(&self) -> Field<Amount> {
        if self.with_amount() {
            Field::Present(self.amount)
        } else {
            Field::Unavailable
        }
    }

    // --- redaction ------------------------------------------------------

    pub fn not_for_payment(&self) -> bool {
        self.not_for_payment
    }

    /// Marks the slip as a specimen.
    ///
    /// Enabling writes redaction markers into every field, including fields of
    /// disabled groups. Disabling only clears the flag; the markers stay until
    /// the fields are set again.
    pub fn set_not_for_payment(&mut self, enabled: bool) {
        self.not_for_payment = enabled;
        if !enabled {
            tracing::debug!("slip no longer marked not for payment");
            return;
        }

        self.bank_name = REDACTED_TEXT.to_string();
        self.bank_city = REDACTED_TEXT.to_string();
        self.account_number = REDACTED_TEXT.to_string();
        self.recipient = core::array::from_fn(|_| REDACTED_TEXT.to_string());
        self.payer = core::array::from_fn(|_| REDACTED_TEXT.to_string());
        self.amount = Amount::Redacted;
        tracing::info!("slip marked not for payment, all fields redacted");
    }

    // --- derived values for encoding -----------------------------------

    /// Whole currency units of the amount.
    ///
    /// A redacted amount left behind on a slip that is for payment again is
    /// unavailable until a new amount is set.
    pub fn amount_whole_units(&self) -> Field<String> {
        if self.not_for_payment {
            return Field::Present(REDACTED_WHOLE_UNITS.to_string());
        }
        self.payable_amount().map(|a| a.whole_units())
    }

    /// Cents of the amount as two digits.
    pub fn amount_fractional_units(&self) -> Field<String> {
        if self.not_for_payment {
            return Field::Present(REDACTED_CENTS.to_string());
        }
        self.payable_amount().map(|a| a.fractional_units())
    }

    fn payable_amount(&self) -> Field<Amount> {
        self.amount()
            .and_then(|a| if a.is_redacted() { Field::Unavailable } else { Field::Present(a) })
    }

    /// The account number without its two separators.
    ///
    /// Unavailable when the account group is disabled or the number does not
    /// have exactly two separators.
    pub fn account_digits(&self) -> Field<String> {
        self.account_parts().map(|parts| {
            if self.not_for_payment {
                REDACTED_ACCOUNT_DIGITS.to_string()
            } else {
                parts.digits()
            }
        })
    }

    /// The account number split at its separators, under the same rules as
    /// [`SlipData::account_digits`].
    pub fn account_parts(&self) -> Field<AccountParts> {
        if !self.with_account_number() {
            return Field::Unavailable;
        }
        if self.not_for_payment {
            return Field::Present(AccountParts::redacted());
        }
        AccountParts::parse(&self.account_number).into()
    }
}

fn line(lines: &[String; ADDRESS_LINES], n: usize) -> Option<&str> {
    n.checked_sub(1)
        .and_then(|i| lines.get(i))
        .map(String::as_str)
}

fn address_lines<S: AsRef<str>>(
    what: &str,
    lines: &[S],
) -> SlipResult<[String; ADDRESS_LINES]> {
    if lines.len() > ADDRESS_LINES {
        return Err(SlipError::validation(format!(
            "{what} has {} lines, at most {ADDRESS_LINES} fit on a slip",
            lines.len()
        )));
    }
    Ok(core::array::from_fn(|i| {
        lines
            .get(i)
            .map(|l| l.as_ref().to_string())
            .unwrap_or_default()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn populated() -> SlipData {
        let mut slip = SlipData::new();
        slip.set_bank_data("Seldwyla Bank", "8001 Zürich");
        slip.set_account_number("01-145-6");
        slip.set_recipient_data(&["H. Muster AG", "Versandhaus", "Industriestrasse 88", "8000 Zürich"])
            .unwrap();
        slip.set_payer_data(&["Rutschmann Pia", "Marktgasse 28", "9400 Rorschach"])
            .unwrap();
        slip.set_amount(dec("2830.50")).unwrap();
        slip
    }

    #[test]
    fn new_slip_has_all_groups_and_empty_fields() {
        let slip = SlipData::new();
        for group in FieldGroup::ALL {
            assert!(slip.has(group), "{group} should be enabled");
        }
        assert!(!slip.not_for_payment());
        assert_eq!(slip.bank_name(), Field::Present(""));
        assert_eq!(slip.account_number(), Field::Present(""));
        assert_eq!(slip.recipient_line(1), Field::Present(""));
        assert_eq!(slip.payer_line(4), Field::Present(""));
        assert_eq!(slip.amount(), Field::Present(Amount::ZERO));
        assert_eq!(slip, SlipData::default());
    }

    #[test]
    fn setters_store_values() {
        let slip = populated();
        assert_eq!(slip.bank_name(), Field::Present("Seldwyla Bank"));
        assert_eq!(slip.bank_city(), Field::Present("8001 Zürich"));
        assert_eq!(slip.account_number(), Field::Present("01-145-6"));
        assert_eq!(slip.recipient_line(3), Field::Present("Industriestrasse 88"));
        assert_eq!(slip.payer_line(3), Field::Present("9400 Rorschach"));
        assert_eq!(slip.payer_line(4), Field::Present(""));
        assert_eq!(slip.amount(), Field::Present(Amount::Value(dec("2830.50"))));
    }

    #[test]
    fn out_of_range_lines_are_unavailable() {
        let slip = populated();
        assert_eq!(slip.recipient_line(0), Field::Unavailable);
        assert_eq!(slip.payer_line(5), Field::Unavailable);
    }

    #[test]
    fn more_than_four_lines_are_rejected() {
        let mut slip = populated();
        let err = slip
            .set_payer_data(&["a", "b", "c", "d", "e"])
            .unwrap_err();
        assert!(matches!(err, SlipError::Validation(_)));
        assert_eq!(slip.payer_line(1), Field::Present("Rutschmann Pia"));
    }

    #[test]
    fn disabling_a_group_clears_and_hides_it() {
        let mut slip = populated();
        slip.set_with_bank(false);
        assert_eq!(slip.bank_name(), Field::Unavailable);
        assert_eq!(slip.bank_city(), Field::Unavailable);

        slip.set_with_bank(true);
        assert_eq!(slip.bank_name(), Field::Present(""));
        assert_eq!(slip.bank_city(), Field::Present(""));
    }

    #[test]
    fn setters_of_disabled_groups_are_ignored() {
        let mut slip = SlipData::new();
        slip.set_with_recipient(false);
        slip.set_with_account_number(false);
        slip.set_recipient_data(&["ignored"]).unwrap();
        slip.set_account_number("01-162-8");
        assert_eq!(slip.recipient_lines(), Field::Unavailable);
        assert_eq!(slip.account_number(), Field::Unavailable);

        slip.set_with_recipient(true);
        slip.set_with_account_number(true);
        assert_eq!(slip.recipient_line(1), Field::Present(""));
        assert_eq!(slip.account_number(), Field::Present(""));
    }

    #[test]
    fn disabled_amount_is_unavailable_even_if_set_before() {
        let mut slip = populated();
        slip.set_with_amount(false);
        assert_eq!(slip.amount(), Field::Unavailable);
        assert_eq!(slip.amount_whole_units(), Field::Unavailable);
        assert_eq!(slip.amount_fractional_units(), Field::Unavailable);

        slip.set_with_amount(true);
        assert_eq!(slip.amount(), Field::Present(Amount::ZERO));
    }

    #[test]
    fn negative_amount_is_rejected() {
        let mut slip = populated();
        let err = slip.set_amount(dec("-0.01")).unwrap_err();
        assert_eq!(err, SlipError::NegativeAmount("-0.01".to_string()));
        assert_eq!(slip.amount_whole_units(), Field::Present("2830".to_string()));
    }

    #[test]
    fn amount_is_split_into_units_and_cents() {
        let mut slip = SlipData::new();
        for (amount, whole, cents) in [
            ("12.3", "12", "30"),
            ("12.00", "12", "00"),
            ("0.05", "0", "05"),
            ("3949.75", "3949", "75"),
            ("1.005", "1", "01"),
            ("99.999", "100", "00"),
        ] {
            slip.set_amount(dec(amount)).unwrap();
            assert_eq!(slip.amount_whole_units(), Field::Present(whole.to_string()), "{amount}");
            assert_eq!(slip.amount_fractional_units(), Field::Present(cents.to_string()), "{amount}");
        }
    }

    #[test]
    fn amount_display_has_two_decimals() {
        assert_eq!(Amount::new(dec("12.3")).unwrap().to_string(), "12.30");
        assert_eq!(Amount::Redacted.to_string(), "XXXXXXXX.XX");
    }

    #[test]
    fn account_digits_need_exactly_two_separators() {
        let mut slip = SlipData::new();
        slip.set_account_number("01-23456-7");
        assert_eq!(slip.account_digits(), Field::Present("01234567".to_string()));

        slip.set_account_number("01-23-456-7");
        assert_eq!(slip.account_digits(), Field::Unavailable);

        slip.set_account_number("0123456-7");
        assert_eq!(slip.account_digits(), Field::Unavailable);

        slip.set_account_number("");
        assert_eq!(slip.account_digits(), Field::Unavailable);
    }

    #[test]
    fn account_parts_split_the_number() {
        let slip = populated();
        assert_eq!(
            slip.account_parts(),
            Field::Present(AccountParts {
                prefix: "01".to_string(),
                serial: "145".to_string(),
                check_digit: "6".to_string(),
            })
        );
    }

    #[test]
    fn disabled_account_wins_over_redaction() {
        let mut slip = populated();
        slip.set_with_account_number(false);
        slip.set_not_for_payment(true);
        assert_eq!(slip.account_digits(), Field::Unavailable);
    }

    #[test]
    fn not_for_payment_redacts_every_field() {
        let mut slip = populated();
        slip.set_not_for_payment(true);

        assert!(slip.not_for_payment());
        assert_eq!(slip.bank_name(), Field::Present(REDACTED_TEXT));
        assert_eq!(slip.bank_city(), Field::Present(REDACTED_TEXT));
        assert_eq!(slip.account_number(), Field::Present(REDACTED_TEXT));
        for n in 1..=ADDRESS_LINES {
            assert_eq!(slip.recipient_line(n), Field::Present(REDACTED_TEXT));
            assert_eq!(slip.payer_line(n), Field::Present(REDACTED_TEXT));
        }
        assert_eq!(slip.amount(), Field::Present(Amount::Redacted));
        assert_eq!(slip.amount_whole_units(), Field::Present("XXXXXXXX".to_string()));
        assert_eq!(slip.amount_fractional_units(), Field::Present("XX".to_string()));
        assert_eq!(slip.account_digits(), Field::Present("XXXXXXXXX".to_string()));
    }

    #[test]
    fn redaction_ignores_presence_flags() {
        let mut slip = populated();
        slip.set_with_bank(false);
        slip.set_with_amount(false);
        slip.set_not_for_payment(true);

        assert_eq!(slip.amount_whole_units(), Field::Present("XXXXXXXX".to_string()));
        assert_eq!(slip.amount_fractional_units(), Field::Present("XX".to_string()));

        // the markers were written even though the group was off
        slip.set_with_bank(true);
        assert_eq!(slip.bank_name(), Field::Present(REDACTED_TEXT));
    }

    #[test]
    fn clearing_not_for_payment_does_not_restore_data() {
        let mut slip = populated();
        slip.set_not_for_payment(true);
        slip.set_not_for_payment(false);

        assert!(!slip.not_for_payment());
        assert_eq!(slip.bank_name(), Field::Present(REDACTED_TEXT));
        assert_eq!(slip.amount(), Field::Present(Amount::Redacted));
        assert_eq!(slip.amount_whole_units(), Field::Unavailable);
        assert_eq!(slip.amount_fractional_units(), Field::Unavailable);
        // "XXXXXX" has no separators
        assert_eq!(slip.account_digits(), Field::Unavailable);

        slip.set_amount(dec("10")).unwrap();
        assert_eq!(slip.amount_whole_units(), Field::Present("10".to_string()));
    }

    #[test]
    fn presence_set_tracks_groups() {
        let mut set = PresenceSet::none();
        assert_eq!(set.iter().count(), 0);
        set.insert(FieldGroup::Payer);
        set.insert(FieldGroup::Bank);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![FieldGroup::Bank, FieldGroup::Payer]);
        set.remove(FieldGroup::Bank);
        assert!(!set.contains(FieldGroup::Bank));
        assert_eq!(PresenceSet::default(), PresenceSet::all());
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn group() -> impl Strategy<Value = FieldGroup> {
            prop::sample::select(FieldGroup::ALL.to_vec())
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: switching a group off and on never resurrects old values.
            #[test]
            fn toggling_a_group_clears_it(
                group in group(),
                text in "[A-Za-z0-9 ]{1,30}",
                cents in 1u64..10_000_000u64,
            ) {
                let mut slip = SlipData::new();
                slip.set_bank_data(text.clone(), text.clone());
                slip.set_account_number(text.clone());
                slip.set_recipient_data(&[text.as_str()]).unwrap();
                slip.set_payer_data(&[text.as_str()]).unwrap();
                slip.set_amount(Decimal::new(cents as i64, 2)).unwrap();

                slip.set_presence(group, false);
                slip.set_presence(group, true);

                let cleared = match group {
                    FieldGroup::Bank => slip.bank_name() == Field::Present("") && slip.bank_city() == Field::Present(""),
                    FieldGroup::Account => slip.account_number() == Field::Present(""),
                    FieldGroup::Recipient => slip.recipient_line(1) == Field::Present(""),
                    FieldGroup::Payer => slip.payer_line(1) == Field::Present(""),
                    FieldGroup::Amount => slip.amount() == Field::Present(Amount::ZERO),
                };
                prop_assert!(cleared);
            }

            /// Property: redaction overwrites everything regardless of the flags.
            #[test]
            fn redaction_is_total(
                disabled in prop::collection::vec(group(), 0..5),
                text in "[A-Za-z0-9 ]{0,30}",
            ) {
                let mut slip = SlipData::new();
                slip.set_bank_data(text.clone(), text.clone());
                slip.set_recipient_data(&[text.as_str(), text.as_str()]).unwrap();
                slip.set_payer_data(&[text.as_str()]).unwrap();
                for g in &disabled {
                    slip.set_presence(*g, false);
                }

                slip.set_not_for_payment(true);
                for g in FieldGroup::ALL {
                    slip.set_presence(g, true);
                }
                // re-enabling does not clear, so the markers are visible now

                prop_assert_eq!(slip.bank_name(), Field::Present(REDACTED_TEXT));
                prop_assert_eq!(slip.bank_city(), Field::Present(REDACTED_TEXT));
                prop_assert_eq!(slip.account_number(), Field::Present(REDACTED_TEXT));
                for n in 1..=ADDRESS_LINES {
                    prop_assert_eq!(slip.recipient_line(n), Field::Present(REDACTED_TEXT));
                    prop_assert_eq!(slip.payer_line(n), Field::Present(REDACTED_TEXT));
                }
                prop_assert_eq!(slip.amount_whole_units(), Field::Present(REDACTED_WHOLE_UNITS.to_string()));
                prop_assert_eq!(slip.amount_fractional_units(), Field::Present(REDACTED_CENTS.to_string()));
            }

            /// Property: cents are always two digits and recombine to the amount.
            #[test]
            fn units_and_cents_recombine(cents in 0u64..10_000_000_000u64) {
                let mut slip = SlipData::new();
                let value = Decimal::new(cents as i64, 2);
                slip.set_amount(value).unwrap();
                let whole = slip.amount_whole_units().present().unwrap();
                let frac = slip.amount_fractional_units().present().unwrap();
                prop_assert_eq!(frac.len(), 2);
                let back = Decimal::from_str(&format!("{whole}.{frac}")).unwrap();
                prop_assert_eq!(back, value);
            }
        }
    }
}

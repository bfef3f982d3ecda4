//! Value object trait: equality by value, not identity.
//!
//! Everything printed on a slip (amounts, account numbers, address lines) is a
//! value: two amounts of `12.30` are the same amount no matter where they came
//! from.

/// Marker trait for value objects.
///
/// Value objects are compared by their attribute values and are cheap to
/// clone. To "modify" one, build a new value.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct AccountNumber(String);
///
/// impl ValueObject for AccountNumber {}
///
/// assert_eq!(AccountNumber("01-162-8".into()), AccountNumber("01-162-8".into()));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

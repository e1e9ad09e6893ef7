//! # Money Module
//!
//! Provides the `Money` and `Quantity` fixed-point types.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A ledger that sums hundreds of invoice dues in f64 drifts by paise    │
//! │  over time, and the drift compounds with every aggregation.            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Paise                                            │
//! │    ₹10.50 is stored as 1050 paise (i64)                                │
//! │    Addition and subtraction are exact; rounding happens in exactly     │
//! │    one place (line totals) and is explicit.                            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Wire-Format Boundary
//! The persisted documents (and the HTTP API) carry plain JSON numbers in
//! rupees - `10.5` means ₹10.50. That format is fixed by the existing data
//! files, so `Money` and `Quantity` implement custom serde that converts
//! to/from an `f64` at the boundary, rounding to the nearest paisa/gram.
//! Floats exist *only* inside those two impls; everything else is integral.
//!
//! ## Usage
//! ```rust
//! use spicebill_core::money::{Money, Quantity};
//!
//! let price = Money::from_paise(1050);        // ₹10.50 per kg
//! let qty = Quantity::from_millis(2500);      // 2.5 kg
//!
//! let line_total = price.times(qty);
//! assert_eq!(line_total.paise(), 2625);       // ₹26.25
//! ```

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (paise).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values - an overpaid invoice has a
///   negative due amount, and ledger summaries may net out below zero.
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Custom serde**: rupee-number wire format (see module docs)
///
/// ## Where Money Flows
/// ```text
/// PriceMap[item] ──► InvoiceLine.unit_price ──► line subtotal
///                                                    │
///                                                    ▼
/// Invoice.total ──► Invoice.due = total − received ──► Ledger summary
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from paise (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use spicebill_core::money::Money;
    ///
    /// let price = Money::from_paise(1099); // Represents ₹10.99
    /// assert_eq!(price.paise(), 1099);
    /// ```
    #[inline]
    pub const fn from_paise(paise: i64) -> Self {
        Money(paise)
    }

    /// Creates a Money value from whole rupees.
    #[inline]
    pub const fn from_rupees(rupees: i64) -> Self {
        Money(rupees * 100)
    }

    /// Returns the value in paise.
    #[inline]
    pub const fn paise(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (rupees) portion.
    #[inline]
    pub const fn rupees(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (paise) portion (always 0-99).
    #[inline]
    pub const fn paise_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a quantity, yielding a line total.
    ///
    /// ## Rounding
    /// A quantity has three fractional digits, so the raw product carries
    /// three extra digits of precision. We divide back by 1000 with
    /// round-half-up, in `i128` to rule out overflow:
    ///
    /// ```text
    /// ₹10.50/kg × 2.500 kg = 1050 × 2500 = 2_625_000
    ///                        (2_625_000 + 500) / 1000 = 2625 paise = ₹26.25
    /// ```
    ///
    /// This is the *only* place monetary rounding happens.
    ///
    /// ## Example
    /// ```rust
    /// use spicebill_core::money::{Money, Quantity};
    ///
    /// let rate = Money::from_paise(333);          // ₹3.33/kg
    /// let line = rate.times(Quantity::from_millis(100)); // 0.1 kg
    /// assert_eq!(line.paise(), 33);               // ₹0.333 → ₹0.33
    /// ```
    pub fn times(&self, qty: Quantity) -> Money {
        let raw = self.0 as i128 * qty.millis() as i128;
        Money::from_paise(((raw + 500) / 1000) as i64)
    }

    /// Converts to a rupee-denominated f64 for the wire format.
    ///
    /// Boundary use only - never feed the result back into arithmetic.
    #[inline]
    pub fn to_rupees_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Parses a rupee-denominated number from the wire format, rounding
    /// to the nearest paisa.
    ///
    /// Returns `None` for non-finite input (NaN/inf cannot appear in JSON
    /// but can arrive through other callers) and for magnitudes the
    /// paise representation cannot hold.
    pub fn from_rupees_f64(rupees: f64) -> Option<Self> {
        if !rupees.is_finite() {
            return None;
        }
        let paise = (rupees * 100.0).round();
        // A bare `as` cast saturates at the i64 bounds; reject
        // out-of-range magnitudes instead.
        if paise < i64::MIN as f64 || paise >= i64::MAX as f64 {
            return None;
        }
        Some(Money(paise as i64))
    }
}

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for logs and debugging. The API returns raw numbers; clients
/// handle their own formatting.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}₹{}.{:02}", sign, self.rupees().abs(), self.paise_part())
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(-self.0)
    }
}

/// Summation for ledger aggregation (`history.iter().map(..).sum()`).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

/// Wire format: a plain JSON number in rupees.
impl Serialize for Money {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_rupees_f64())
    }
}

impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rupees = f64::deserialize(deserializer)?;
        Money::from_rupees_f64(rupees)
            .ok_or_else(|| de::Error::custom("monetary value must be a finite, representable number"))
    }
}

// =============================================================================
// Quantity Type
// =============================================================================

/// A weight in thousandths of a kilogram (grams, effectively).
///
/// ## Why Fixed-Point Here Too?
/// Quantities enter the system as decimals (the billing form steps by
/// 0.1 kg). Multiplying an f64 quantity by an integer price would undo
/// the whole point of integer money, so quantities get the same
/// treatment: i64 thousandths, floats only at the serde boundary.
///
/// Negative quantities are rejected by validation, not by the type,
/// mirroring how `Money` stays signed for dues.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(i64);

impl Quantity {
    /// Creates a quantity from thousandths of a kilogram.
    ///
    /// ## Example
    /// ```rust
    /// use spicebill_core::money::Quantity;
    ///
    /// let half_kg = Quantity::from_millis(500);
    /// assert_eq!(half_kg.millis(), 500);
    /// ```
    #[inline]
    pub const fn from_millis(millis: i64) -> Self {
        Quantity(millis)
    }

    /// Creates a quantity from whole kilograms.
    #[inline]
    pub const fn from_kg(kg: i64) -> Self {
        Quantity(kg * 1000)
    }

    /// Returns the value in thousandths of a kilogram.
    #[inline]
    pub const fn millis(&self) -> i64 {
        self.0
    }

    /// Returns zero quantity.
    #[inline]
    pub const fn zero() -> Self {
        Quantity(0)
    }

    /// Checks if the quantity is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the quantity is negative (invalid; rejected upstream).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Converts to a kilogram-denominated f64 for the wire format.
    #[inline]
    pub fn to_kg_f64(&self) -> f64 {
        self.0 as f64 / 1000.0
    }

    /// Parses a kilogram-denominated number from the wire format,
    /// rounding to the nearest thousandth.
    ///
    /// Returns `None` for non-finite input and for magnitudes outside
    /// the i64 range, same as [`Money::from_rupees_f64`].
    pub fn from_kg_f64(kg: f64) -> Option<Self> {
        if !kg.is_finite() {
            return None;
        }
        let millis = (kg * 1000.0).round();
        if millis < i64::MIN as f64 || millis >= i64::MAX as f64 {
            return None;
        }
        Some(Quantity(millis as i64))
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:03} kg", sign, (self.0 / 1000).abs(), (self.0 % 1000).abs())
    }
}

/// Wire format: a plain JSON number in kilograms.
impl Serialize for Quantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.to_kg_f64())
    }
}

impl<'de> Deserialize<'de> for Quantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let kg = f64::deserialize(deserializer)?;
        Quantity::from_kg_f64(kg)
            .ok_or_else(|| de::Error::custom("quantity must be a finite, representable number"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_paise() {
        let money = Money::from_paise(1099);
        assert_eq!(money.paise(), 1099);
        assert_eq!(money.rupees(), 10);
        assert_eq!(money.paise_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_paise(1099)), "₹10.99");
        assert_eq!(format!("{}", Money::from_paise(500)), "₹5.00");
        assert_eq!(format!("{}", Money::from_paise(-550)), "-₹5.50");
        assert_eq!(format!("{}", Money::from_paise(0)), "₹0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_paise(1000);
        let b = Money::from_paise(500);

        assert_eq!((a + b).paise(), 1500);
        assert_eq!((a - b).paise(), 500);
        assert_eq!((b - a).paise(), -500); // overpayment territory
        assert_eq!((-a).paise(), -1000);
    }

    #[test]
    fn test_sum() {
        let dues = [Money::from_paise(1200), Money::from_paise(-800), Money::from_paise(500)];
        let total: Money = dues.into_iter().sum();
        assert_eq!(total.paise(), 900);
    }

    #[test]
    fn test_times_exact() {
        // ₹10.00/kg × 2 kg = ₹20.00
        let rate = Money::from_rupees(10);
        assert_eq!(rate.times(Quantity::from_kg(2)).paise(), 2000);
    }

    #[test]
    fn test_times_rounds_half_up() {
        // ₹3.33/kg × 0.1 kg = ₹0.333 → ₹0.33
        let rate = Money::from_paise(333);
        assert_eq!(rate.times(Quantity::from_millis(100)).paise(), 33);

        // ₹3.35/kg × 0.1 kg = ₹0.335 → ₹0.34 (half rounds up)
        let rate = Money::from_paise(335);
        assert_eq!(rate.times(Quantity::from_millis(100)).paise(), 34);
    }

    #[test]
    fn test_times_zero() {
        let rate = Money::from_paise(999);
        assert_eq!(rate.times(Quantity::zero()), Money::zero());
        assert_eq!(Money::zero().times(Quantity::from_kg(5)), Money::zero());
    }

    #[test]
    fn test_wire_format_round_trip() {
        // 10.5 on the wire means ₹10.50
        let money: Money = serde_json::from_str("10.5").unwrap();
        assert_eq!(money.paise(), 1050);

        let json = serde_json::to_string(&money).unwrap();
        let back: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(back, money);
    }

    #[test]
    fn test_wire_format_integer_input() {
        // Existing data files mix integers and floats freely
        let money: Money = serde_json::from_str("32").unwrap();
        assert_eq!(money.paise(), 3200);
    }

    #[test]
    fn test_wire_format_rounds_to_paisa() {
        // 10.999 has no paisa representation; nearest wins
        let money: Money = serde_json::from_str("10.999").unwrap();
        assert_eq!(money.paise(), 1100);
    }

    #[test]
    fn test_wire_format_rejects_unrepresentable_magnitude() {
        // 1e300 rupees rounds far past i64 paise; saturating to
        // i64::MAX would corrupt the value, so parsing must fail.
        assert!(serde_json::from_str::<Money>("1e300").is_err());
        assert!(serde_json::from_str::<Money>("-1e300").is_err());
        assert!(Money::from_rupees_f64(1e300).is_none());
        assert!(Money::from_rupees_f64(f64::NAN).is_none());

        assert!(serde_json::from_str::<Quantity>("1e300").is_err());
        assert!(Quantity::from_kg_f64(-1e300).is_none());

        // Large but representable values still parse
        assert_eq!(
            Money::from_rupees_f64(1e12),
            Some(Money::from_paise(100_000_000_000_000))
        );
    }

    #[test]
    fn test_quantity_wire_format() {
        let qty: Quantity = serde_json::from_str("2.5").unwrap();
        assert_eq!(qty.millis(), 2500);

        let json = serde_json::to_string(&qty).unwrap();
        let back: Quantity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, qty);
    }

    #[test]
    fn test_quantity_display() {
        assert_eq!(format!("{}", Quantity::from_millis(2500)), "2.500 kg");
        assert_eq!(format!("{}", Quantity::from_millis(100)), "0.100 kg");
    }

    /// Critical test: repeated aggregation does not drift.
    ///
    /// Summing ₹0.10 a thousand times in f64 gives 99.9999999986;
    /// in integer paise it is exactly ₹100.00.
    #[test]
    fn test_no_aggregation_drift() {
        let dime = Money::from_paise(10);
        let total: Money = std::iter::repeat(dime).take(1000).sum();
        assert_eq!(total.paise(), 10_000);
    }
}

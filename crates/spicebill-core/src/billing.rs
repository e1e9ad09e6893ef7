//! # Billing Engine
//!
//! Computes an invoice from a customer's price map and requested
//! quantities. This is the arithmetic core of the system.
//!
//! ## Billing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Generate Bill                                     │
//! │                                                                         │
//! │  Customer price map        Quantities entered on the form              │
//! │  { Turmeric: ₹10/kg,       { Turmeric: 2 kg,                           │
//! │    Chili:    ₹5/kg,          Chili:    0 kg,   ◄── skipped             │
//! │    Cumin:    ₹4/kg }         Cumin:    3 kg }                          │
//! │        │                          │                                     │
//! │        └──────────┬───────────────┘                                     │
//! │                   ▼                                                     │
//! │         compute_invoice()   ← THIS MODULE                              │
//! │                   │                                                     │
//! │                   ▼                                                     │
//! │  Invoice { details: { Turmeric: (2, ₹10), Cumin: (3, ₹4) },            │
//! │            total: ₹32, received: ₹20, due: ₹12 }                       │
//! │                   │                                                     │
//! │                   ▼                                                     │
//! │         PaymentLedger.record()  (spicebill-store)                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Determinism
//! `compute_invoice` is a pure function: identical inputs always produce
//! an identical invoice. No clock, no hidden state - even the date is a
//! parameter.

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::error::CoreResult;
use crate::money::{Money, Quantity};
use crate::types::{ExportRow, Invoice, LineDetail, PriceMap};
use crate::validation::{validate_amount_received, validate_quantity};

/// Computes an invoice from a price map and requested quantities.
///
/// ## Algorithm
/// For each requested item, in form order:
/// 1. Reject negative quantities (`InvalidInput`)
/// 2. Skip items with zero quantity - they never appear on the invoice
/// 3. Look up the unit price; an unpriced item bills at zero
/// 4. Accumulate `qty × price` into the total
///
/// `due = total − amount_received`. The caller supplies the amount
/// received - typically defaulted to the total by the presentation
/// layer, but partial payment (positive due) and overpayment (negative
/// due) are both valid outcomes.
///
/// ## Why Recompute the Total?
/// The invoice total is always derived here from the lines, never
/// accepted from the caller. A client cannot submit an invoice whose
/// total disagrees with its breakdown.
///
/// ## Example
/// ```rust
/// use spicebill_core::billing::compute_invoice;
/// use spicebill_core::money::{Money, Quantity};
/// use chrono::NaiveDate;
/// use indexmap::IndexMap;
///
/// let mut prices = IndexMap::new();
/// prices.insert("Turmeric".to_string(), Money::from_rupees(10));
///
/// let mut quantities = IndexMap::new();
/// quantities.insert("Turmeric".to_string(), Quantity::from_kg(2));
///
/// let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// let invoice = compute_invoice(&prices, &quantities, Money::from_rupees(15), date).unwrap();
///
/// assert_eq!(invoice.total, Money::from_rupees(20));
/// assert_eq!(invoice.due, Money::from_rupees(5)); // partial payment
/// ```
pub fn compute_invoice(
    prices: &PriceMap,
    quantities: &IndexMap<String, Quantity>,
    amount_received: Money,
    date: NaiveDate,
) -> CoreResult<Invoice> {
    validate_amount_received(amount_received)?;

    let mut details: IndexMap<String, LineDetail> = IndexMap::new();
    let mut total = Money::zero();

    for (item, &qty) in quantities {
        validate_quantity(qty)?;
        if qty.is_zero() {
            continue;
        }

        // Unpriced items bill at zero; the price map is authoritative
        // even when it disagrees with the global catalog.
        let price = prices.get(item).copied().unwrap_or_else(Money::zero);

        total += price.times(qty);
        details.insert(item.clone(), LineDetail { qty, price });
    }

    Ok(Invoice {
        date,
        total,
        received: amount_received,
        due: total - amount_received,
        details,
    })
}

/// Projects an invoice into flat rows for CSV-style export.
///
/// Pure projection of the invoice lines - no core state involved. The
/// gateway hands these rows to the client, which renders the actual
/// file.
pub fn export_rows(invoice: &Invoice) -> Vec<ExportRow> {
    invoice
        .lines()
        .into_iter()
        .map(|line| ExportRow {
            subtotal: line.subtotal(),
            item: line.item,
            qty: line.quantity,
            rate: line.unit_price,
        })
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, ValidationError};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn prices(entries: &[(&str, i64)]) -> PriceMap {
        entries
            .iter()
            .map(|&(item, rupees)| (item.to_string(), Money::from_rupees(rupees)))
            .collect()
    }

    fn quantities(entries: &[(&str, i64)]) -> IndexMap<String, Quantity> {
        entries
            .iter()
            .map(|&(item, kg)| (item.to_string(), Quantity::from_kg(kg)))
            .collect()
    }

    #[test]
    fn test_invoice_total_correctness() {
        // {A: 2, B: 0, C: 3} × {A: 10, B: 5, C: 4} → lines [(A,2,10,20), (C,3,4,12)]
        let prices = prices(&[("A", 10), ("B", 5), ("C", 4)]);
        let quantities = quantities(&[("A", 2), ("B", 0), ("C", 3)]);

        let invoice =
            compute_invoice(&prices, &quantities, Money::from_rupees(32), date()).unwrap();

        let lines = invoice.lines();
        assert_eq!(lines.len(), 2); // B excluded: quantity = 0
        assert_eq!(lines[0].item, "A");
        assert_eq!(lines[0].quantity, Quantity::from_kg(2));
        assert_eq!(lines[0].unit_price, Money::from_rupees(10));
        assert_eq!(lines[0].subtotal(), Money::from_rupees(20));
        assert_eq!(lines[1].item, "C");
        assert_eq!(lines[1].subtotal(), Money::from_rupees(12));

        assert_eq!(invoice.total, Money::from_rupees(32));
    }

    #[test]
    fn test_due_arithmetic_partial_payment() {
        let prices = prices(&[("A", 10), ("C", 4)]);
        let quantities = quantities(&[("A", 2), ("C", 3)]);

        let invoice =
            compute_invoice(&prices, &quantities, Money::from_rupees(20), date()).unwrap();
        assert_eq!(invoice.total, Money::from_rupees(32));
        assert_eq!(invoice.due, Money::from_rupees(12));
    }

    #[test]
    fn test_due_arithmetic_overpayment() {
        let prices = prices(&[("A", 10), ("C", 4)]);
        let quantities = quantities(&[("A", 2), ("C", 3)]);

        // Paying ₹40 against ₹32 is allowed, not rejected
        let invoice =
            compute_invoice(&prices, &quantities, Money::from_rupees(40), date()).unwrap();
        assert_eq!(invoice.due, Money::from_rupees(-8));
        assert!(invoice.due.is_negative());
    }

    #[test]
    fn test_missing_price_defaults_to_zero() {
        // Item in the quantities but not in the price map
        let prices = prices(&[("A", 10)]);
        let quantities = quantities(&[("A", 1), ("Mystery", 5)]);

        let invoice = compute_invoice(&prices, &quantities, Money::zero(), date()).unwrap();
        assert_eq!(invoice.total, Money::from_rupees(10));
        // The line still appears, billed at zero
        assert_eq!(invoice.details["Mystery"].price, Money::zero());
    }

    #[test]
    fn test_all_zero_quantities_yield_empty_invoice() {
        let prices = prices(&[("A", 10)]);
        let quantities = quantities(&[("A", 0)]);

        let invoice = compute_invoice(&prices, &quantities, Money::zero(), date()).unwrap();
        assert!(invoice.details.is_empty());
        assert_eq!(invoice.total, Money::zero());
        assert_eq!(invoice.due, Money::zero());
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let prices = prices(&[("A", 10)]);
        let mut quantities = IndexMap::new();
        quantities.insert("A".to_string(), Quantity::from_millis(-100));

        let err = compute_invoice(&prices, &quantities, Money::zero(), date()).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MustBeNonNegative { .. })
        ));
    }

    #[test]
    fn test_negative_amount_received_rejected() {
        let prices = prices(&[("A", 10)]);
        let quantities = quantities(&[("A", 1)]);

        let err =
            compute_invoice(&prices, &quantities, Money::from_paise(-1), date()).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_deterministic() {
        let prices = prices(&[("A", 10), ("C", 4)]);
        let quantities = quantities(&[("A", 2), ("C", 3)]);

        let a = compute_invoice(&prices, &quantities, Money::from_rupees(20), date()).unwrap();
        let b = compute_invoice(&prices, &quantities, Money::from_rupees(20), date()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_fractional_quantities() {
        // ₹85.50/kg × 0.1 kg = ₹8.55
        let mut prices = PriceMap::new();
        prices.insert("Chili".to_string(), Money::from_paise(8550));
        let mut quantities = IndexMap::new();
        quantities.insert("Chili".to_string(), Quantity::from_millis(100));

        let invoice = compute_invoice(&prices, &quantities, Money::zero(), date()).unwrap();
        assert_eq!(invoice.total, Money::from_paise(855));
        assert_eq!(invoice.due, Money::from_paise(855));
    }

    #[test]
    fn test_export_rows() {
        let prices = prices(&[("A", 10), ("C", 4)]);
        let quantities = quantities(&[("A", 2), ("C", 3)]);
        let invoice =
            compute_invoice(&prices, &quantities, Money::from_rupees(32), date()).unwrap();

        let rows = export_rows(&invoice);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].item, "A");
        assert_eq!(rows[0].qty, Quantity::from_kg(2));
        assert_eq!(rows[0].rate, Money::from_rupees(10));
        assert_eq!(rows[0].subtotal, Money::from_rupees(20));
    }
}

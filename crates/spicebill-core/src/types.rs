//! # Domain Types
//!
//! The data model for customers, prices, invoices, and the three
//! persisted documents.
//!
//! ## Persisted Document Shapes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Documents on Disk (JSON)                             │
//! │                                                                         │
//! │  customer_data.json                                                    │
//! │    { "Ravi Stores": { "address": "...",                                │
//! │                       "spices": { "Turmeric": 120.0, ... } } }         │
//! │                                                                         │
//! │  spices.json                                                           │
//! │    ["Turmeric", "Chili", "Coriander", "Cumin"]                         │
//! │                                                                         │
//! │  payments.json                                                         │
//! │    { "Ravi Stores": [ { "date": "2024-06-01",                          │
//! │                         "total": 32.0,                                 │
//! │                         "received": 20.0,                              │
//! │                         "due": 12.0,                                   │
//! │                         "details": { "Turmeric":                       │
//! │                                        { "qty": 2.0, "price": 10.0 }   │
//! │                                    } } ] }                             │
//! │                                                                         │
//! │  Key order is insertion order (IndexMap), matching how the data was   │
//! │  entered. Monetary numbers are rupees, quantities kilograms - the     │
//! │  Money/Quantity serde boundary converts to fixed-point on load.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::money::{Money, Quantity};

// =============================================================================
// Price Maps and Customers
// =============================================================================

/// Per-customer mapping of item name → unit price per kg.
///
/// Not shared across customers; each customer negotiates their own rates.
/// An item missing from the map reads as a zero price. The map may hold
/// prices for items no longer (or not yet) in the global catalog - there
/// is no cascading reconciliation.
pub type PriceMap = IndexMap<String, Money>;

/// A customer as persisted inside `customer_data` (keyed by name).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    pub address: String,

    /// Item → unit price. Field name matches the on-disk document.
    #[serde(default)]
    pub spices: PriceMap,
}

/// The `customer_data` document: customer name → record, in
/// registration order.
pub type CustomerBook = IndexMap<String, CustomerRecord>;

/// The assembled customer view returned by the registry.
///
/// ## Design Notes
/// The persisted record does not repeat the name (it is the map key);
/// this struct reunites them for callers that hold a customer by value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Customer name - unique, case-sensitive primary key.
    pub name: String,
    pub address: String,
    pub prices: PriceMap,
}

// =============================================================================
// Catalog
// =============================================================================

/// The `spices` document: known item names in the order they were added.
///
/// Append-only list semantics, not a set - insertion order drives form
/// display, and there is no rename/remove in scope.
pub type SpiceList = Vec<String>;

// =============================================================================
// Invoices and the Payment Ledger
// =============================================================================

/// One billed line inside a persisted invoice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineDetail {
    /// Quantity sold, in kg.
    pub qty: Quantity,

    /// Unit price at billing time (frozen).
    ///
    /// This is critical: later price edits must not rewrite history, so
    /// the rate is captured into the invoice rather than looked up.
    pub price: Money,
}

/// A finalized billing computation - one payment record.
///
/// Created exactly once per confirmed bill, appended to the customer's
/// ledger, and immutable thereafter (no correction/void flow in scope).
/// The serialized shape is exactly the on-disk payments record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Transaction date ("YYYY-MM-DD" on the wire).
    pub date: NaiveDate,

    /// Sum of line subtotals. Always recomputed, never trusted from input.
    pub total: Money,

    /// Amount the customer actually handed over. May be less than the
    /// total (partial payment) or more (overpayment).
    pub received: Money,

    /// `total − received`. Negative means the customer is in credit.
    pub due: Money,

    /// Item → (qty, frozen rate), in billing-form order. Only items with
    /// a quantity above zero appear here.
    #[serde(default)]
    pub details: IndexMap<String, LineDetail>,
}

impl Invoice {
    /// Projects the detail map into ordered invoice lines.
    pub fn lines(&self) -> Vec<InvoiceLine> {
        self.details
            .iter()
            .map(|(item, detail)| InvoiceLine {
                item: item.clone(),
                quantity: detail.qty,
                unit_price: detail.price,
            })
            .collect()
    }
}

/// One line of an invoice, in list form.
///
/// Ephemeral - constructed per billing session for display and export,
/// never persisted standalone (the persisted form is [`LineDetail`]
/// keyed by item inside the invoice).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLine {
    pub item: String,
    pub quantity: Quantity,
    pub unit_price: Money,
}

impl InvoiceLine {
    /// `quantity × unit_price`, rounded to the paisa.
    pub fn subtotal(&self) -> Money {
        self.unit_price.times(self.quantity)
    }
}

/// The `payments` document: customer name → invoices in append order.
///
/// Append order is insertion order, not chronological - a back-dated
/// invoice lands at the end. Display layers may re-sort by date.
pub type PaymentBook = IndexMap<String, Vec<Invoice>>;

/// A flat, CSV-ready projection of one invoice line.
///
/// Pure presentation shape for the invoice download (spreadsheet
/// columns item / qty / rate / subtotal); produced by
/// [`crate::billing::export_rows`], no core state involved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRow {
    pub item: String,
    pub qty: Quantity,
    pub rate: Money,
    pub subtotal: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_invoice() -> Invoice {
        let mut details = IndexMap::new();
        details.insert(
            "Turmeric".to_string(),
            LineDetail {
                qty: Quantity::from_kg(2),
                price: Money::from_rupees(10),
            },
        );
        details.insert(
            "Cumin".to_string(),
            LineDetail {
                qty: Quantity::from_kg(3),
                price: Money::from_rupees(4),
            },
        );
        Invoice {
            date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            total: Money::from_rupees(32),
            received: Money::from_rupees(20),
            due: Money::from_rupees(12),
            details,
        }
    }

    #[test]
    fn test_invoice_wire_shape() {
        let json = serde_json::to_value(sample_invoice()).unwrap();
        assert_eq!(json["date"], "2024-06-01");
        assert_eq!(json["total"], 32.0);
        assert_eq!(json["received"], 20.0);
        assert_eq!(json["due"], 12.0);
        assert_eq!(json["details"]["Turmeric"]["qty"], 2.0);
        assert_eq!(json["details"]["Turmeric"]["price"], 10.0);
    }

    #[test]
    fn test_invoice_round_trip() {
        let invoice = sample_invoice();
        let json = serde_json::to_string(&invoice).unwrap();
        let back: Invoice = serde_json::from_str(&json).unwrap();
        assert_eq!(back, invoice);
    }

    #[test]
    fn test_invoice_lines_preserve_order() {
        let lines = sample_invoice().lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].item, "Turmeric");
        assert_eq!(lines[0].subtotal(), Money::from_rupees(20));
        assert_eq!(lines[1].item, "Cumin");
        assert_eq!(lines[1].subtotal(), Money::from_rupees(12));
    }

    #[test]
    fn test_customer_record_wire_shape() {
        // Matches the legacy customer_data document exactly
        let json = r#"{ "address": "12 Market Rd", "spices": { "Chili": 85.5 } }"#;
        let record: CustomerRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.address, "12 Market Rd");
        assert_eq!(record.spices["Chili"], Money::from_paise(8550));
    }

    #[test]
    fn test_customer_record_missing_prices_defaults_empty() {
        let record: CustomerRecord =
            serde_json::from_str(r#"{ "address": "somewhere" }"#).unwrap();
        assert!(record.spices.is_empty());
    }
}

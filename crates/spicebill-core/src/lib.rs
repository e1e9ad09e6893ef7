//! # spicebill-core: Pure Business Logic for Spicebill
//!
//! This crate is the **heart** of Spicebill. It contains the billing
//! arithmetic and the domain model as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Spicebill Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    HTTP Gateway (axum)                          │   │
//! │  │    register_customer, quote_invoice, record_invoice, ...        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    spicebill-store                              │   │
//! │  │    Catalog, CustomerRegistry, PaymentLedger, DocumentStore      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ spicebill-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  billing  │  │ validation│  │   │
//! │  │   │ Customer  │  │   Money   │  │  compute  │  │   rules   │  │   │
//! │  │   │  Invoice  │  │  Quantity │  │  invoice  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILE SYSTEM • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Customer, Invoice, PriceMap, etc.)
//! - [`money`] - Money and Quantity types with integer arithmetic (no floating point!)
//! - [`billing`] - Invoice computation
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: File system and network access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in paise (i64) to avoid float errors
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use spicebill_core::billing::compute_invoice;
//! use spicebill_core::money::{Money, Quantity};
//! use spicebill_core::types::PriceMap;
//! use chrono::NaiveDate;
//! use indexmap::IndexMap;
//!
//! let mut prices = PriceMap::new();
//! prices.insert("Turmeric".to_string(), Money::from_paise(1000)); // ₹10.00/kg
//!
//! let mut quantities = IndexMap::new();
//! quantities.insert("Turmeric".to_string(), Quantity::from_millis(2000)); // 2 kg
//!
//! let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
//! let invoice = compute_invoice(&prices, &quantities, Money::from_paise(2000), date).unwrap();
//!
//! assert_eq!(invoice.total.paise(), 2000); // ₹20.00
//! assert_eq!(invoice.due.paise(), 0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod billing;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use spicebill_core::Money` instead of
// `use spicebill_core::money::Money`

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{Money, Quantity};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Catalog contents on first run, before any admin has added an item.
///
/// ## Why a constant?
/// The catalog document is created lazily: a fresh installation has no
/// `spices.json` on disk, and the store falls back to this list so the
/// registration form is never empty.
pub const DEFAULT_SPICES: [&str; 4] = ["Turmeric", "Chili", "Coriander", "Cumin"];

//! # Validation Module
//!
//! Input validation for Spicebill.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Client form                                                  │
//! │  ├── Basic format checks (empty, numeric)                              │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Gateway handler (Rust)                                       │
//! │  ├── Type validation (deserialization: finite numbers, valid dates)    │
//! │  └── THIS MODULE: business rule validation, via the stores             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Store invariants                                             │
//! │  ├── Duplicate checks against the loaded document                      │
//! │  └── Persist only after every check passes                             │
//! │                                                                         │
//! │  Defense in depth: multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::{Money, Quantity};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

fn required(field: &str) -> ValidationError {
    ValidationError::Required {
        field: field.to_string(),
    }
}

fn non_negative(field: &str) -> ValidationError {
    ValidationError::MustBeNonNegative {
        field: field.to_string(),
    }
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a spice (catalog item) name.
///
/// ## Rules
/// - Must not be empty or whitespace-only
/// - Case-sensitive as entered; no normalization (the catalog key is
///   the exact string)
///
/// ## Example
/// ```rust
/// use spicebill_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Cardamom").is_ok());
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(required("spice name"));
    }
    Ok(())
}

/// Validates a customer name (the registry's primary key).
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(required("customer name"));
    }
    Ok(())
}

/// Validates a customer address.
pub fn validate_address(address: &str) -> ValidationResult<()> {
    if address.trim().is_empty() {
        return Err(required("address"));
    }
    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed: registration seeds every catalog item at ₹0 until
///   the admin sets real rates
///
/// ## Example
/// ```rust
/// use spicebill_core::money::Money;
/// use spicebill_core::validation::validate_unit_price;
///
/// assert!(validate_unit_price(Money::from_paise(8550)).is_ok());
/// assert!(validate_unit_price(Money::zero()).is_ok());
/// assert!(validate_unit_price(Money::from_paise(-1)).is_err());
/// ```
pub fn validate_unit_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(non_negative("unit price"));
    }
    Ok(())
}

/// Validates a requested quantity.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed - the billing form submits every catalog item and
///   zero-quantity lines are simply skipped
pub fn validate_quantity(qty: Quantity) -> ValidationResult<()> {
    if qty.is_negative() {
        return Err(non_negative("quantity"));
    }
    Ok(())
}

/// Validates an amount received against an invoice.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - May exceed the invoice total: overpayment is valid and produces a
///   negative due
pub fn validate_amount_received(amount: Money) -> ValidationResult<()> {
    if amount.is_negative() {
        return Err(non_negative("amount received"));
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

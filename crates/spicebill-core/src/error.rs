//! # Error Types
//!
//! Domain-specific error types for spicebill-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  spicebill-core errors (this file)                                     │
//! │  ├── CoreError        - Domain rule violations                         │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  spicebill-store errors (separate crate)                               │
//! │  └── StoreError       - Document persistence failures                  │
//! │                                                                         │
//! │  Gateway errors (in app)                                               │
//! │  └── ApiError         - What HTTP clients see (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → ApiError → Client    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (customer name, item, etc.)
//! 3. Errors are enum variants, never String
//! 4. Validation errors are recoverable: the caller re-prompts and retries

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Domain rule violations.
///
/// All variants here are recoverable: the operation is rejected, core
/// state is unchanged, and the caller may retry with corrected input.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The catalog already contains an item with this name.
    ///
    /// ## When This Occurs
    /// - Admin adds a spice whose name is already on the list
    ///   (names are case-sensitive: "chili" and "Chili" are distinct)
    #[error("Spice already exists: {0}")]
    DuplicateItem(String),

    /// A customer with this name is already registered.
    ///
    /// ## When This Occurs
    /// - Registration form submitted twice
    /// - Two customers genuinely share a name (out of scope: names are
    ///   the primary key, so the second needs a distinguishing suffix)
    #[error("Customer already exists: {0}")]
    DuplicateCustomer(String),

    /// The referenced customer is not registered.
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when user input doesn't meet requirements. Used for early
/// validation before domain logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// A numeric value that must be zero or more is negative.
    ///
    /// Covers unit prices, quantities, and amounts received. Note that
    /// a *due* amount may legitimately be negative (overpayment) - dues
    /// are computed, never validated through this path.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

//! # Error Types
//!
//! Domain-specific error types for basket-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  basket-core errors (this file)                                        │
//! │  ├── CoreError        - Money conversion failures                      │
//! │  └── ValidationError  - Malformed catalog entries                      │
//! │                                                                         │
//! │  basket-client errors (separate crate)                                 │
//! │  └── ClientError      - Config, token file, HTTP failures              │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ClientError → Notification        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A float amount cannot be represented as whole cents.
    ///
    /// ## When This Occurs
    /// - The amount is NaN or infinite
    /// - The amount exceeds the `i64` cent range
    #[error("Amount {0} cannot be represented as money")]
    UnrepresentableAmount(f64),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Catalog validation errors.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Price is negative, NaN or infinite.
    #[error("{field} must be a finite, non-negative amount (got {value})")]
    InvalidPrice { field: String, value: f64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

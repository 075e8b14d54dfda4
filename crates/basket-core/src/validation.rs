//! # Validation Module
//!
//! Checks applied to catalog entries before they are cached.
//!
//! The backend is trusted for business rules; this layer only rejects
//! entries that would poison cart math (empty ids, negative or
//! non-finite prices).
//!
//! ## Usage
//! ```rust
//! use basket_core::validation::validate_product;
//! use basket_core::Product;
//!
//! assert!(validate_product(&Product::new("p1", 2.0, 1.5)).is_ok());
//! assert!(validate_product(&Product::new("", 2.0, 1.5)).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::Product;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a catalog product.
///
/// ## Rules
/// - `_id` must not be empty
/// - `price` and `offerPrice` must be finite and non-negative
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    if product.id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "_id".to_string(),
        });
    }

    validate_price("price", product.price)?;
    validate_price("offerPrice", product.offer_price)?;

    Ok(())
}

/// Validates a single price field.
pub fn validate_price(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidPrice {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}

//! # Validation Module
//!
//! Identity-invariant checks for inbound product payloads.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Deserialization (serde)                                      │
//! │  └── Type/shape checks; malformed JSON never reaches this module       │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE - identity invariants                            │
//! │  ├── create: id must be unassigned (0)                                 │
//! │  └── replace: body id must equal path id                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  └── NOT NULL constraints, PRIMARY KEY                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Field values themselves are deliberately unconstrained: the service
//! accepts any text for manufacturer/SKU/UPC/name and any integer for
//! quantity on hand (negative stock represents backorders).

use crate::error::{ValidationError, ValidationResult};
use crate::types::Product;

/// Validates a product payload for a create request.
///
/// The identifier is server-assigned, so the client must send `0` (or omit
/// the field, which deserializes to `0`).
///
/// ## Example
/// ```rust
/// use stockroom_core::{validation::validate_new_product, Product};
///
/// let mut product = Product {
///     product_id: 0,
///     manufacturer: "Acme".into(),
///     sku: "ACM-001".into(),
///     upc: "012345678905".into(),
///     price_per_unit: 9.99,
///     quantity_on_hand: 1,
///     product_name: "Anvil".into(),
/// };
/// assert!(validate_new_product(&product).is_ok());
///
/// product.product_id = 7;
/// assert!(validate_new_product(&product).is_err());
/// ```
pub fn validate_new_product(product: &Product) -> ValidationResult<()> {
    if product.is_persisted() {
        return Err(ValidationError::IdentifierAssigned {
            field: "productId".to_string(),
        });
    }
    Ok(())
}

/// Validates a product payload for a full replace of `path_id`.
///
/// The body must carry the identifier of the row being replaced; a mismatch
/// means the client is confused about which record it is editing.
pub fn validate_replacement(product: &Product, path_id: i64) -> ValidationResult<()> {
    if product.product_id != path_id {
        return Err(ValidationError::IdentifierMismatch {
            field: "productId".to_string(),
            body: product.product_id,
            path: path_id,
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

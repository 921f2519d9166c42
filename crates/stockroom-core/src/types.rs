//! # Domain Types
//!
//! Core domain types used throughout the inventory service.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌──────────────────┐   ┌──────────────────┐   ┌──────────────────┐    │
//! │  │     Product      │   │   ReportFilter   │   │     Receipt      │    │
//! │  │  ──────────────  │   │  ──────────────  │   │  ──────────────  │    │
//! │  │  product_id      │   │  name            │   │  name            │    │
//! │  │  manufacturer    │   │  manufacturer    │   │  upload_date     │    │
//! │  │  sku / upc       │   │  sku             │   └──────────────────┘    │
//! │  │  price_per_unit  │   └──────────────────┘                           │
//! │  │  quantity_on_hand│                                                  │
//! │  │  product_name    │                                                  │
//! │  └──────────────────┘                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity Rules
//! `product_id` is server-assigned (AUTOINCREMENT). A value of `0` means
//! "not yet stored": create requests must carry 0 (or omit the field), and
//! update requests must carry the id of the row being replaced. Receipts
//! have no identity beyond their filename.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Product
// =============================================================================

/// A product tracked by the inventory service.
///
/// The JSON field names are the service's wire format and also match the
/// `products` table columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Server-assigned identifier. `0` means the record has not been stored.
    #[serde(default)]
    pub product_id: i64,

    /// Manufacturer name.
    pub manufacturer: String,

    /// Stock Keeping Unit - business identifier.
    pub sku: String,

    /// Universal Product Code.
    pub upc: String,

    /// Unit price.
    pub price_per_unit: f64,

    /// Quantity on hand. Deliberately a free integer: negative values are
    /// accepted (backorders are represented as negative stock).
    pub quantity_on_hand: i64,

    /// Display name.
    pub product_name: String,
}

impl Product {
    /// Whether this record has been assigned an identifier by the store.
    #[inline]
    pub fn is_persisted(&self) -> bool {
        self.product_id != 0
    }
}

// =============================================================================
// Report Filter
// =============================================================================

/// Substring filters for product search and report generation.
///
/// Every field is optional; an absent field contributes no predicate.
/// Matching is case-insensitive "contains" on the target column, and
/// present filters combine with AND in the fixed order
/// name → manufacturer → SKU.
///
/// ## Wire Format
/// ```json
/// {"productName": "shirt", "manufacturer": "", "sku": "abc"}
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFilter {
    /// Substring filter on the product name.
    #[serde(default, rename = "productName")]
    pub name: String,

    /// Substring filter on the manufacturer.
    #[serde(default)]
    pub manufacturer: String,

    /// Substring filter on the SKU.
    #[serde(default)]
    pub sku: String,
}

impl ReportFilter {
    /// True when no filter is present. The query builder special-cases this
    /// state: an all-empty filter has no legal comparison clause.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.manufacturer.is_empty() && self.sku.is_empty()
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// Metadata for one stored receipt file.
///
/// Receipts are derived from the upload directory, never persisted as rows:
/// name is the filename, upload date is the file's last-modified time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Filename inside the upload directory.
    pub name: String,

    /// Last-modified time of the file.
    pub upload_date: DateTime<Utc>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product {
            product_id: 5,
            manufacturer: "Acme".to_string(),
            sku: "ACM-001".to_string(),
            upc: "012345678905".to_string(),
            price_per_unit: 9.99,
            quantity_on_hand: 42,
            product_name: "Anvil".to_string(),
        }
    }

    #[test]
    fn test_product_wire_format() {
        let json = serde_json::to_value(sample_product()).unwrap();
        assert_eq!(json["productId"], 5);
        assert_eq!(json["manufacturer"], "Acme");
        assert_eq!(json["sku"], "ACM-001");
        assert_eq!(json["upc"], "012345678905");
        assert_eq!(json["pricePerUnit"], 9.99);
        assert_eq!(json["quantityOnHand"], 42);
        assert_eq!(json["productName"], "Anvil");
    }

    #[test]
    fn test_product_id_defaults_to_zero() {
        // Create payloads omit the id entirely
        let product: Product = serde_json::from_str(
            r#"{
                "manufacturer": "Acme",
                "sku": "ACM-001",
                "upc": "012345678905",
                "pricePerUnit": 9.99,
                "quantityOnHand": 42,
                "productName": "Anvil"
            }"#,
        )
        .unwrap();

        assert_eq!(product.product_id, 0);
        assert!(!product.is_persisted());
    }

    #[test]
    fn test_filter_wire_names() {
        let filter: ReportFilter =
            serde_json::from_str(r#"{"productName": "anvil", "sku": "ACM"}"#).unwrap();
        assert_eq!(filter.name, "anvil");
        assert_eq!(filter.manufacturer, "");
        assert_eq!(filter.sku, "ACM");
        assert!(!filter.is_empty());
    }

    #[test]
    fn test_empty_filter() {
        let filter: ReportFilter = serde_json::from_str("{}").unwrap();
        assert!(filter.is_empty());
        assert_eq!(filter, ReportFilter::default());
    }

    #[test]
    fn test_receipt_wire_format() {
        let receipt = Receipt {
            name: "invoice.pdf".to_string(),
            upload_date: DateTime::parse_from_rfc3339("2024-03-01T12:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        };
        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["name"], "invoice.pdf");
        assert!(json["uploadDate"].as_str().unwrap().starts_with("2024-03-01"));
    }
}

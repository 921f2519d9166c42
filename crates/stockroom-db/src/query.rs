//! # Search Predicate Builder
//!
//! Pure construction of the product-search `WHERE` predicate from a
//! [`ReportFilter`]. No I/O: the builder only produces a clause string and
//! a parallel list of bind parameters, which the repository attaches to a
//! runtime-bound statement.
//!
//! ## Predicate Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  filter                         predicate                params        │
//! │  ──────────────────────────     ─────────────────────    ──────────    │
//! │  {}                             1=1                      []            │
//! │  {name: "anvil"}                LOWER(productName)       [%anvil%]     │
//! │                                   LIKE ?                               │
//! │  {name: "a", sku: "B"}          LOWER(productName)       [%a%, %b%]    │
//! │                                   LIKE ? AND                           │
//! │                                 LOWER(sku) LIKE ?                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Present filters contribute in the fixed order name → manufacturer → SKU.
//! Filter values are NEVER interpolated into the statement text; they only
//! ever appear in the parameter list. The all-empty filter gets the
//! tautology `1=1` so the statement stays well-formed (a bare `WHERE` is a
//! syntax error).

use stockroom_core::ReportFilter;

/// A built search predicate: conjunctive clause plus positional parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    clauses: Vec<String>,
    params: Vec<String>,
}

impl SearchQuery {
    /// Builds the predicate for a report filter.
    pub fn from_filter(filter: &ReportFilter) -> Self {
        let mut query = SearchQuery {
            clauses: Vec::new(),
            params: Vec::new(),
        };

        // Fixed order: name, manufacturer, SKU
        query.contains("productName", &filter.name);
        query.contains("manufacturer", &filter.manufacturer);
        query.contains("sku", &filter.sku);
        query
    }

    /// Adds a case-insensitive "contains" comparison for a present filter.
    /// Absent (empty) filters contribute nothing.
    fn contains(&mut self, column: &str, value: &str) {
        if value.is_empty() {
            return;
        }
        self.clauses.push(format!("LOWER({}) LIKE ?", column));
        self.params.push(format!("%{}%", value.to_lowercase()));
    }

    /// The `WHERE` predicate text. `1=1` when no filter is present.
    pub fn predicate(&self) -> String {
        if self.clauses.is_empty() {
            "1=1".to_string()
        } else {
            self.clauses.join(" AND ")
        }
    }

    /// Bind parameters, in clause order.
    pub fn params(&self) -> &[String] {
        &self.params
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

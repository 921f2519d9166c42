//! # stockroom-core: Pure Domain Types for the Inventory Service
//!
//! This crate holds the domain model shared by the database layer and the
//! REST application: the product record, the report filter, receipt
//! metadata, and the identity-validation rules.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Stockroom Data Flow                                │
//! │                                                                         │
//! │  HTTP request (axum handler, apps/rest-api)                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  stockroom-core (THIS CRATE)                                           │
//! │  ├── Product / ReportFilter / Receipt  - wire + domain types           │
//! │  └── validation                        - identity invariants           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  stockroom-db - pooled SQLite, repository, query builder               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Constraint: NO I/O
//! Nothing here opens a file, socket, or database connection. Every function
//! is testable without a runtime.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{ValidationError, ValidationResult};
pub use types::{Product, Receipt, ReportFilter};

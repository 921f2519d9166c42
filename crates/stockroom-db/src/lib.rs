//! # stockroom-db: Database Layer for the Inventory Service
//!
//! This crate provides database access for Stockroom. It uses SQLite for
//! local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Stockroom Data Flow                               │
//! │                                                                         │
//! │  axum handler (GET /api/products, ...)                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    stockroom-db (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐   ┌───────────────┐   ┌──────────────┐    │   │
//! │  │   │   Database    │   │  Repository   │   │  Migrations  │    │   │
//! │  │   │   (pool.rs)   │◄──│ (product.rs)  │   │  (embedded)  │    │   │
//! │  │   │  + deadlines  │   │               │   │ 001_init.sql │    │   │
//! │  │   └───────────────┘   └───────┬───────┘   └──────────────┘    │   │
//! │  │                               │                                │   │
//! │  │                      ┌────────┴───────┐                        │   │
//! │  │                      │  SearchQuery   │  pure predicate        │   │
//! │  │                      │  (query.rs)    │  builder, no I/O       │   │
//! │  │                      └────────────────┘                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database file (or :memory: in tests)                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool, per-statement deadlines, gateway calls
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`query`] - Pure search predicate builder
//! - [`repository`] - Product repository
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stockroom_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("stockroom.db")).await?;
//! let products = db.products().list().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod query;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};
pub use query::SearchQuery;
pub use repository::ProductRepository;

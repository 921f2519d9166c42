//! # Stockroom REST API
//!
//! The HTTP application for the inventory service: resource handlers over
//! the product repository and the receipt file store.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Request Flow                                   │
//! │                                                                         │
//! │  inbound request                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Router (api/) ─── CORS / trace layers                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  handler: parse + validate (stockroom-core)                            │
//! │       │                                                                 │
//! │       ├──► ProductRepository (stockroom-db, 15 s deadline per call)    │
//! │       └──► ReceiptStore (store/, upload directory)                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  serialize result, or map failure via error::ApiError                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod report;
pub mod state;
pub mod store;

pub use api::build_app;
pub use config::ApiConfig;
pub use error::{ApiError, ApiResult};
pub use state::AppState;
pub use store::{ReceiptStore, ReceiptStoreError};

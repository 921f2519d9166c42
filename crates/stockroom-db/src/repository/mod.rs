//! # Repository Module
//!
//! Repository implementations over the storage gateway.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  HTTP Handler                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ProductRepository  ← stateless façade, owns no data                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Database (gateway) ← pool + per-statement deadline                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod product;

pub use product::ProductRepository;

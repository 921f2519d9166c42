//! Shared application state.
//!
//! Built once in `main` and cloned into every handler by axum. Both fields
//! are cheap to clone (the database handle wraps a reference-counted pool,
//! the receipt store is a path). Neither is ever reachable as a global.

use crate::store::ReceiptStore;
use stockroom_db::Database;

/// State injected into every resource handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Storage gateway for the relational store.
    pub db: Database,

    /// Filesystem store for uploaded receipts.
    pub receipts: ReceiptStore,
}

impl AppState {
    /// Creates the application state.
    pub fn new(db: Database, receipts: ReceiptStore) -> Self {
        AppState { db, receipts }
    }
}

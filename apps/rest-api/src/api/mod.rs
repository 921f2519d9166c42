//! # Resource Routing
//!
//! One router per resource, merged into the application router. The route
//! table IS the dispatch table: each (path, verb) pair maps to exactly one
//! handler function, and a verb with no entry gets 405 from the method
//! router without touching handler code.
//!
//! ## Route Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  {base}/products             GET list | POST create                    │
//! │  {base}/products/{id}        GET | PUT | DELETE                        │
//! │  {base}/products/report      POST generate                             │
//! │  {base}/receipts             GET list | POST upload (multipart, 5MiB)  │
//! │  {base}/receipts/{name}      GET download                              │
//! │  /websocket                  GET upgrade (outside the base path)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Cross-origin headers (including preflight answers) come from the
//! permissive CORS layer wrapping the whole router; handlers never set
//! them.

pub mod products;
pub mod receipts;
pub mod report;
pub mod ws;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Builds the full application router with middleware and state applied.
///
/// `base_path` is the REST prefix (default `/api`); the websocket endpoint
/// deliberately sits outside it.
pub fn build_app(state: AppState, base_path: &str) -> Router {
    let resources = Router::new()
        .merge(products::router())
        .merge(report::router())
        .merge(receipts::router());

    Router::new()
        .nest(base_path, resources)
        .merge(ws::router())
        // CORS - answers preflight and stamps every response
        .layer(CorsLayer::permissive())
        // Trace - request/response logging at INFO level
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

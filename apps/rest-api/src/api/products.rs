//! Product resource handlers.
//!
//! CRUD over `/products` and `/products/{id}`. Identity invariants are
//! checked here, before any repository call: create payloads must carry an
//! unassigned id, replace payloads must match the path id. Malformed JSON
//! is a 400, an unparsable path id is a 404 (it can't name any record).

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use stockroom_core::validation::{validate_new_product, validate_replacement};
use stockroom_core::Product;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(list).post(create))
        .route(
            "/products/{id}",
            get(get_by_id).put(update).delete(remove),
        )
}

/// Parses an item-path identifier. A non-integer segment names nothing,
/// which the resource contract reports as 404 rather than 400.
fn parse_id(raw: &str) -> ApiResult<i64> {
    raw.parse()
        .map_err(|_| ApiError::NotFound(format!("product {}", raw)))
}

/// GET /products - list all products
///
/// An empty table serializes as `[]`, never null.
async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Product>>> {
    let products = state.db.products().list().await?;
    Ok(Json(products))
}

/// POST /products - create a new product
async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Product>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(product) = payload.map_err(|e| ApiError::Validation(e.to_string()))?;

    validate_new_product(&product)?;

    let new_id = state.db.products().insert(&product).await?;
    let created = Product {
        product_id: new_id,
        ..product
    };

    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /products/{id} - fetch a single product
async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Product>> {
    let id = parse_id(&id)?;

    let product = state
        .db
        .products()
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("product {}", id)))?;

    Ok(Json(product))
}

/// PUT /products/{id} - full replace of an existing product
async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Product>, JsonRejection>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    let Json(product) = payload.map_err(|e| ApiError::Validation(e.to_string()))?;

    validate_replacement(&product, id)?;

    state.db.products().update(&product).await?;
    Ok(StatusCode::OK)
}

/// DELETE /products/{id} - idempotent removal
///
/// 200 regardless of prior existence.
async fn remove(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;

    state.db.products().remove(id).await?;
    Ok(StatusCode::OK)
}

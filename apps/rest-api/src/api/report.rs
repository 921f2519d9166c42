//! Report generation handler.
//!
//! POST /products/report accepts a [`ReportFilter`], runs the filtered
//! search, and returns the rendered document as a downloadable attachment
//! with a fixed file name. An empty result set is a 404: there is nothing
//! to report.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::report::{render_report, REPORT_FILE_NAME};
use crate::state::AppState;
use stockroom_core::ReportFilter;

pub fn router() -> Router<AppState> {
    Router::new().route("/products/report", post(generate))
}

/// POST /products/report - generate the filtered product report
async fn generate(
    State(state): State<AppState>,
    payload: Result<Json<ReportFilter>, JsonRejection>,
) -> ApiResult<impl IntoResponse> {
    let Json(filter) = payload.map_err(|e| ApiError::Validation(e.to_string()))?;

    let products = state.db.products().search(&filter).await?;
    if products.is_empty() {
        return Err(ApiError::NotFound(
            "no products matched the report filter".to_string(),
        ));
    }

    debug!(count = products.len(), "Rendering product report");
    let document = render_report(&products);

    Ok((
        [
            (header::CONTENT_TYPE, "text/html; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", REPORT_FILE_NAME),
            ),
        ],
        document,
    ))
}

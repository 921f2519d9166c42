//! Receipt resource handlers.
//!
//! Upload is a multipart form with a single `receipt` file field, capped at
//! 5 MiB. Download streams the stored bytes with attachment headers, a
//! sniffed content type, and an exact content length.

use axum::body::Body;
use axum::extract::{DefaultBodyLimit, Multipart, Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use tokio_util::io::ReaderStream;
use tracing::info;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use stockroom_core::Receipt;

/// Upload size cap (5 MiB).
const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Multipart form field carrying the file.
const UPLOAD_FIELD: &str = "receipt";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/receipts", get(list).post(upload))
        .route("/receipts/{name}", get(download))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}

/// GET /receipts - list stored receipts
async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Receipt>>> {
    let receipts = state.receipts.list().await?;
    Ok(Json(receipts))
}

/// POST /receipts - upload one receipt file
///
/// The first `receipt` field wins; an upload without one is a 400. The
/// stored name is the client's filename (validated by the store), and an
/// existing file with that name is overwritten.
async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<StatusCode> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Validation(format!("invalid multipart request: {}", e)))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field
            .file_name()
            .map(str::to_owned)
            .ok_or_else(|| ApiError::Validation("receipt field has no filename".to_string()))?;

        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::Validation(format!("failed to read receipt field: {}", e)))?;

        state.receipts.save(&file_name, &data).await?;

        info!(name = %file_name, size = data.len(), "Receipt uploaded");
        return Ok(StatusCode::CREATED);
    }

    Err(ApiError::Validation(format!(
        "multipart field '{}' is required",
        UPLOAD_FIELD
    )))
}

/// GET /receipts/{name} - download one receipt
async fn download(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let receipt = state.receipts.open(&name).await?;

    let body = Body::from_stream(ReaderStream::new(receipt.file));

    Ok((
        [
            (header::CONTENT_TYPE, receipt.content_type.to_string()),
            (header::CONTENT_LENGTH, receipt.len.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", name),
            ),
        ],
        body,
    ))
}

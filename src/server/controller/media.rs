use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{api::ErrorDto, media::MediaUploadDto},
    server::{
        error::AppError, middleware::auth::AuthGuard, service::media::MediaService,
        state::AppState,
    },
};

pub static MEDIA_TAG: &str = "media";

#[derive(Deserialize, IntoParams)]
pub struct UploadParams {
    /// Original file name; the stored name is sanitized and uniquified from it.
    pub file_name: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/media",
    tag = MEDIA_TAG,
    params(UploadParams),
    request_body(content = Vec<u8>, content_type = "application/octet-stream"),
    responses(
        (status = 201, description = "File stored; served from the returned path", body = MediaUploadDto),
        (status = 400, description = "Empty upload body", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<UploadParams>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let file_name = params.file_name.unwrap_or_else(|| "file".to_string());

    let stored_name = MediaService::new(state.media_dir.as_path())
        .store(&file_name, &body)
        .await?;

    let dto = MediaUploadDto {
        url: format!("/media/{stored_name}"),
        file_name: stored_name,
        size_bytes: body.len() as u64,
    };

    Ok((StatusCode::CREATED, Json(dto)))
}

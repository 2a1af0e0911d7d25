use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        shift::{ShiftDto, StartShiftDto, UpdateShiftDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::shift::{ShiftFilter, UpdateShiftParam},
        service::shift::ShiftService,
        state::AppState,
    },
};

pub static SHIFT_TAG: &str = "shifts";

/// Query parameters for shift listings. The time window applies to the
/// shift start.
#[derive(Deserialize, IntoParams)]
pub struct ShiftFilterParams {
    /// Restrict to one user's shifts. Ignored for non-admins, who always see
    /// only their own.
    pub user_id: Option<i32>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

#[utoipa::path(
    post,
    path = "/api/shifts/start",
    tag = SHIFT_TAG,
    request_body = StartShiftDto,
    responses(
        (status = 201, description = "Shift opened", body = ShiftDto),
        (status = 400, description = "Caller already has an open shift", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a processor", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn start_shift(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<StartShiftDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Processor])
        .await?;

    let shift = ShiftService::new(&state.db)
        .start_shift(&user, payload.note)
        .await?;

    Ok((StatusCode::CREATED, Json(shift.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/shifts/{id}/end",
    tag = SHIFT_TAG,
    params(
        ("id" = i32, Path, description = "Shift ID")
    ),
    responses(
        (status = 200, description = "Shift closed", body = ShiftDto),
        (status = 400, description = "Shift is already closed", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Shift belongs to another user", body = ErrorDto),
        (status = 404, description = "Shift not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn end_shift(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let shift = ShiftService::new(&state.db).end_shift(&user, id).await?;

    Ok((StatusCode::OK, Json(shift.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/shifts",
    tag = SHIFT_TAG,
    params(ShiftFilterParams),
    responses(
        (status = 200, description = "Shifts matching the filter, newest first", body = Vec<ShiftDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_shifts(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(filter): Query<ShiftFilterParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let shifts = ShiftService::new(&state.db)
        .get_shifts(
            &user,
            ShiftFilter {
                user_id: filter.user_id,
                from: filter.from,
                to: filter.to,
            },
        )
        .await?;

    let dtos: Vec<ShiftDto> = shifts.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    put,
    path = "/api/shifts/{id}",
    tag = SHIFT_TAG,
    params(
        ("id" = i32, Path, description = "Shift ID")
    ),
    request_body = UpdateShiftDto,
    responses(
        (status = 200, description = "Adjusted shift", body = ShiftDto),
        (status = 400, description = "End not after start", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Shift not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_shift(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateShiftDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let shift = ShiftService::new(&state.db)
        .update_shift(UpdateShiftParam {
            shift_id: id,
            started_at: payload.started_at,
            ended_at: payload.ended_at,
            note: payload.note,
        })
        .await?;

    Ok((StatusCode::OK, Json(shift.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/shifts/{id}",
    tag = SHIFT_TAG,
    params(
        ("id" = i32, Path, description = "Shift ID")
    ),
    responses(
        (status = 204, description = "Shift deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Shift not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_shift(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    ShiftService::new(&state.db).delete_shift(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

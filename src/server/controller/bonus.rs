use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        bonus::{BonusReportDto, BonusTierDto, CreateBonusTierDto, UpdateBonusTierDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::bonus::{period_from_dto, UpsertBonusTierParam},
        service::bonus::BonusService,
        state::AppState,
    },
};

pub static BONUS_TAG: &str = "bonus";

/// Query parameters for the monthly bonus report.
#[derive(Deserialize, IntoParams)]
pub struct BonusReportParams {
    pub processor_id: i32,
    pub year: i32,
    /// Calendar month, 1 through 12.
    pub month: u32,
}

#[utoipa::path(
    get,
    path = "/api/bonus/tiers",
    tag = BONUS_TAG,
    responses(
        (status = 200, description = "The bonus grid ordered by period and range start", body = Vec<BonusTierDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tiers(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let tiers = BonusService::new(&state.db).get_tiers().await?;

    let dtos: Vec<BonusTierDto> = tiers.into_iter().map(|t| t.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    post,
    path = "/api/bonus/tiers",
    tag = BONUS_TAG,
    request_body = CreateBonusTierDto,
    responses(
        (status = 201, description = "Created tier", body = BonusTierDto),
        (status = 400, description = "Invalid range or negative percentage", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_tier(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateBonusTierDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let tier = BonusService::new(&state.db)
        .create_tier(UpsertBonusTierParam {
            period: period_from_dto(payload.period),
            min_cents: payload.min_cents,
            max_cents: payload.max_cents,
            percent_bps: payload.percent_bps,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(tier.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/bonus/tiers/{id}",
    tag = BONUS_TAG,
    params(
        ("id" = i32, Path, description = "Tier ID")
    ),
    request_body = UpdateBonusTierDto,
    responses(
        (status = 200, description = "Updated tier", body = BonusTierDto),
        (status = 400, description = "Invalid range or negative percentage", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Tier not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_tier(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBonusTierDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let tier = BonusService::new(&state.db)
        .update_tier(
            id,
            UpsertBonusTierParam {
                period: period_from_dto(payload.period),
                min_cents: payload.min_cents,
                max_cents: payload.max_cents,
                percent_bps: payload.percent_bps,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(tier.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/bonus/tiers/{id}",
    tag = BONUS_TAG,
    params(
        ("id" = i32, Path, description = "Tier ID")
    ),
    responses(
        (status = 204, description = "Tier deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Tier not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_tier(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    BonusService::new(&state.db).delete_tier(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/bonus/report",
    tag = BONUS_TAG,
    params(BonusReportParams),
    responses(
        (status = 200, description = "Monthly bonus report for one processor", body = BonusReportDto),
        (status = 400, description = "Invalid year or month", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Processor requesting another processor's report", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_report(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<BonusReportParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let report = BonusService::new(&state.db)
        .monthly_report(&user, params.processor_id, params.year, params.month)
        .await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}

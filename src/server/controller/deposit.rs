use axum::{
    extract::{Query, State},
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
        deposit::{CreateDepositDto, DepositDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::deposit::DepositFilter,
        service::deposit::DepositService,
        state::AppState,
    },
};

pub static DEPOSIT_TAG: &str = "deposits";

/// Query parameters for deposit listings.
#[derive(Deserialize, IntoParams)]
pub struct DepositFilterParams {
    /// Restrict to one processor's deposits. Ignored for non-admins, who
    /// always see only their own.
    pub processor_id: Option<i32>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

#[utoipa::path(
    post,
    path = "/api/deposits",
    tag = DEPOSIT_TAG,
    request_body = CreateDepositDto,
    responses(
        (status = 201, description = "Deposit recorded", body = DepositDto),
        (status = 400, description = "Amount not positive or target user unknown", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Non-admin recording for another processor", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_deposit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateDepositDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Processor])
        .await?;

    let deposit = DepositService::new(&state.db)
        .record_deposit(
            &user,
            payload.processor_id,
            payload.amount_cents,
            payload.deposited_at,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(deposit.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/deposits",
    tag = DEPOSIT_TAG,
    params(DepositFilterParams),
    responses(
        (status = 200, description = "Deposits matching the filter, oldest first", body = Vec<DepositDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_deposits(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(filter): Query<DepositFilterParams>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let deposits = DepositService::new(&state.db)
        .get_deposits(
            &user,
            DepositFilter {
                processor_id: filter.processor_id,
                from: filter.from,
                to: filter.to,
            },
        )
        .await?;

    let dtos: Vec<DepositDto> = deposits.into_iter().map(|d| d.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

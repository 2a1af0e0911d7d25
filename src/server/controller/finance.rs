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
        api::{ErrorDto, PaginationParams},
        finance::{
            CounterpartyDto, CreateCounterpartyDto, CreateFinanceAccountDto,
            CreateFinanceCategoryDto, CreateFinanceTransactionDto, FinanceAccountDto,
            FinanceCategoryDto, FinanceReportDto, FinanceTransactionDto,
            PaginatedTransactionsDto, UpdateFinanceAccountDto, UpdateFinanceTransactionDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::finance::{kind_from_dto, TransactionFilter, UpsertTransactionParam},
        service::finance::FinanceService,
        state::AppState,
    },
};

pub static FINANCE_TAG: &str = "finance";

/// Query parameters for transaction listings, combined with pagination.
#[derive(Deserialize, IntoParams)]
pub struct TransactionFilterParams {
    pub account_id: Option<i32>,
    pub category_id: Option<i32>,
    pub counterparty_id: Option<i32>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

/// Query parameters for the finance report window.
#[derive(Deserialize, IntoParams)]
pub struct ReportParams {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

// Accounts

#[utoipa::path(
    get,
    path = "/api/finance/accounts",
    tag = FINANCE_TAG,
    responses(
        (status = 200, description = "Accounts ordered by name", body = Vec<FinanceAccountDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_accounts(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let accounts = FinanceService::new(&state.db).get_accounts().await?;

    let dtos: Vec<FinanceAccountDto> = accounts.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    post,
    path = "/api/finance/accounts",
    tag = FINANCE_TAG,
    request_body = CreateFinanceAccountDto,
    responses(
        (status = 201, description = "Created account", body = FinanceAccountDto),
        (status = 400, description = "Empty account name", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_account(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateFinanceAccountDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let account = FinanceService::new(&state.db)
        .create_account(payload.name, payload.currency)
        .await?;

    Ok((StatusCode::CREATED, Json(account.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/finance/accounts/{id}",
    tag = FINANCE_TAG,
    params(
        ("id" = i32, Path, description = "Account ID")
    ),
    request_body = UpdateFinanceAccountDto,
    responses(
        (status = 200, description = "Updated account", body = FinanceAccountDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_account(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateFinanceAccountDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let account = FinanceService::new(&state.db)
        .update_account(id, payload.name, payload.currency, payload.archived)
        .await?;

    Ok((StatusCode::OK, Json(account.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/finance/accounts/{id}",
    tag = FINANCE_TAG,
    params(
        ("id" = i32, Path, description = "Account ID")
    ),
    responses(
        (status = 204, description = "Account deleted"),
        (status = 400, description = "Account has transactions; archive it instead", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_account(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    FinanceService::new(&state.db).delete_account(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// Categories

#[utoipa::path(
    get,
    path = "/api/finance/categories",
    tag = FINANCE_TAG,
    responses(
        (status = 200, description = "Categories ordered by name", body = Vec<FinanceCategoryDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_categories(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let categories = FinanceService::new(&state.db).get_categories().await?;

    let dtos: Vec<FinanceCategoryDto> = categories.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    post,
    path = "/api/finance/categories",
    tag = FINANCE_TAG,
    request_body = CreateFinanceCategoryDto,
    responses(
        (status = 201, description = "Created category", body = FinanceCategoryDto),
        (status = 400, description = "Empty category name", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateFinanceCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let category = FinanceService::new(&state.db)
        .create_category(payload.name, kind_from_dto(payload.kind))
        .await?;

    Ok((StatusCode::CREATED, Json(category.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/finance/categories/{id}",
    tag = FINANCE_TAG,
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    request_body = CreateFinanceCategoryDto,
    responses(
        (status = 200, description = "Updated category", body = FinanceCategoryDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CreateFinanceCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let category = FinanceService::new(&state.db)
        .update_category(id, payload.name, kind_from_dto(payload.kind))
        .await?;

    Ok((StatusCode::OK, Json(category.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/finance/categories/{id}",
    tag = FINANCE_TAG,
    params(
        ("id" = i32, Path, description = "Category ID")
    ),
    responses(
        (status = 204, description = "Category deleted; transactions keep a nulled reference"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Category not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    FinanceService::new(&state.db).delete_category(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// Counterparties

#[utoipa::path(
    get,
    path = "/api/finance/counterparties",
    tag = FINANCE_TAG,
    responses(
        (status = 200, description = "Counterparties ordered by name", body = Vec<CounterpartyDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_counterparties(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let counterparties = FinanceService::new(&state.db).get_counterparties().await?;

    let dtos: Vec<CounterpartyDto> = counterparties.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    post,
    path = "/api/finance/counterparties",
    tag = FINANCE_TAG,
    request_body = CreateCounterpartyDto,
    responses(
        (status = 201, description = "Created counterparty", body = CounterpartyDto),
        (status = 400, description = "Empty counterparty name", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_counterparty(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateCounterpartyDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let counterparty = FinanceService::new(&state.db)
        .create_counterparty(payload.name, payload.note)
        .await?;

    Ok((StatusCode::CREATED, Json(counterparty.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/finance/counterparties/{id}",
    tag = FINANCE_TAG,
    params(
        ("id" = i32, Path, description = "Counterparty ID")
    ),
    request_body = CreateCounterpartyDto,
    responses(
        (status = 200, description = "Updated counterparty", body = CounterpartyDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Counterparty not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_counterparty(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<CreateCounterpartyDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let counterparty = FinanceService::new(&state.db)
        .update_counterparty(id, payload.name, payload.note)
        .await?;

    Ok((StatusCode::OK, Json(counterparty.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/finance/counterparties/{id}",
    tag = FINANCE_TAG,
    params(
        ("id" = i32, Path, description = "Counterparty ID")
    ),
    responses(
        (status = 204, description = "Counterparty deleted; transactions keep a nulled reference"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Counterparty not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_counterparty(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    FinanceService::new(&state.db).delete_counterparty(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// Transactions

#[utoipa::path(
    get,
    path = "/api/finance/transactions",
    tag = FINANCE_TAG,
    params(TransactionFilterParams, PaginationParams),
    responses(
        (status = 200, description = "Transactions matching the filter, newest first", body = PaginatedTransactionsDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_transactions(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(filter): Query<TransactionFilterParams>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let page = FinanceService::new(&state.db)
        .get_transactions(
            TransactionFilter {
                account_id: filter.account_id,
                category_id: filter.category_id,
                counterparty_id: filter.counterparty_id,
                from: filter.from,
                to: filter.to,
            },
            pagination.page(),
            pagination.entries(),
        )
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/finance/transactions",
    tag = FINANCE_TAG,
    request_body = CreateFinanceTransactionDto,
    responses(
        (status = 201, description = "Recorded transaction", body = FinanceTransactionDto),
        (status = 400, description = "Zero amount, unknown reference, or sign/kind mismatch", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_transaction(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateFinanceTransactionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let transaction = FinanceService::new(&state.db)
        .create_transaction(UpsertTransactionParam {
            account_id: payload.account_id,
            category_id: payload.category_id,
            counterparty_id: payload.counterparty_id,
            amount_cents: payload.amount_cents,
            occurred_at: payload.occurred_at.unwrap_or_else(chrono::Utc::now),
            note: payload.note,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(transaction.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/finance/transactions/{id}",
    tag = FINANCE_TAG,
    params(
        ("id" = i32, Path, description = "Transaction ID")
    ),
    request_body = UpdateFinanceTransactionDto,
    responses(
        (status = 200, description = "Updated transaction", body = FinanceTransactionDto),
        (status = 400, description = "Zero amount, unknown reference, or sign/kind mismatch", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Transaction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_transaction(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateFinanceTransactionDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let transaction = FinanceService::new(&state.db)
        .update_transaction(
            id,
            UpsertTransactionParam {
                account_id: payload.account_id,
                category_id: payload.category_id,
                counterparty_id: payload.counterparty_id,
                amount_cents: payload.amount_cents,
                occurred_at: payload.occurred_at,
                note: payload.note,
            },
        )
        .await?;

    Ok((StatusCode::OK, Json(transaction.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/finance/transactions/{id}",
    tag = FINANCE_TAG,
    params(
        ("id" = i32, Path, description = "Transaction ID")
    ),
    responses(
        (status = 204, description = "Transaction deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 404, description = "Transaction not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_transaction(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    FinanceService::new(&state.db).delete_transaction(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

// Report

#[utoipa::path(
    get,
    path = "/api/finance/report",
    tag = FINANCE_TAG,
    params(ReportParams),
    responses(
        (status = 200, description = "Category totals, account balances, and window totals", body = FinanceReportDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_report(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ReportParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::Admin])
        .await?;

    let report = FinanceService::new(&state.db)
        .report(params.from, params.to)
        .await?;

    Ok((StatusCode::OK, Json(report.into_dto())))
}

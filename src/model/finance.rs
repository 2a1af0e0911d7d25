use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum CategoryKindDto {
    Income,
    Expense,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct FinanceAccountDto {
    pub id: i32,
    pub name: String,
    pub currency: String,
    pub archived: bool,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct CreateFinanceAccountDto {
    pub name: String,
    pub currency: String,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct UpdateFinanceAccountDto {
    pub name: String,
    pub currency: String,
    pub archived: bool,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct FinanceCategoryDto {
    pub id: i32,
    pub name: String,
    pub kind: CategoryKindDto,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct CreateFinanceCategoryDto {
    pub name: String,
    pub kind: CategoryKindDto,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct CounterpartyDto {
    pub id: i32,
    pub name: String,
    pub note: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct CreateCounterpartyDto {
    pub name: String,
    pub note: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct FinanceTransactionDto {
    pub id: i32,
    pub account_id: i32,
    pub category_id: Option<i32>,
    pub counterparty_id: Option<i32>,
    /// Signed amount in cents: positive income, negative expense.
    pub amount_cents: i64,
    pub occurred_at: DateTime<Utc>,
    pub note: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct CreateFinanceTransactionDto {
    pub account_id: i32,
    pub category_id: Option<i32>,
    pub counterparty_id: Option<i32>,
    pub amount_cents: i64,
    pub occurred_at: Option<DateTime<Utc>>,
    pub note: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct UpdateFinanceTransactionDto {
    pub account_id: i32,
    pub category_id: Option<i32>,
    pub counterparty_id: Option<i32>,
    pub amount_cents: i64,
    pub occurred_at: DateTime<Utc>,
    pub note: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct PaginatedTransactionsDto {
    pub transactions: Vec<FinanceTransactionDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct CategoryTotalDto {
    pub category_id: Option<i32>,
    pub category_name: Option<String>,
    pub kind: Option<CategoryKindDto>,
    /// Window total for the category, in whole currency units.
    pub total: Decimal,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct AccountBalanceDto {
    pub account_id: i32,
    pub account_name: String,
    pub currency: String,
    pub balance: Decimal,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct FinanceReportDto {
    pub categories: Vec<CategoryTotalDto>,
    pub accounts: Vec<AccountBalanceDto>,
    pub income_total: Decimal,
    pub expense_total: Decimal,
    pub net: Decimal,
}

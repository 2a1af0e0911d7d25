//! Finance domain models and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::CategoryKind;
use rust_decimal::Decimal;

use crate::model::finance::{
    AccountBalanceDto, CategoryKindDto, CategoryTotalDto, CounterpartyDto, FinanceAccountDto,
    FinanceCategoryDto, FinanceReportDto, FinanceTransactionDto, PaginatedTransactionsDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct FinanceAccount {
    pub id: i32,
    pub name: String,
    pub currency: String,
    pub archived: bool,
}

impl FinanceAccount {
    pub fn into_dto(self) -> FinanceAccountDto {
        FinanceAccountDto {
            id: self.id,
            name: self.name,
            currency: self.currency,
            archived: self.archived,
        }
    }

    pub fn from_entity(entity: entity::finance_account::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            currency: entity.currency,
            archived: entity.archived,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FinanceCategory {
    pub id: i32,
    pub name: String,
    pub kind: CategoryKind,
}

impl FinanceCategory {
    pub fn into_dto(self) -> FinanceCategoryDto {
        FinanceCategoryDto {
            id: self.id,
            name: self.name,
            kind: kind_to_dto(self.kind),
        }
    }

    pub fn from_entity(entity: entity::finance_category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            kind: entity.kind,
        }
    }
}

pub fn kind_to_dto(kind: CategoryKind) -> CategoryKindDto {
    match kind {
        CategoryKind::Income => CategoryKindDto::Income,
        CategoryKind::Expense => CategoryKindDto::Expense,
    }
}

pub fn kind_from_dto(kind: CategoryKindDto) -> CategoryKind {
    match kind {
        CategoryKindDto::Income => CategoryKind::Income,
        CategoryKindDto::Expense => CategoryKind::Expense,
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Counterparty {
    pub id: i32,
    pub name: String,
    pub note: Option<String>,
}

impl Counterparty {
    pub fn into_dto(self) -> CounterpartyDto {
        CounterpartyDto {
            id: self.id,
            name: self.name,
            note: self.note,
        }
    }

    pub fn from_entity(entity: entity::counterparty::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            note: entity.note,
        }
    }
}

/// A ledger entry against an account. Positive amounts are income,
/// negative amounts expense.
#[derive(Debug, Clone, PartialEq)]
pub struct FinanceTransaction {
    pub id: i32,
    pub account_id: i32,
    pub category_id: Option<i32>,
    pub counterparty_id: Option<i32>,
    pub amount_cents: i64,
    pub occurred_at: DateTime<Utc>,
    pub note: Option<String>,
}

impl FinanceTransaction {
    pub fn into_dto(self) -> FinanceTransactionDto {
        FinanceTransactionDto {
            id: self.id,
            account_id: self.account_id,
            category_id: self.category_id,
            counterparty_id: self.counterparty_id,
            amount_cents: self.amount_cents,
            occurred_at: self.occurred_at,
            note: self.note,
        }
    }

    pub fn from_entity(entity: entity::finance_transaction::Model) -> Self {
        Self {
            id: entity.id,
            account_id: entity.account_id,
            category_id: entity.category_id,
            counterparty_id: entity.counterparty_id,
            amount_cents: entity.amount_cents,
            occurred_at: entity.occurred_at,
            note: entity.note,
        }
    }
}

/// Parameters for creating or replacing a transaction.
#[derive(Debug, Clone)]
pub struct UpsertTransactionParam {
    pub account_id: i32,
    pub category_id: Option<i32>,
    pub counterparty_id: Option<i32>,
    pub amount_cents: i64,
    pub occurred_at: DateTime<Utc>,
    pub note: Option<String>,
}

/// Filter for transaction listings.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub account_id: Option<i32>,
    pub category_id: Option<i32>,
    pub counterparty_id: Option<i32>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedTransactions {
    pub transactions: Vec<FinanceTransaction>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedTransactions {
    pub fn into_dto(self) -> PaginatedTransactionsDto {
        PaginatedTransactionsDto {
            transactions: self.transactions.into_iter().map(|t| t.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Window total for one category (or uncategorized when `category` is None).
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: Option<FinanceCategory>,
    pub total: Decimal,
}

/// Balance of one account.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountBalance {
    pub account: FinanceAccount,
    pub balance: Decimal,
}

/// Aggregated finance report for a time window.
#[derive(Debug, Clone, PartialEq)]
pub struct FinanceReport {
    pub categories: Vec<CategoryTotal>,
    pub accounts: Vec<AccountBalance>,
    pub income_total: Decimal,
    pub expense_total: Decimal,
    pub net: Decimal,
}

impl FinanceReport {
    pub fn into_dto(self) -> FinanceReportDto {
        FinanceReportDto {
            categories: self
                .categories
                .into_iter()
                .map(|c| match c.category {
                    Some(category) => CategoryTotalDto {
                        category_id: Some(category.id),
                        category_name: Some(category.name),
                        kind: Some(kind_to_dto(category.kind)),
                        total: c.total,
                    },
                    None => CategoryTotalDto {
                        category_id: None,
                        category_name: None,
                        kind: None,
                        total: c.total,
                    },
                })
                .collect(),
            accounts: self
                .accounts
                .into_iter()
                .map(|a| AccountBalanceDto {
                    account_id: a.account.id,
                    account_name: a.account.name,
                    currency: a.account.currency,
                    balance: a.balance,
                })
                .collect(),
            income_total: self.income_total,
            expense_total: self.expense_total,
            net: self.net,
        }
    }
}

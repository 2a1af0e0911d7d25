//! Finance ledger service.
//!
//! Accounts, categories, counterparties, and signed transactions. Amounts are
//! stored in cents; positive is income, negative is expense, and when a
//! transaction carries a category the sign must agree with the category kind.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::CategoryKind;
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::server::{
    data::{
        counterparty::CounterpartyRepository, finance_account::FinanceAccountRepository,
        finance_category::FinanceCategoryRepository,
        finance_transaction::FinanceTransactionRepository,
    },
    error::AppError,
    model::finance::{
        AccountBalance, CategoryTotal, Counterparty, FinanceAccount, FinanceCategory,
        FinanceReport, FinanceTransaction, PaginatedTransactions, TransactionFilter,
        UpsertTransactionParam,
    },
};

/// Service handling the finance ledger. All routes into it are admin-only.
pub struct FinanceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FinanceService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    // Accounts

    pub async fn get_accounts(&self) -> Result<Vec<FinanceAccount>, AppError> {
        let accounts = FinanceAccountRepository::new(self.db).get_all().await?;

        Ok(accounts)
    }

    pub async fn create_account(
        &self,
        name: String,
        currency: String,
    ) -> Result<FinanceAccount, AppError> {
        if name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Account name must not be empty".to_string(),
            ));
        }

        let account = FinanceAccountRepository::new(self.db)
            .create(name, currency)
            .await?;

        Ok(account)
    }

    pub async fn update_account(
        &self,
        account_id: i32,
        name: String,
        currency: String,
        archived: bool,
    ) -> Result<FinanceAccount, AppError> {
        let account = FinanceAccountRepository::new(self.db)
            .update(account_id, name, currency, archived)
            .await?
            .ok_or_else(|| AppError::NotFound("Account not found".to_string()))?;

        Ok(account)
    }

    /// Deletes an account without history.
    ///
    /// # Returns
    /// - `Ok(())` - Account deleted
    /// - `Err(AppError::BadRequest)` - Account has transactions; archive it instead
    /// - `Err(AppError::NotFound)` - No account with that id
    pub async fn delete_account(&self, account_id: i32) -> Result<(), AppError> {
        let tx_count = FinanceTransactionRepository::new(self.db)
            .count_by_account(account_id)
            .await?;

        if tx_count > 0 {
            return Err(AppError::BadRequest(
                "Account has transactions; archive it instead of deleting".to_string(),
            ));
        }

        let deleted = FinanceAccountRepository::new(self.db)
            .delete(account_id)
            .await?;

        if !deleted {
            return Err(AppError::NotFound("Account not found".to_string()));
        }

        Ok(())
    }

    // Categories

    pub async fn get_categories(&self) -> Result<Vec<FinanceCategory>, AppError> {
        let categories = FinanceCategoryRepository::new(self.db).get_all().await?;

        Ok(categories)
    }

    pub async fn create_category(
        &self,
        name: String,
        kind: CategoryKind,
    ) -> Result<FinanceCategory, AppError> {
        if name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Category name must not be empty".to_string(),
            ));
        }

        let category = FinanceCategoryRepository::new(self.db)
            .create(name, kind)
            .await?;

        Ok(category)
    }

    pub async fn update_category(
        &self,
        category_id: i32,
        name: String,
        kind: CategoryKind,
    ) -> Result<FinanceCategory, AppError> {
        let category = FinanceCategoryRepository::new(self.db)
            .update(category_id, name, kind)
            .await?
            .ok_or_else(|| AppError::NotFound("Category not found".to_string()))?;

        Ok(category)
    }

    /// Deletes a category. Transactions referencing it keep running with a
    /// nulled category (`ON DELETE SET NULL`).
    pub async fn delete_category(&self, category_id: i32) -> Result<(), AppError> {
        let deleted = FinanceCategoryRepository::new(self.db)
            .delete(category_id)
            .await?;

        if !deleted {
            return Err(AppError::NotFound("Category not found".to_string()));
        }

        Ok(())
    }

    // Counterparties

    pub async fn get_counterparties(&self) -> Result<Vec<Counterparty>, AppError> {
        let counterparties = CounterpartyRepository::new(self.db).get_all().await?;

        Ok(counterparties)
    }

    pub async fn create_counterparty(
        &self,
        name: String,
        note: Option<String>,
    ) -> Result<Counterparty, AppError> {
        if name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Counterparty name must not be empty".to_string(),
            ));
        }

        let counterparty = CounterpartyRepository::new(self.db).create(name, note).await?;

        Ok(counterparty)
    }

    pub async fn update_counterparty(
        &self,
        counterparty_id: i32,
        name: String,
        note: Option<String>,
    ) -> Result<Counterparty, AppError> {
        let counterparty = CounterpartyRepository::new(self.db)
            .update(counterparty_id, name, note)
            .await?
            .ok_or_else(|| AppError::NotFound("Counterparty not found".to_string()))?;

        Ok(counterparty)
    }

    pub async fn delete_counterparty(&self, counterparty_id: i32) -> Result<(), AppError> {
        let deleted = CounterpartyRepository::new(self.db)
            .delete(counterparty_id)
            .await?;

        if !deleted {
            return Err(AppError::NotFound("Counterparty not found".to_string()));
        }

        Ok(())
    }

    // Transactions

    /// Lists transactions matching the filter, newest first, paginated.
    pub async fn get_transactions(
        &self,
        filter: TransactionFilter,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedTransactions, AppError> {
        let transactions = FinanceTransactionRepository::new(self.db)
            .list_paginated(filter, page, per_page)
            .await?;

        Ok(transactions)
    }

    /// Records a transaction.
    ///
    /// # Returns
    /// - `Ok(FinanceTransaction)` - The recorded transaction
    /// - `Err(AppError::BadRequest)` - Zero amount, unknown references, or
    ///   sign disagreeing with the category kind
    pub async fn create_transaction(
        &self,
        param: UpsertTransactionParam,
    ) -> Result<FinanceTransaction, AppError> {
        self.validate_transaction(&param).await?;

        let transaction = FinanceTransactionRepository::new(self.db)
            .create(param)
            .await?;

        Ok(transaction)
    }

    /// Replaces a transaction's fields.
    pub async fn update_transaction(
        &self,
        tx_id: i32,
        param: UpsertTransactionParam,
    ) -> Result<FinanceTransaction, AppError> {
        self.validate_transaction(&param).await?;

        let transaction = FinanceTransactionRepository::new(self.db)
            .update(tx_id, param)
            .await?
            .ok_or_else(|| AppError::NotFound("Transaction not found".to_string()))?;

        Ok(transaction)
    }

    pub async fn delete_transaction(&self, tx_id: i32) -> Result<(), AppError> {
        let deleted = FinanceTransactionRepository::new(self.db)
            .delete(tx_id)
            .await?;

        if !deleted {
            return Err(AppError::NotFound("Transaction not found".to_string()));
        }

        Ok(())
    }

    /// Builds the finance report for a time window.
    ///
    /// Category totals cover transactions inside `[from, to)`. Account balances
    /// are all-time sums as of `to` (or now, when open-ended), so they reflect
    /// real holdings rather than window deltas. Income, expense, and net totals
    /// cover the window.
    pub async fn report(
        &self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<FinanceReport, AppError> {
        let transactions = FinanceTransactionRepository::new(self.db)
            .list_until(to)
            .await?;

        let accounts = FinanceAccountRepository::new(self.db).get_all().await?;
        let categories = FinanceCategoryRepository::new(self.db).get_all().await?;
        let categories_by_id: HashMap<i32, &FinanceCategory> =
            categories.iter().map(|c| (c.id, c)).collect();

        let mut account_cents: HashMap<i32, i64> = HashMap::new();
        let mut category_cents: HashMap<Option<i32>, i64> = HashMap::new();
        let mut income_cents = 0i64;
        let mut expense_cents = 0i64;

        for tx in &transactions {
            *account_cents.entry(tx.account_id).or_default() += tx.amount_cents;

            let in_window = from.is_none_or(|from| tx.occurred_at >= from);
            if !in_window {
                continue;
            }

            *category_cents.entry(tx.category_id).or_default() += tx.amount_cents;

            if tx.amount_cents >= 0 {
                income_cents += tx.amount_cents;
            } else {
                expense_cents += -tx.amount_cents;
            }
        }

        let mut category_totals: Vec<CategoryTotal> = category_cents
            .into_iter()
            .map(|(category_id, cents)| CategoryTotal {
                category: category_id
                    .and_then(|id| categories_by_id.get(&id))
                    .map(|&c| c.clone()),
                total: cents_to_decimal(cents),
            })
            .collect();

        // Stable output order: named categories alphabetically, uncategorized last.
        category_totals.sort_by(|a, b| match (&a.category, &b.category) {
            (Some(a), Some(b)) => a.name.cmp(&b.name),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        });

        let account_balances = accounts
            .into_iter()
            .map(|account| {
                let cents = account_cents.get(&account.id).copied().unwrap_or(0);
                AccountBalance {
                    account,
                    balance: cents_to_decimal(cents),
                }
            })
            .collect();

        Ok(FinanceReport {
            categories: category_totals,
            accounts: account_balances,
            income_total: cents_to_decimal(income_cents),
            expense_total: cents_to_decimal(expense_cents),
            net: cents_to_decimal(income_cents - expense_cents),
        })
    }

    async fn validate_transaction(&self, param: &UpsertTransactionParam) -> Result<(), AppError> {
        if param.amount_cents == 0 {
            return Err(AppError::BadRequest(
                "Transaction amount must not be zero".to_string(),
            ));
        }

        if FinanceAccountRepository::new(self.db)
            .find_by_id(param.account_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "No account with id {}",
                param.account_id
            )));
        }

        if let Some(category_id) = param.category_id {
            let category = FinanceCategoryRepository::new(self.db)
                .find_by_id(category_id)
                .await?
                .ok_or_else(|| {
                    AppError::BadRequest(format!("No category with id {category_id}"))
                })?;

            let sign_matches = match category.kind {
                CategoryKind::Income => param.amount_cents > 0,
                CategoryKind::Expense => param.amount_cents < 0,
            };

            if !sign_matches {
                return Err(AppError::BadRequest(
                    "Transaction sign does not match the category kind".to_string(),
                ));
            }
        }

        if let Some(counterparty_id) = param.counterparty_id {
            if CounterpartyRepository::new(self.db)
                .find_by_id(counterparty_id)
                .await?
                .is_none()
            {
                return Err(AppError::BadRequest(format!(
                    "No counterparty with id {counterparty_id}"
                )));
            }
        }

        Ok(())
    }
}

fn cents_to_decimal(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

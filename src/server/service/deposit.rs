//! Deposit recording service.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{deposit::DepositRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        deposit::{CreateDepositParam, Deposit, DepositFilter},
        user::User,
    },
};

/// Service handling deposit recording and listing.
pub struct DepositService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DepositService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a deposit.
    ///
    /// A processor records against themselves; an admin may record for any
    /// processor by passing `processor_id`.
    ///
    /// # Returns
    /// - `Ok(Deposit)` - The recorded deposit
    /// - `Err(AppError::BadRequest)` - Amount not positive, or target user missing
    /// - `Err(AppError::AuthErr(AccessDenied))` - Non-admin recording for another user
    pub async fn record_deposit(
        &self,
        caller: &User,
        processor_id: Option<i32>,
        amount_cents: i64,
        deposited_at: Option<DateTime<Utc>>,
    ) -> Result<Deposit, AppError> {
        if amount_cents <= 0 {
            return Err(AppError::BadRequest(
                "Deposit amount must be positive".to_string(),
            ));
        }

        let target_id = processor_id.unwrap_or(caller.id);

        if target_id != caller.id {
            if !caller.is_admin() {
                return Err(AuthError::AccessDenied(
                    caller.id,
                    format!("attempted to record a deposit for user {target_id}"),
                )
                .into());
            }

            if UserRepository::new(self.db)
                .find_by_id(target_id)
                .await?
                .is_none()
            {
                return Err(AppError::BadRequest(format!(
                    "No user with id {target_id}"
                )));
            }
        }

        let deposit = DepositRepository::new(self.db)
            .create(CreateDepositParam {
                processor_id: target_id,
                amount_cents,
                deposited_at: deposited_at.unwrap_or_else(Utc::now),
            })
            .await?;

        Ok(deposit)
    }

    /// Lists deposits matching the filter, oldest first.
    ///
    /// Non-admins are pinned to their own deposits regardless of the filter.
    pub async fn get_deposits(
        &self,
        caller: &User,
        mut filter: DepositFilter,
    ) -> Result<Vec<Deposit>, AppError> {
        if !caller.is_admin() {
            filter.processor_id = Some(caller.id);
        }

        let deposits = DepositRepository::new(self.db).list(filter).await?;

        Ok(deposits)
    }
}

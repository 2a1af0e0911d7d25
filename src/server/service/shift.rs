//! Shift tracking service.
//!
//! Lifecycle rules for processor shifts: at most one open shift per user, a
//! closed shift stays closed, and non-admins only ever see or touch their own
//! records.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::shift::ShiftRepository,
    error::{auth::AuthError, AppError},
    model::{
        shift::{Shift, ShiftFilter, StartShiftParam, UpdateShiftParam},
        user::User,
    },
};

/// Service handling shift lifecycle and visibility.
pub struct ShiftService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShiftService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens a shift for the caller.
    ///
    /// # Returns
    /// - `Ok(Shift)` - The opened shift
    /// - `Err(AppError::BadRequest)` - Caller already has an open shift
    pub async fn start_shift(&self, caller: &User, note: Option<String>) -> Result<Shift, AppError> {
        let shift_repo = ShiftRepository::new(self.db);

        if shift_repo.find_open_by_user(caller.id).await?.is_some() {
            return Err(AppError::BadRequest(
                "You already have an open shift".to_string(),
            ));
        }

        let shift = shift_repo
            .create(StartShiftParam {
                user_id: caller.id,
                started_at: Utc::now(),
                note,
            })
            .await?;

        Ok(shift)
    }

    /// Closes a shift at the current time.
    ///
    /// Non-admins may only close their own shift.
    ///
    /// # Returns
    /// - `Ok(Shift)` - The closed shift
    /// - `Err(AppError::NotFound)` - No shift with that id
    /// - `Err(AppError::AuthErr(AccessDenied))` - Shift belongs to another user
    /// - `Err(AppError::BadRequest)` - Shift is already closed
    pub async fn end_shift(&self, caller: &User, shift_id: i32) -> Result<Shift, AppError> {
        let shift_repo = ShiftRepository::new(self.db);

        let shift = shift_repo
            .find_by_id(shift_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Shift not found".to_string()))?;

        if !caller.is_admin() && shift.user_id != caller.id {
            return Err(AuthError::AccessDenied(
                caller.id,
                format!("attempted to close shift {} of user {}", shift.id, shift.user_id),
            )
            .into());
        }

        if !shift.is_open() {
            return Err(AppError::BadRequest("Shift is already closed".to_string()));
        }

        let closed = shift_repo
            .end(shift_id, Utc::now())
            .await?
            .ok_or_else(|| AppError::NotFound("Shift not found".to_string()))?;

        Ok(closed)
    }

    /// Lists shifts matching the filter, newest first.
    ///
    /// Non-admins are pinned to their own shifts regardless of the filter.
    pub async fn get_shifts(&self, caller: &User, mut filter: ShiftFilter) -> Result<Vec<Shift>, AppError> {
        if !caller.is_admin() {
            filter.user_id = Some(caller.id);
        }

        let shifts = ShiftRepository::new(self.db).list(filter).await?;

        Ok(shifts)
    }

    /// Adjusts a shift's interval and note. Admin-only route.
    ///
    /// # Returns
    /// - `Ok(Shift)` - Updated shift
    /// - `Err(AppError::BadRequest)` - `ended_at` not after `started_at`
    /// - `Err(AppError::NotFound)` - No shift with that id
    pub async fn update_shift(&self, param: UpdateShiftParam) -> Result<Shift, AppError> {
        if let Some(ended_at) = param.ended_at {
            if ended_at <= param.started_at {
                return Err(AppError::BadRequest(
                    "Shift end must be after its start".to_string(),
                ));
            }
        }

        let shift = ShiftRepository::new(self.db)
            .update(param)
            .await?
            .ok_or_else(|| AppError::NotFound("Shift not found".to_string()))?;

        Ok(shift)
    }

    /// Deletes a shift record. Admin-only route.
    pub async fn delete_shift(&self, shift_id: i32) -> Result<(), AppError> {
        let deleted = ShiftRepository::new(self.db).delete(shift_id).await?;

        if !deleted {
            return Err(AppError::NotFound("Shift not found".to_string()));
        }

        Ok(())
    }
}

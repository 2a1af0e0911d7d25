//! Shift data repository for database operations.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::shift::{Shift, ShiftFilter, StartShiftParam, UpdateShiftParam};

/// Repository providing database operations for processor shifts.
pub struct ShiftRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ShiftRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Opens a new shift.
    pub async fn create(&self, param: StartShiftParam) -> Result<Shift, DbErr> {
        let entity = entity::prelude::Shift::insert(entity::shift::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            started_at: ActiveValue::Set(param.started_at),
            ended_at: ActiveValue::Set(None),
            note: ActiveValue::Set(param.note),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(Shift::from_entity(entity))
    }

    pub async fn find_by_id(&self, shift_id: i32) -> Result<Option<Shift>, DbErr> {
        let entity = entity::prelude::Shift::find_by_id(shift_id)
            .one(self.db)
            .await?;

        Ok(entity.map(Shift::from_entity))
    }

    /// Finds a user's currently open shift, if any.
    ///
    /// The service layer enforces one open shift per user, so at most one row
    /// can match.
    pub async fn find_open_by_user(&self, user_id: i32) -> Result<Option<Shift>, DbErr> {
        let entity = entity::prelude::Shift::find()
            .filter(entity::shift::Column::UserId.eq(user_id))
            .filter(entity::shift::Column::EndedAt.is_null())
            .one(self.db)
            .await?;

        Ok(entity.map(Shift::from_entity))
    }

    /// Closes a shift at the given timestamp.
    ///
    /// # Returns
    /// - `Ok(Some(Shift))` - Closed shift
    /// - `Ok(None)` - No shift with that id
    pub async fn end(&self, shift_id: i32, ended_at: DateTime<Utc>) -> Result<Option<Shift>, DbErr> {
        let Some(existing) = entity::prelude::Shift::find_by_id(shift_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::shift::ActiveModel = existing.into();
        active.ended_at = ActiveValue::Set(Some(ended_at));

        let updated = entity::prelude::Shift::update(active).exec(self.db).await?;

        Ok(Some(Shift::from_entity(updated)))
    }

    /// Replaces a shift's interval and note.
    pub async fn update(&self, param: UpdateShiftParam) -> Result<Option<Shift>, DbErr> {
        let Some(existing) = entity::prelude::Shift::find_by_id(param.shift_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::shift::ActiveModel = existing.into();
        active.started_at = ActiveValue::Set(param.started_at);
        active.ended_at = ActiveValue::Set(param.ended_at);
        active.note = ActiveValue::Set(param.note);

        let updated = entity::prelude::Shift::update(active).exec(self.db).await?;

        Ok(Some(Shift::from_entity(updated)))
    }

    pub async fn delete(&self, shift_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Shift::delete_by_id(shift_id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Lists shifts matching the filter, newest first.
    ///
    /// The time window applies to `started_at`.
    pub async fn list(&self, filter: ShiftFilter) -> Result<Vec<Shift>, DbErr> {
        let mut query = entity::prelude::Shift::find();

        if let Some(user_id) = filter.user_id {
            query = query.filter(entity::shift::Column::UserId.eq(user_id));
        }
        if let Some(from) = filter.from {
            query = query.filter(entity::shift::Column::StartedAt.gte(from));
        }
        if let Some(to) = filter.to {
            query = query.filter(entity::shift::Column::StartedAt.lt(to));
        }

        let shifts = query
            .order_by_desc(entity::shift::Column::StartedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(Shift::from_entity)
            .collect();

        Ok(shifts)
    }
}

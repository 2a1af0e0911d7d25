//! Shift factory for creating test work shift entities.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test shifts with customizable fields.
///
/// Shifts are created open (no end timestamp) by default. Use `ended_at`
/// to create a closed shift.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::shift::ShiftFactory;
///
/// let shift = ShiftFactory::new(&db, user.id)
///     .ended_at(Some(Utc::now()))
///     .note(Some("night shift"))
///     .build()
///     .await?;
/// ```
pub struct ShiftFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
    note: Option<String>,
}

impl<'a> ShiftFactory<'a> {
    /// Creates a new ShiftFactory with default values.
    ///
    /// Defaults:
    /// - started_at: current time
    /// - ended_at: `None` (open shift)
    /// - note: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - ID of the user working the shift
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            started_at: Utc::now(),
            ended_at: None,
            note: None,
        }
    }

    /// Sets the start timestamp for the shift.
    pub fn started_at(mut self, started_at: DateTime<Utc>) -> Self {
        self.started_at = started_at;
        self
    }

    /// Sets the end timestamp for the shift.
    pub fn ended_at(mut self, ended_at: Option<DateTime<Utc>>) -> Self {
        self.ended_at = ended_at;
        self
    }

    /// Sets the free-form note for the shift.
    pub fn note(mut self, note: Option<impl Into<String>>) -> Self {
        self.note = note.map(Into::into);
        self
    }

    /// Builds and inserts the shift entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::shift::Model)` - Created shift entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::shift::Model, DbErr> {
        entity::shift::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.user_id),
            started_at: ActiveValue::Set(self.started_at),
            ended_at: ActiveValue::Set(self.ended_at),
            note: ActiveValue::Set(self.note),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open shift for the given user with default values.
///
/// Shorthand for `ShiftFactory::new(db, user_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of the user working the shift
///
/// # Returns
/// - `Ok(entity::shift::Model)` - Created shift entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_shift(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::shift::Model, DbErr> {
    ShiftFactory::new(db, user_id).build().await
}

//! Shift domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::shift::ShiftDto;

/// A worked interval for a deposit processor.
///
/// `ended_at` is `None` while the shift is open. Duration is derived, never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Shift {
    pub id: i32,
    pub user_id: i32,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub note: Option<String>,
}

impl Shift {
    pub fn into_dto(self) -> ShiftDto {
        let duration_minutes = self
            .ended_at
            .map(|ended| (ended - self.started_at).num_minutes());

        ShiftDto {
            id: self.id,
            user_id: self.user_id,
            started_at: self.started_at,
            ended_at: self.ended_at,
            duration_minutes,
            note: self.note,
        }
    }

    pub fn from_entity(entity: entity::shift::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            started_at: entity.started_at,
            ended_at: entity.ended_at,
            note: entity.note,
        }
    }

    pub fn is_open(&self) -> bool {
        self.ended_at.is_none()
    }
}

/// Parameters for opening a shift.
#[derive(Debug, Clone)]
pub struct StartShiftParam {
    pub user_id: i32,
    pub started_at: DateTime<Utc>,
    pub note: Option<String>,
}

/// Parameters for an admin adjusting a shift record.
#[derive(Debug, Clone)]
pub struct UpdateShiftParam {
    pub shift_id: i32,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub note: Option<String>,
}

/// Filter for shift listings.
#[derive(Debug, Clone, Default)]
pub struct ShiftFilter {
    pub user_id: Option<i32>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

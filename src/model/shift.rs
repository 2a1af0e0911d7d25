use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct ShiftDto {
    pub id: i32,
    pub user_id: i32,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    /// Worked minutes, present once the shift is closed.
    pub duration_minutes: Option<i64>,
    pub note: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct StartShiftDto {
    pub note: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct UpdateShiftDto {
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub note: Option<String>,
}

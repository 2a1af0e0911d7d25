use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct DepositDto {
    pub id: i32,
    pub processor_id: i32,
    pub amount_cents: i64,
    pub deposited_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, ToSchema)]
pub struct CreateDepositDto {
    /// Processor to record the deposit for. Defaults to the caller;
    /// only admins may record for another processor.
    pub processor_id: Option<i32>,
    pub amount_cents: i64,
    /// Defaults to the current time when omitted.
    pub deposited_at: Option<DateTime<Utc>>,
}

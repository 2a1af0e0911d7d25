//! Deposit domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::deposit::DepositDto;

/// A single processed deposit attributed to a processor.
#[derive(Debug, Clone, PartialEq)]
pub struct Deposit {
    pub id: i32,
    pub processor_id: i32,
    pub amount_cents: i64,
    pub deposited_at: DateTime<Utc>,
}

impl Deposit {
    pub fn into_dto(self) -> DepositDto {
        DepositDto {
            id: self.id,
            processor_id: self.processor_id,
            amount_cents: self.amount_cents,
            deposited_at: self.deposited_at,
        }
    }

    pub fn from_entity(entity: entity::deposit::Model) -> Self {
        Self {
            id: entity.id,
            processor_id: entity.processor_id,
            amount_cents: entity.amount_cents,
            deposited_at: entity.deposited_at,
        }
    }
}

/// Parameters for recording a deposit.
#[derive(Debug, Clone)]
pub struct CreateDepositParam {
    pub processor_id: i32,
    pub amount_cents: i64,
    pub deposited_at: DateTime<Utc>,
}

/// Filter for deposit listings.
#[derive(Debug, Clone, Default)]
pub struct DepositFilter {
    pub processor_id: Option<i32>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

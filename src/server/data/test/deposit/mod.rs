use crate::server::{
    data::deposit::DepositRepository,
    model::deposit::{CreateDepositParam, DepositFilter},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod list;
mod list_for_window;

use crate::server::{
    data::shift::ShiftRepository,
    model::shift::{ShiftFilter, StartShiftParam, UpdateShiftParam},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod end;
mod find_open_by_user;
mod list;
mod update;

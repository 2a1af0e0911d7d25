use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParam, UpdateUserParam},
};
use entity::sea_orm_active_enums::UserRole;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod create;
mod delete;
mod find_by_email;
mod get_all_paginated;
mod set_password_hash;
mod update_profile;

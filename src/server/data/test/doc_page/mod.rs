use crate::server::{
    data::doc_page::DocPageRepository,
    model::docs::{CreateDocPageParam, UpdateDocPageParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_by_slug;
mod list_by_section;
mod update;

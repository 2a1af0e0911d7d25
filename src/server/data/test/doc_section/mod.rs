use crate::server::{
    data::{doc_page::DocPageRepository, doc_section::DocSectionRepository},
    model::docs::{CreateDocSectionParam, UpdateDocSectionParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete_with_pages;
mod get_all_ordered;
mod slug_exists;
mod update;

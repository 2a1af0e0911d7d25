use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "doc_section")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub slug: String,
    pub title: String,
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::doc_page::Entity")]
    DocPage,
}

impl Related<super::doc_page::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DocPage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

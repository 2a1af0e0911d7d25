use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "doc_page")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub section_id: i32,
    #[sea_orm(unique)]
    pub slug: String,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub position: i32,
    pub published: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::doc_section::Entity",
        from = "Column::SectionId",
        to = "super::doc_section::Column::Id",
        on_delete = "Cascade"
    )]
    DocSection,
}

impl Related<super::doc_section::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DocSection.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::CategoryKind;

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "finance_category")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub kind: CategoryKind,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::finance_transaction::Entity")]
    FinanceTransaction,
}

impl Related<super::finance_transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FinanceTransaction.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

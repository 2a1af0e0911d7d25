use sea_orm::entity::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "finance_transaction")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub account_id: i32,
    pub category_id: Option<i32>,
    pub counterparty_id: Option<i32>,
    pub amount_cents: i64,
    pub occurred_at: DateTimeUtc,
    pub note: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::finance_account::Entity",
        from = "Column::AccountId",
        to = "super::finance_account::Column::Id"
    )]
    FinanceAccount,
    #[sea_orm(
        belongs_to = "super::finance_category::Entity",
        from = "Column::CategoryId",
        to = "super::finance_category::Column::Id",
        on_delete = "SetNull"
    )]
    FinanceCategory,
    #[sea_orm(
        belongs_to = "super::counterparty::Entity",
        from = "Column::CounterpartyId",
        to = "super::counterparty::Column::Id",
        on_delete = "SetNull"
    )]
    Counterparty,
}

impl Related<super::finance_account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FinanceAccount.def()
    }
}

impl Related<super::finance_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FinanceCategory.def()
    }
}

impl Related<super::counterparty::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Counterparty.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "payment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub payment_id: i32,
    pub bill_id: i32,
    pub payment_method: String,
    pub payment_date: Date,
    pub amount_paid: f64,
    pub transaction_id: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::billing::Entity",
        from = "Column::BillId",
        to = "super::billing::Column::BillId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Billing,
}

impl Related<super::billing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Billing.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

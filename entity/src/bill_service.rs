use sea_orm::entity::prelude::*;

/// Junction between a bill and the services charged on it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bill_service")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub bill_service_id: i32,
    pub bill_id: i32,
    pub service_id: i32,
    pub quantity: i32,
    pub total_service_price: Option<f64>,
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
    #[sea_orm(
        belongs_to = "super::service::Entity",
        from = "Column::ServiceId",
        to = "super::service::Column::ServiceId",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Service,
}

impl Related<super::billing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Billing.def()
    }
}

impl Related<super::service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Service.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

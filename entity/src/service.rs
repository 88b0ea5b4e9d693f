use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "service")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub service_id: i32,
    pub service_name: String,
    pub description: Option<String>,
    pub unit_price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::bill_service::Entity")]
    BillService,
}

impl Related<super::bill_service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BillService.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

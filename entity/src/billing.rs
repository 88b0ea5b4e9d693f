use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "billing")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub bill_id: i32,
    pub reservation_id: i32,
    pub bill_date: Date,
    pub sub_total: Option<f64>,
    pub tax_amount: Option<f64>,
    pub total_amount: f64,
    pub payment_status: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::reservation::Entity",
        from = "Column::ReservationId",
        to = "super::reservation::Column::ReservationId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Reservation,
    #[sea_orm(has_many = "super::payment::Entity")]
    Payment,
    #[sea_orm(has_many = "super::bill_service::Entity")]
    BillService,
}

impl Related<super::reservation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservation.def()
    }
}

impl Related<super::payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payment.def()
    }
}

impl Related<super::bill_service::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BillService.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

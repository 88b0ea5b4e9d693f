use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reservation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub reservation_id: i32,
    pub guest_id: i32,
    pub room_number: String,
    pub check_in_date: Date,
    pub check_out_date: Date,
    pub booking_date: Option<Date>,
    pub number_of_adults: Option<i32>,
    pub number_of_children: Option<i32>,
    pub reservation_status: Option<String>,
    pub price_per_night: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::guest::Entity",
        from = "Column::GuestId",
        to = "super::guest::Column::GuestId",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Guest,
    #[sea_orm(
        belongs_to = "super::room::Entity",
        from = "Column::RoomNumber",
        to = "super::room::Column::RoomNumber",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Room,
    #[sea_orm(has_many = "super::billing::Entity")]
    Billing,
}

impl Related<super::guest::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Guest.def()
    }
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl Related<super::billing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Billing.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261018_000002_create_room_table::Room, m20261018_000003_create_guest_table::Guest,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::ReservationId))
                    .col(integer(Reservation::GuestId))
                    .col(string(Reservation::RoomNumber))
                    .col(date(Reservation::CheckInDate))
                    .col(date(Reservation::CheckOutDate))
                    .col(date_null(Reservation::BookingDate))
                    .col(integer_null(Reservation::NumberOfAdults))
                    .col(integer_null(Reservation::NumberOfChildren))
                    .col(string_null(Reservation::ReservationStatus))
                    .col(double_null(Reservation::PricePerNight))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_guest_id")
                            .from(Reservation::Table, Reservation::GuestId)
                            .to(Guest::Table, Guest::GuestId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_room_number")
                            .from(Reservation::Table, Reservation::RoomNumber)
                            .to(Room::Table, Room::RoomNumber)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    ReservationId,
    GuestId,
    RoomNumber,
    CheckInDate,
    CheckOutDate,
    BookingDate,
    NumberOfAdults,
    NumberOfChildren,
    ReservationStatus,
    PricePerNight,
}

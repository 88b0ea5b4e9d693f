use sea_orm_migration::{prelude::*, schema::*};

use super::m20261018_000001_create_room_type_table::RoomType;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Room::Table)
                    .if_not_exists()
                    .col(string(Room::RoomNumber).primary_key())
                    .col(integer(Room::RoomTypeId))
                    .col(integer(Room::FloorNumber))
                    .col(string(Room::CurrentStatus))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_room_type_id")
                            .from(Room::Table, Room::RoomTypeId)
                            .to(RoomType::Table, RoomType::RoomTypeId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Room::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Room {
    Table,
    RoomNumber,
    RoomTypeId,
    FloorNumber,
    CurrentStatus,
}

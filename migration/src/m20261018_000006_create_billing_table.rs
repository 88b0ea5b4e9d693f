use sea_orm_migration::{prelude::*, schema::*};

use super::m20261018_000005_create_reservation_table::Reservation;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Billing::Table)
                    .if_not_exists()
                    .col(pk_auto(Billing::BillId))
                    .col(integer(Billing::ReservationId))
                    .col(date(Billing::BillDate))
                    .col(double_null(Billing::SubTotal))
                    .col(double_null(Billing::TaxAmount))
                    .col(double(Billing::TotalAmount))
                    .col(string_null(Billing::PaymentStatus))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_billing_reservation_id")
                            .from(Billing::Table, Billing::ReservationId)
                            .to(Reservation::Table, Reservation::ReservationId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Billing::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Billing {
    Table,
    BillId,
    ReservationId,
    BillDate,
    SubTotal,
    TaxAmount,
    TotalAmount,
    PaymentStatus,
}

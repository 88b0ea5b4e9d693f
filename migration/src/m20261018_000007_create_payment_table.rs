use sea_orm_migration::{prelude::*, schema::*};

use super::m20261018_000006_create_billing_table::Billing;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payment::Table)
                    .if_not_exists()
                    .col(pk_auto(Payment::PaymentId))
                    .col(integer(Payment::BillId))
                    .col(string(Payment::PaymentMethod))
                    .col(date(Payment::PaymentDate))
                    .col(double(Payment::AmountPaid))
                    .col(string_null(Payment::TransactionId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_bill_id")
                            .from(Payment::Table, Payment::BillId)
                            .to(Billing::Table, Billing::BillId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Payment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Payment {
    Table,
    PaymentId,
    BillId,
    PaymentMethod,
    PaymentDate,
    AmountPaid,
    TransactionId,
}

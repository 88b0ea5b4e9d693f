use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261018_000006_create_billing_table::Billing, m20261018_000008_create_service_table::Service,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BillService::Table)
                    .if_not_exists()
                    .col(pk_auto(BillService::BillServiceId))
                    .col(integer(BillService::BillId))
                    .col(integer(BillService::ServiceId))
                    .col(integer(BillService::Quantity))
                    .col(double_null(BillService::TotalServicePrice))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bill_service_bill_id")
                            .from(BillService::Table, BillService::BillId)
                            .to(Billing::Table, Billing::BillId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bill_service_service_id")
                            .from(BillService::Table, BillService::ServiceId)
                            .to(Service::Table, Service::ServiceId)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BillService::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BillService {
    Table,
    BillServiceId,
    BillId,
    ServiceId,
    Quantity,
    TotalServicePrice,
}

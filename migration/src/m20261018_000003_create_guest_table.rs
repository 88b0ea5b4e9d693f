use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Guest::Table)
                    .if_not_exists()
                    .col(pk_auto(Guest::GuestId))
                    .col(string(Guest::FirstName))
                    .col(string(Guest::LastName))
                    .col(string(Guest::Email))
                    .col(string_null(Guest::PhoneNumber))
                    .col(string_null(Guest::Address))
                    .col(string(Guest::IdProof))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Guest::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Guest {
    Table,
    GuestId,
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    Address,
    IdProof,
}

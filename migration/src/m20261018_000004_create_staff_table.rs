use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Staff::Table)
                    .if_not_exists()
                    .col(pk_auto(Staff::StaffId))
                    .col(string(Staff::FirstName))
                    .col(string(Staff::LastName))
                    .col(string(Staff::Email))
                    .col(string_null(Staff::PhoneNumber))
                    .col(string_uniq(Staff::Username))
                    .col(string(Staff::PasswordHash))
                    .col(string(Staff::Role))
                    .col(string_null(Staff::Address))
                    .col(date_null(Staff::DateOfHire))
                    .col(double_null(Staff::Salary))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Staff::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Staff {
    Table,
    StaffId,
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    Username,
    PasswordHash,
    Role,
    Address,
    DateOfHire,
    Salary,
}

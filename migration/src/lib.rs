pub use sea_orm_migration::prelude::*;

mod m20261018_000001_create_room_type_table;
mod m20261018_000002_create_room_table;
mod m20261018_000003_create_guest_table;
mod m20261018_000004_create_staff_table;
mod m20261018_000005_create_reservation_table;
mod m20261018_000006_create_billing_table;
mod m20261018_000007_create_payment_table;
mod m20261018_000008_create_service_table;
mod m20261018_000009_create_bill_service_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261018_000001_create_room_type_table::Migration),
            Box::new(m20261018_000002_create_room_table::Migration),
            Box::new(m20261018_000003_create_guest_table::Migration),
            Box::new(m20261018_000004_create_staff_table::Migration),
            Box::new(m20261018_000005_create_reservation_table::Migration),
            Box::new(m20261018_000006_create_billing_table::Migration),
            Box::new(m20261018_000007_create_payment_table::Migration),
            Box::new(m20261018_000008_create_service_table::Migration),
            Box::new(m20261018_000009_create_bill_service_table::Migration),
        ]
    }
}

use crate::server::data::{
    bill_service::BillServiceRepository, billing::BillRepository, payment::PaymentRepository,
    reservation::ReservationRepository,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod delete;

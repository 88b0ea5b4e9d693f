use crate::server::{
    data::reservation::ReservationRepository, model::reservation::CreateReservationParams,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::helpers::date};

mod create;
mod update_status;

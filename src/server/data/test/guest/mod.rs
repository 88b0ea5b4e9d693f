use crate::server::{
    data::guest::GuestRepository,
    model::guest::{CreateGuestParams, UpdateGuestParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod get_by_id;
mod update;

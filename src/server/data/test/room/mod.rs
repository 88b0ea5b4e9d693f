use crate::server::{
    data::room::RoomRepository,
    model::room::{CreateRoomParams, UpdateRoomParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::room::RoomFactory};

mod create;
mod get_all_with_details;
mod get_available;
mod update;

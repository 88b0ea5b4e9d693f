use crate::server::{data::staff::StaffRepository, model::staff::UpdateStaffParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::staff::StaffFactory};

mod count;
mod find_by_username;
mod update;

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::staff::{CreateStaffParams, Staff, UpdateStaffParams};

pub struct StaffRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StaffRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a staff member whose password has already been hashed
    pub async fn create(&self, params: CreateStaffParams) -> Result<Staff, DbErr> {
        let staff = entity::staff::ActiveModel {
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            email: ActiveValue::Set(params.email),
            phone_number: ActiveValue::Set(params.phone_number),
            username: ActiveValue::Set(params.username),
            password_hash: ActiveValue::Set(params.password_hash),
            role: ActiveValue::Set(params.role),
            address: ActiveValue::Set(params.address),
            date_of_hire: ActiveValue::Set(params.date_of_hire),
            salary: ActiveValue::Set(params.salary),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Staff::from_entity(staff))
    }

    pub async fn get_all(&self) -> Result<Vec<Staff>, DbErr> {
        let staff = entity::prelude::Staff::find()
            .order_by_asc(entity::staff::Column::StaffId)
            .all(self.db)
            .await?;

        Ok(staff.into_iter().map(Staff::from_entity).collect())
    }

    pub async fn get_by_id(&self, staff_id: i32) -> Result<Option<Staff>, DbErr> {
        let staff = entity::prelude::Staff::find_by_id(staff_id)
            .one(self.db)
            .await?;

        Ok(staff.map(Staff::from_entity))
    }

    /// Looks up a staff member by login username
    pub async fn find_by_username(&self, username: &str) -> Result<Option<Staff>, DbErr> {
        let staff = entity::prelude::Staff::find()
            .filter(entity::staff::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(staff.map(Staff::from_entity))
    }

    pub async fn exists(&self, staff_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Staff::find_by_id(staff_id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Counts all staff rows, used to decide whether default accounts are seeded
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Staff::find().count(self.db).await
    }

    pub async fn update(&self, params: UpdateStaffParams) -> Result<Staff, DbErr> {
        let staff = entity::prelude::Staff::find_by_id(params.staff_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Staff member with id {} not found",
                params.staff_id
            )))?;

        let mut active_model: entity::staff::ActiveModel = staff.into();
        if let Some(first_name) = params.first_name {
            active_model.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = params.last_name {
            active_model.last_name = ActiveValue::Set(last_name);
        }
        if let Some(email) = params.email {
            active_model.email = ActiveValue::Set(email);
        }
        if let Some(phone_number) = params.phone_number {
            active_model.phone_number = ActiveValue::Set(phone_number);
        }
        if let Some(username) = params.username {
            active_model.username = ActiveValue::Set(username);
        }
        if let Some(password_hash) = params.password_hash {
            active_model.password_hash = ActiveValue::Set(password_hash);
        }
        if let Some(role) = params.role {
            active_model.role = ActiveValue::Set(role);
        }
        if let Some(address) = params.address {
            active_model.address = ActiveValue::Set(address);
        }
        if let Some(date_of_hire) = params.date_of_hire {
            active_model.date_of_hire = ActiveValue::Set(date_of_hire);
        }
        if let Some(salary) = params.salary {
            active_model.salary = ActiveValue::Set(salary);
        }

        let staff = active_model.update(self.db).await?;

        Ok(Staff::from_entity(staff))
    }

    pub async fn delete(&self, staff_id: i32) -> Result<(), DbErr> {
        entity::prelude::Staff::delete_by_id(staff_id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}

//! Reservation factory for creating test reservation entities.

use crate::factory::helpers::date;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a booked four-night reservation for the given guest and room.
///
/// # Arguments
/// - `db` - Database connection
/// - `guest_id` - Guest making the reservation
/// - `room_number` - Room being reserved
pub async fn create_reservation(
    db: &DatabaseConnection,
    guest_id: i32,
    room_number: &str,
) -> Result<entity::reservation::Model, DbErr> {
    entity::reservation::ActiveModel {
        guest_id: ActiveValue::Set(guest_id),
        room_number: ActiveValue::Set(room_number.to_string()),
        check_in_date: ActiveValue::Set(date(2025, 12, 1)),
        check_out_date: ActiveValue::Set(date(2025, 12, 5)),
        booking_date: ActiveValue::Set(Some(date(2025, 11, 1))),
        number_of_adults: ActiveValue::Set(Some(2)),
        number_of_children: ActiveValue::Set(Some(0)),
        reservation_status: ActiveValue::Set(Some("Booked".to_string())),
        price_per_night: ActiveValue::Set(Some(350.0)),
        ..Default::default()
    }
    .insert(db)
    .await
}

//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used for unique usernames, emails and room numbers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Builds a calendar date for test fixtures.
///
/// Panics on an invalid date, which only happens with a typo in a test.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
}

/// Creates a reservation together with the guest, room type and room it references.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((guest, room, reservation))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_reservation_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::guest::Model,
        entity::room::Model,
        entity::reservation::Model,
    ),
    DbErr,
> {
    let room_type = crate::factory::room_type::create_room_type(db).await?;
    let room = crate::factory::room::create_room(db, room_type.room_type_id).await?;
    let guest = crate::factory::guest::create_guest(db).await?;
    let reservation =
        crate::factory::reservation::create_reservation(db, guest.guest_id, &room.room_number)
            .await?;

    Ok((guest, room, reservation))
}

/// Creates a bill and the full reservation hierarchy behind it.
///
/// # Returns
/// - `Ok((reservation, bill))` - The reservation and the bill issued against it
/// - `Err(DbErr)` - Database error during creation
pub async fn create_bill_with_dependencies(
    db: &DatabaseConnection,
) -> Result<(entity::reservation::Model, entity::billing::Model), DbErr> {
    let (_, _, reservation) = create_reservation_with_dependencies(db).await?;
    let bill = crate::factory::billing::create_bill(db, reservation.reservation_id).await?;

    Ok((reservation, bill))
}

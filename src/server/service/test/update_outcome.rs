use crate::server::{
    error::AppError,
    model::{guest::UpdateGuestParams, room::UpdateRoomParams, UpdateOutcome},
    service::{guest::GuestService, room::RoomService},
};
use test_utils::{builder::TestBuilder, factory};

/// Tests updating a guest that does not exist, with and without fields.
///
/// Expected: NotFound in both cases
#[tokio::test]
async fn reports_not_found_before_checking_fields() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = GuestService::new(db);

    let empty = service
        .update(UpdateGuestParams {
            guest_id: 99999,
            ..Default::default()
        })
        .await?;
    let with_fields = service
        .update(UpdateGuestParams {
            guest_id: 99999,
            first_name: Some("Ghost".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(empty, UpdateOutcome::NotFound);
    assert_eq!(with_fields, UpdateOutcome::NotFound);
    assert!(service.get_all().await?.is_empty());

    Ok(())
}

/// Tests updating an existing guest without any fields.
///
/// Expected: Unchanged with the row untouched
#[tokio::test]
async fn reports_unchanged_for_empty_update() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::create_guest(db).await?;
    let service = GuestService::new(db);

    let outcome = service
        .update(UpdateGuestParams {
            guest_id: guest.guest_id,
            ..Default::default()
        })
        .await?;

    assert_eq!(outcome, UpdateOutcome::Unchanged);
    let stored = service.get_by_id(guest.guest_id).await?.unwrap();
    assert_eq!(stored.email, guest.email);

    Ok(())
}

/// Tests updating a room by its room number.
///
/// Expected: Updated with the new status stored
#[tokio::test]
async fn updates_room_by_number() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room_type = factory::create_room_type(db).await?;
    let room = factory::create_room(db, room_type.room_type_id).await?;
    let service = RoomService::new(db);

    let outcome = service
        .update(UpdateRoomParams {
            room_number: room.room_number.clone(),
            current_status: Some("Occupied".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(outcome, UpdateOutcome::Updated);
    let stored = service.get_by_id(&room.room_number).await?.unwrap();
    assert_eq!(stored.current_status, "Occupied");

    Ok(())
}

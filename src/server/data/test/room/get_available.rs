use super::*;

/// Tests the available-rooms filter.
///
/// Verifies that only rooms of the requested type whose status is exactly
/// "Available" are returned.
///
/// Expected: Ok with the single matching room
#[tokio::test]
async fn returns_only_available_rooms_of_type() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let wanted = factory::create_room_type(db).await?;
    let other = factory::create_room_type(db).await?;

    RoomFactory::new(db, wanted.room_type_id)
        .room_number("401")
        .build()
        .await?;
    RoomFactory::new(db, wanted.room_type_id)
        .room_number("402")
        .status("Occupied")
        .build()
        .await?;
    RoomFactory::new(db, wanted.room_type_id)
        .room_number("403")
        .status("available")
        .build()
        .await?;
    RoomFactory::new(db, other.room_type_id)
        .room_number("404")
        .build()
        .await?;

    let rooms = RoomRepository::new(db)
        .get_available(wanted.room_type_id)
        .await?;

    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0].room_number, "401");

    Ok(())
}

/// Tests the available-rooms filter for a type with no rooms.
///
/// Expected: Ok with empty Vec
#[tokio::test]
async fn returns_empty_for_unknown_type() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let rooms = RoomRepository::new(db).get_available(99999).await?;

    assert!(rooms.is_empty());

    Ok(())
}

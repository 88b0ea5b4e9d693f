use super::*;

/// Tests creating a room under a caller-chosen room number.
///
/// Expected: Ok with the room retrievable by its room number
#[tokio::test]
async fn creates_room_with_given_number() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room_type = factory::create_room_type(db).await?;

    let repo = RoomRepository::new(db);
    let room = repo
        .create(CreateRoomParams {
            room_number: "101".to_string(),
            room_type_id: room_type.room_type_id,
            floor_number: 1,
            current_status: "Available".to_string(),
        })
        .await?;

    assert_eq!(room.room_number, "101");

    let stored = repo.get_by_id("101").await?;
    assert_eq!(stored, Some(room));

    Ok(())
}

/// Tests creating a room with a room number that is already taken.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_for_duplicate_room_number() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room_type = factory::create_room_type(db).await?;
    RoomFactory::new(db, room_type.room_type_id)
        .room_number("202")
        .build()
        .await?;

    let result = RoomRepository::new(db)
        .create(CreateRoomParams {
            room_number: "202".to_string(),
            room_type_id: room_type.room_type_id,
            floor_number: 2,
            current_status: "Available".to_string(),
        })
        .await;

    assert!(result.is_err());

    Ok(())
}

use super::*;

/// Tests changing a room's status.
///
/// Expected: Ok with status changed and floor untouched
#[tokio::test]
async fn updates_room_status() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room_type = factory::create_room_type(db).await?;
    let room = RoomFactory::new(db, room_type.room_type_id)
        .floor_number(5)
        .build()
        .await?;

    let updated = RoomRepository::new(db)
        .update(UpdateRoomParams {
            room_number: room.room_number.clone(),
            current_status: Some("Maintenance".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.room_number, room.room_number);
    assert_eq!(updated.current_status, "Maintenance");
    assert_eq!(updated.floor_number, 5);

    Ok(())
}

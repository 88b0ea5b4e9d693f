use super::*;

/// Tests the room listing joined with room types.
///
/// Verifies that each room carries the name and base price of its own room type.
///
/// Expected: Ok with one entry per room
#[tokio::test]
async fn joins_rooms_with_their_room_type() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let suite = factory::create_room_type(db).await?;
    let single = factory::room_type::RoomTypeFactory::new(db)
        .type_name("Single")
        .base_price(90.0)
        .build()
        .await?;

    RoomFactory::new(db, suite.room_type_id)
        .room_number("301")
        .floor_number(3)
        .build()
        .await?;
    RoomFactory::new(db, single.room_type_id)
        .room_number("102")
        .status("Occupied")
        .build()
        .await?;

    let details = RoomRepository::new(db).get_all_with_details().await?;

    assert_eq!(details.len(), 2);

    let single_room = details.iter().find(|d| d.room_number == "102").unwrap();
    assert_eq!(single_room.room_type, "Single");
    assert_eq!(single_room.base_price, 90.0);
    assert_eq!(single_room.current_status, "Occupied");

    let suite_room = details.iter().find(|d| d.room_number == "301").unwrap();
    assert_eq!(suite_room.room_type, suite.type_name);
    assert_eq!(suite_room.base_price, suite.base_price);
    assert_eq!(suite_room.floor_number, 3);

    Ok(())
}

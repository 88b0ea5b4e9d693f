use super::*;

/// Tests listing guests.
///
/// Verifies that every guest is returned in primary key order.
///
/// Expected: Ok with guests ordered by ID
#[tokio::test]
async fn returns_guests_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_guest(db).await?;
    let second = factory::create_guest(db).await?;

    let guests = GuestRepository::new(db).get_all().await?;

    assert_eq!(guests.len(), 2);
    assert_eq!(guests[0].guest_id, first.guest_id);
    assert_eq!(guests[1].guest_id, second.guest_id);

    Ok(())
}

/// Tests listing guests from an empty table.
///
/// Expected: Ok with empty Vec
#[tokio::test]
async fn returns_empty_list_without_guests() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guests = GuestRepository::new(db).get_all().await?;

    assert!(guests.is_empty());

    Ok(())
}

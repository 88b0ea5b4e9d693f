use super::*;

/// Tests getting an existing guest by ID.
///
/// Expected: Ok(Some(Guest))
#[tokio::test]
async fn gets_existing_guest() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_guest(db).await?;

    let guest = GuestRepository::new(db).get_by_id(created.guest_id).await?;

    assert!(guest.is_some());
    let guest = guest.unwrap();
    assert_eq!(guest.guest_id, created.guest_id);
    assert_eq!(guest.email, created.email);

    Ok(())
}

/// Tests getting a nonexistent guest.
///
/// Verifies that the repository returns None and `exists` reports false.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_guest() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuestRepository::new(db);

    assert!(repo.get_by_id(99999).await?.is_none());
    assert!(!repo.exists(99999).await?);

    Ok(())
}

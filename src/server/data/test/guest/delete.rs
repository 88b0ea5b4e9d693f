use super::*;

/// Tests deleting a guest by ID.
///
/// Expected: Ok with guest removed
#[tokio::test]
async fn deletes_guest_successfully() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::create_guest(db).await?;

    let repo = GuestRepository::new(db);
    repo.delete(guest.guest_id).await?;

    assert!(!repo.exists(guest.guest_id).await?);

    Ok(())
}

/// Tests deleting a guest that still has a reservation.
///
/// Verifies that the foreign key restricts the delete and the guest remains.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn restricts_delete_of_guest_with_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (guest, _, _) = factory::helpers::create_reservation_with_dependencies(db).await?;

    let repo = GuestRepository::new(db);
    let result = repo.delete(guest.guest_id).await;

    assert!(result.is_err());
    assert!(repo.exists(guest.guest_id).await?);

    Ok(())
}

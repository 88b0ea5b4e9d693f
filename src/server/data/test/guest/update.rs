use super::*;

/// Tests a partial update.
///
/// Verifies that only the supplied columns change and that a nullable column
/// can be cleared.
///
/// Expected: Ok with email changed, phone number cleared, names untouched
#[tokio::test]
async fn updates_only_supplied_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_guest(db).await?;
    assert!(created.phone_number.is_some());

    let repo = GuestRepository::new(db);
    let updated = repo
        .update(UpdateGuestParams {
            guest_id: created.guest_id,
            email: Some("changed@example.com".to_string()),
            phone_number: Some(None),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.email, "changed@example.com");
    assert_eq!(updated.phone_number, None);
    assert_eq!(updated.first_name, created.first_name);
    assert_eq!(updated.last_name, created.last_name);
    assert_eq!(updated.address, created.address);

    Ok(())
}

/// Tests updating a guest that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_nonexistent_guest() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = GuestRepository::new(db)
        .update(UpdateGuestParams {
            guest_id: 99999,
            email: Some("nobody@example.com".to_string()),
            ..Default::default()
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}

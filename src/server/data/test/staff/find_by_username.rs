use super::*;

/// Tests looking up a staff member by username.
///
/// Expected: Ok(Some(Staff)) with the stored hash and role
#[tokio::test]
async fn finds_staff_by_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    StaffFactory::new(db)
        .username("frontdesk")
        .password_hash("$argon2id$stub")
        .role("Manager")
        .build()
        .await?;
    factory::create_staff(db).await?;

    let staff = StaffRepository::new(db).find_by_username("frontdesk").await?;

    assert!(staff.is_some());
    let staff = staff.unwrap();
    assert_eq!(staff.username, "frontdesk");
    assert_eq!(staff.role, "Manager");
    assert_eq!(staff.password_hash, "$argon2id$stub");

    Ok(())
}

/// Tests looking up an unknown username.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_username() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_staff(db).await?;

    let staff = StaffRepository::new(db).find_by_username("ghost").await?;

    assert!(staff.is_none());

    Ok(())
}

use super::*;

/// Tests replacing a staff member's password hash and clearing the salary.
///
/// Expected: Ok with new hash stored and username untouched
#[tokio::test]
async fn updates_password_hash_and_nullable_columns() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::create_staff(db).await?;

    let updated = StaffRepository::new(db)
        .update(UpdateStaffParams {
            staff_id: created.staff_id,
            password_hash: Some("$argon2id$new".to_string()),
            salary: Some(None),
            ..Default::default()
        })
        .await?;

    assert_eq!(updated.password_hash, "$argon2id$new");
    assert_eq!(updated.salary, None);
    assert_eq!(updated.username, created.username);

    Ok(())
}

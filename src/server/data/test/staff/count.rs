use super::*;

/// Tests counting staff rows.
///
/// Expected: Ok(0) on an empty table, then Ok(2)
#[tokio::test]
async fn counts_staff_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StaffRepository::new(db);
    assert_eq!(repo.count().await?, 0);

    factory::create_staff(db).await?;
    factory::create_staff(db).await?;

    assert_eq!(repo.count().await?, 2);

    Ok(())
}

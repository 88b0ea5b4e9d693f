use super::*;

/// Tests setting a reservation's status.
///
/// Verifies that only the status column changes.
///
/// Expected: Ok with new status
#[tokio::test]
async fn sets_reservation_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, reservation) = factory::helpers::create_reservation_with_dependencies(db).await?;

    let updated = ReservationRepository::new(db)
        .update_status(reservation.reservation_id, "Checked-in".to_string())
        .await?;

    assert_eq!(updated.reservation_status.as_deref(), Some("Checked-in"));
    assert_eq!(updated.check_in_date, reservation.check_in_date);
    assert_eq!(updated.room_number, reservation.room_number);

    Ok(())
}

/// Tests setting the status of a reservation that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_nonexistent_reservation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_hotel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ReservationRepository::new(db)
        .update_status(99999, "Checked-out".to_string())
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
